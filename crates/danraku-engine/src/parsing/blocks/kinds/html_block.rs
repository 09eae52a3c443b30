use std::sync::LazyLock;

use regex::Regex;

use super::BLANK;

/// A line that is nothing but one complete open or closing tag.
static COMPLETE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:<[A-Za-z][A-Za-z0-9-]*(?:\s+[A-Za-z_:][A-Za-z0-9_.:-]*(?:\s*=\s*(?:[^\s"'=<>`]+|'[^']*'|"[^"]*"))?)*\s*/?>|</[A-Za-z][A-Za-z0-9-]*\s*>)[ \t]*$"#,
    )
    .expect("complete tag pattern is valid")
});

/// Tags GFM never lets through as raw HTML.
static DISALLOWED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<(/?(?:title|textarea|style|xmp|iframe|noembed|noframes|script|plaintext)(?:\s|/?>))",
    )
    .expect("disallowed tag pattern is valid")
});

/// Where an HTML block stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlBlockEnd {
    /// At the line closing a `pre`, `script`, `style` or `textarea` element.
    RawText,
    /// At the first line containing the marker (`-->`, `?>`, `>`, `]]>`).
    Marker(&'static str),
    /// Before the next blank line.
    BlankLine,
}

/// A line that opens an HTML block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlBlockOpen {
    pub end: HtmlBlockEnd,
    /// A lone tag of an unknown element cannot cut a paragraph short.
    pub interrupts_paragraph: bool,
}

/// Raw HTML blocks. Their lines are kept verbatim and never inline-parsed.
pub struct HtmlBlock;

impl HtmlBlock {
    const RAW_TEXT_TAGS: [&'static str; 4] = ["pre", "script", "style", "textarea"];
    const BLOCK_TAGS: [&'static str; 62] = [
        "address", "article", "aside", "base", "basefont", "blockquote", "body", "caption",
        "center", "col", "colgroup", "dd", "details", "dialog", "dir", "div", "dl", "dt",
        "fieldset", "figcaption", "figure", "footer", "form", "frame", "frameset", "h1", "h2",
        "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "iframe", "legend", "li", "link",
        "main", "menu", "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param",
        "search", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title",
        "tr", "track", "ul",
    ];

    pub fn start(remainder: &str) -> Option<HtmlBlockOpen> {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = remainder[indent..].strip_prefix('<')?;
        let open = |end| {
            Some(HtmlBlockOpen {
                end,
                interrupts_paragraph: true,
            })
        };

        if let Some((name, rest)) = tag_name(t)
            && Self::RAW_TEXT_TAGS.contains(&name.as_str())
            && (rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '>'))
        {
            return open(HtmlBlockEnd::RawText);
        }
        if t.starts_with("!--") {
            return open(HtmlBlockEnd::Marker("-->"));
        }
        if t.starts_with('?') {
            return open(HtmlBlockEnd::Marker("?>"));
        }
        if t.starts_with("![CDATA[") {
            return open(HtmlBlockEnd::Marker("]]>"));
        }
        if t.strip_prefix('!')
            .is_some_and(|d| d.starts_with(|c: char| c.is_ascii_alphabetic()))
        {
            return open(HtmlBlockEnd::Marker(">"));
        }

        let (name, rest) = tag_name(t.strip_prefix('/').unwrap_or(t))?;
        if Self::BLOCK_TAGS.contains(&name.as_str())
            && (rest.is_empty()
                || rest.starts_with(|c: char| c.is_whitespace() || c == '>')
                || rest.starts_with("/>"))
        {
            return open(HtmlBlockEnd::BlankLine);
        }
        if !Self::RAW_TEXT_TAGS.contains(&name.as_str())
            && COMPLETE_TAG.is_match(&remainder[indent..])
        {
            return Some(HtmlBlockOpen {
                end: HtmlBlockEnd::BlankLine,
                interrupts_paragraph: false,
            });
        }
        None
    }

    /// Whether `line` is the last line of a block that ends with `end`.
    pub fn ends(end: HtmlBlockEnd, line: &str) -> bool {
        match end {
            HtmlBlockEnd::RawText => {
                let lower = line.to_ascii_lowercase();
                Self::RAW_TEXT_TAGS
                    .iter()
                    .any(|tag| lower.contains(&format!("</{tag}>")))
            }
            HtmlBlockEnd::Marker(marker) => line.contains(marker),
            HtmlBlockEnd::BlankLine => line.trim_matches(BLANK).is_empty(),
        }
    }

    /// Escapes the `<` of tags such as `<script>` and `<textarea>`, leaving
    /// everything else as written.
    pub fn filter_disallowed(html: &str) -> String {
        DISALLOWED_TAG.replace_all(html, "&lt;$1").into_owned()
    }
}

/// A lowercased tag name at the start of `s` and the text after it.
fn tag_name(s: &str) -> Option<(String, &str)> {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(s.len());
    Some((s[..len].to_ascii_lowercase(), &s[len..]))
}
