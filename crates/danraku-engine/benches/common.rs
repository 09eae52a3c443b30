// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# 見出し\n\nこの拡張機能は素晴らしい!異論はないよね?うん。**強調**と[リンク](https://example.com)。\n\n\
                > 引用文です！本当に？\n\n- 項目一\n- [x] 項目二\n\n\
                | 名称 | 説明 |\n|---|---|\n| Danraku | 優れた拡張機能! |\n\n\
                ```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}
