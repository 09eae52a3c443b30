use super::BLANK;

/// Column alignment declared by a table's delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// GFM pipe table syntax.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Splits a row into trimmed cell byte ranges. Leading and trailing pipes
    /// are optional and `\|` does not split.
    pub fn split_row(line: &str) -> Vec<(usize, usize)> {
        let start = line.len() - line.trim_start_matches(BLANK).len();
        let end = line.trim_end_matches(BLANK).len();
        if start >= end {
            return vec![];
        }

        let b = line.as_bytes();
        let mut i = start;
        let mut stop = end;
        if b[i] == Self::PIPE as u8 {
            i += 1;
        }
        if stop > i && b[stop - 1] == Self::PIPE as u8 && !(stop >= 2 && b[stop - 2] == b'\\') {
            stop -= 1;
        }

        let trim = |a: usize, z: usize| {
            let s = &line[a..z];
            let lead = s.len() - s.trim_start_matches(BLANK).len();
            (a + lead, a + lead + s.trim_matches(BLANK).len())
        };

        let mut cells = vec![];
        let mut cell_start = i;
        let mut j = i;
        while j < stop {
            match b[j] {
                b'\\' => j += 2,
                b'|' => {
                    cells.push(trim(cell_start, j));
                    cell_start = j + 1;
                    j += 1;
                }
                _ => j += 1,
            }
        }
        cells.push(trim(cell_start, stop));
        cells
    }

    /// Parses a delimiter row such as `|:---|---:|`.
    pub fn delimiter_row(line: &str) -> Option<Vec<Alignment>> {
        if !line.contains(Self::PIPE) {
            return None;
        }
        let cells = Self::split_row(line);
        if cells.is_empty() {
            return None;
        }
        cells
            .into_iter()
            .map(|(a, z)| {
                let cell = &line[a..z];
                let left = cell.starts_with(':');
                let right = cell.len() > 1 && cell.ends_with(':');
                let dashes = cell.trim_start_matches(':').trim_end_matches(':');
                if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
                    return None;
                }
                Some(match (left, right) {
                    (true, true) => Alignment::Center,
                    (true, false) => Alignment::Left,
                    (false, true) => Alignment::Right,
                    (false, false) => Alignment::None,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> Vec<&str> {
        Table::split_row(line)
            .into_iter()
            .map(|(a, z)| &line[a..z])
            .collect()
    }

    #[test]
    fn splits_with_and_without_outer_pipes() {
        assert_eq!(cells("名称 |説明 "), vec!["名称", "説明"]);
        assert_eq!(cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(cells("| a \\| b |"), vec!["a \\| b"]);
    }

    #[test]
    fn ideographic_space_stays_in_cells() {
        assert_eq!(cells("| 　問 | 答　 |"), vec!["　問", "答　"]);
    }

    #[test]
    fn parses_alignments() {
        assert_eq!(
            Table::delimiter_row("|:--|:-:|--:|---|"),
            Some(vec![
                Alignment::Left,
                Alignment::Center,
                Alignment::Right,
                Alignment::None
            ])
        );
        assert_eq!(
            Table::delimiter_row("-----------------|--------------------"),
            Some(vec![Alignment::None, Alignment::None])
        );
    }

    #[test]
    fn rejects_non_delimiter_rows() {
        assert_eq!(Table::delimiter_row("---"), None);
        assert_eq!(Table::delimiter_row("| a | b |"), None);
        assert_eq!(Table::delimiter_row("|:|"), None);
    }
}
