//! Tabular rendering of ranked path counts.
//!
//! Produces a plain-text table with a header, a dash separator, and one row
//! per entry. Every line is padded to the same total width so the table
//! stays aligned regardless of path lengths. Styling (if any) is applied by
//! the renderer afterwards; the column layout is identical either way.

use super::ranking::PathCount;

const CHANGES_LABEL: &str = "Changes";
const FILE_LABEL: &str = "File/Folder";

/// Width of the count column, fixed to the "Changes" label.
const CHANGES_WIDTH: usize = 7;
/// Floor of the path column, the "File/Folder" label length.
const MIN_FILE_WIDTH: usize = 11;

/// Renders ranked entries as an aligned multi-line table.
///
/// An empty ranking renders header and separator only.
pub fn render(entries: &[PathCount]) -> String {
    // Measured in chars to match how format! counts padding width, so
    // non-ASCII path names stay aligned.
    let file_width = entries
        .iter()
        .map(|e| e.path.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_FILE_WIDTH);

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!(
        "{:<cw$} | {:<fw$}",
        CHANGES_LABEL,
        FILE_LABEL,
        cw = CHANGES_WIDTH,
        fw = file_width
    ));
    lines.push(format!(
        "{} | {}",
        "-".repeat(CHANGES_WIDTH),
        "-".repeat(file_width)
    ));

    for entry in entries {
        lines.push(format!(
            "{:<cw$} | {:<fw$}",
            entry.count,
            entry.path,
            cw = CHANGES_WIDTH,
            fw = file_width
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, count: u32) -> PathCount {
        PathCount {
            path: path.to_string(),
            count,
        }
    }

    #[test]
    fn test_render_concrete_scenario() {
        // Two paths tied at two changes each; both shorter than the header
        // label, so the file column sits at its floor of 11.
        let table = render(&[entry("a.txt", 2), entry("b.txt", 2)]);

        let expected = [
            "Changes | File/Folder",
            "------- | -----------",
            "2       | a.txt      ",
            "2       | b.txt      ",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_uniform_line_width() {
        let table = render(&[
            entry("src/very/deeply/nested/module.rs", 14),
            entry("a", 3),
        ]);

        let widths: Vec<usize> = table.lines().map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));

        // 7 for the count column, 3 for the joint, path width for the rest.
        let path_width = "src/very/deeply/nested/module.rs".len();
        assert_eq!(widths[0], CHANGES_WIDTH + 3 + path_width);
    }

    #[test]
    fn test_render_non_ascii_paths_stay_aligned() {
        let table = render(&[entry("résumé.txt", 3), entry("notes.md", 1)]);

        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));

        // "résumé.txt" is ten chars (twelve bytes), under the column floor.
        assert_eq!(widths[0], CHANGES_WIDTH + 3 + MIN_FILE_WIDTH);
    }

    #[test]
    fn test_render_file_column_floor() {
        let table = render(&[entry("a", 1)]);
        let first = table.lines().next().unwrap();
        assert_eq!(first.len(), CHANGES_WIDTH + 3 + MIN_FILE_WIDTH);
    }

    #[test]
    fn test_render_empty_ranking_is_header_and_separator() {
        let table = render(&[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Changes | File/Folder"));
        assert_eq!(lines[1], "------- | -----------");
    }

    #[test]
    fn test_render_counts_left_justified() {
        let table = render(&[entry("file.rs", 123)]);
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("123     | file.rs"));
    }
}
