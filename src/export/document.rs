//! Markdown document export.

use super::table::{ShortfallTable, TABLE_HEADERS};

/// Suggested download name for the document export.
pub const DOCUMENT_FILE_NAME: &str = "Kekurangan_Upah.md";

/// Heading placed above the table.
pub const DOCUMENT_TITLE: &str = "Lampiran Kekurangan Upah";

/// Renders the table as a Markdown document with the total row in bold.
pub fn to_markdown(table: &ShortfallTable) -> String {
    let mut out = format!("# {}\n\n", DOCUMENT_TITLE);

    push_line(&mut out, TABLE_HEADERS.iter().map(|h| format!("**{}**", h)));
    push_line(&mut out, TABLE_HEADERS.iter().map(|_| "---".to_string()));

    for row in table.record_rows() {
        push_line(&mut out, row.cells().iter().map(|cell| escape(cell)));
    }
    push_line(
        &mut out,
        table.total_row().cells().iter().map(|cell| match escape(cell) {
            cell if cell.is_empty() => cell,
            cell => format!("**{}**", cell),
        }),
    );
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell);
        out.push_str(" |");
    }
    out.push('\n');
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
