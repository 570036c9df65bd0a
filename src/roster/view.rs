//! Pure rendering from record sequences and notices to terminal markup.
//!
//! Nothing here reads or mutates state; callers hand in slices and print
//! the returned strings. Layout is unicode-width aware so wide characters
//! keep the columns aligned.

use crate::model::Student;
use crate::notify::{Notice, NoticeLevel};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a name cell may grow before truncation.
pub const NAME_WIDTH_MAX: usize = 40;

/// Placeholder for display fields the record does not carry.
pub const MISSING_FIELD: &str = "N/A";

const EMPTY_TABLE: &str = "No students found.\n";

/// Renders the visible records as an aligned table.
///
/// Zero rows renders an explicit placeholder instead of an empty table. A
/// record with no id yet shows `N/A` in the id column rather than a blank
/// cell.
pub fn render_table(students: &[Student]) -> String {
    if students.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let rows: Vec<(String, String, String)> = students
        .iter()
        .map(|s| {
            (
                s.id.clone().unwrap_or_else(|| MISSING_FIELD.to_string()),
                truncate_to_width(&s.name, NAME_WIDTH_MAX),
                s.age.to_string(),
            )
        })
        .collect();

    let id_width = column_width("ID", rows.iter().map(|r| r.0.as_str()));
    let name_width = column_width("NAME", rows.iter().map(|r| r.1.as_str()));
    let age_width = column_width("AGE", rows.iter().map(|r| r.2.as_str()));

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}\n",
        pad("ID", id_width),
        pad("NAME", name_width),
        pad("AGE", age_width)
    ));
    out.push_str(&format!(
        "{}  {}  {}\n",
        "-".repeat(id_width),
        "-".repeat(name_width),
        "-".repeat(age_width)
    ));
    for (id, name, age) in &rows {
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad(id, id_width),
            pad(name, name_width),
            pad(age, age_width)
        ));
    }
    out
}

/// Renders notices one per line, colored by level.
pub fn render_notices(notices: &[Notice]) -> String {
    let mut out = String::new();
    for notice in notices {
        let line = match notice.level {
            NoticeLevel::Info => notice.content.dimmed(),
            NoticeLevel::Success => notice.content.green(),
            NoticeLevel::Warning => notice.content.yellow(),
            NoticeLevel::Error => notice.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
