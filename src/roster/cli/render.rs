//! Terminal rendering.
//!
//! Layout (column widths, truncation) is computed on plain text with
//! `unicode-width`; color is applied afterwards so escape codes never skew
//! alignment.

use colored::*;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::StudentRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const EMPTY_MESSAGE: &str = "No students found.";
const COLUMN_GAP: &str = "  ";

struct Column {
    header: &'static str,
    max_width: usize,
    cell: fn(&StudentRecord) -> String,
}

const COLUMNS: &[Column] = &[
    Column {
        header: "Roll No.",
        max_width: 12,
        cell: |s| s.roll_number.clone(),
    },
    Column {
        header: "Name",
        max_width: 24,
        cell: |s| s.name.clone(),
    },
    Column {
        header: "Age",
        max_width: 5,
        cell: |s| s.age.to_string(),
    },
    Column {
        header: "Class",
        max_width: 8,
        cell: |s| s.class_name.clone(),
    },
    Column {
        header: "Section",
        max_width: 8,
        cell: |s| s.section.clone(),
    },
    Column {
        header: "Address",
        max_width: 32,
        cell: |s| s.address.clone(),
    },
];

/// Renders students as an aligned table, one row per student.
pub fn render_student_table(students: &[StudentRecord]) -> String {
    if students.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE.dimmed());
    }

    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|s| {
            COLUMNS
                .iter()
                .map(|c| truncate_to_width(&(c.cell)(s), c.max_width))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(c.header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad_to_width(c.header, *w))
        .collect();
    output.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    output.push_str(&format!("{}\n", "─".repeat(rule_width).dimmed()));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad_to_width(cell, *w))
            .collect();
        output.push_str(cells.join(COLUMN_GAP).trim_end());
        output.push('\n');
    }

    output
}

/// Renders every field of each student, separated by blank lines.
pub fn render_student_details(students: &[StudentRecord]) -> String {
    if students.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE.dimmed());
    }

    let label_width = COLUMNS.iter().map(|c| c.header.width()).max().unwrap_or(0);
    let mut output = String::new();

    for (i, student) in students.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        for column in COLUMNS {
            let label = pad_to_width(&format!("{}:", column.header), label_width + 1);
            output.push_str(&format!("{} {}\n", label.dimmed(), (column.cell)(student)));
        }
    }

    output
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let styled = match m.level {
                MessageLevel::Info => m.content.dimmed(),
                MessageLevel::Success => m.content.green(),
                MessageLevel::Warning => m.content.yellow(),
                MessageLevel::Error => m.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn empty_list_says_so() {
        plain();
        assert_eq!(render_student_table(&[]), "No students found.\n");
    }

    #[test]
    fn table_has_headers_and_one_row_per_student() {
        plain();
        let students = vec![
            StudentRecord::new("101", "Ana", 20).with_class("10"),
            StudentRecord::new("102", "Bob", 21).with_address("Elm St"),
        ];
        let output = render_student_table(&students);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Roll No."));
        assert!(lines[0].contains("Address"));
        assert!(lines[2].starts_with("101"));
        assert!(lines[3].contains("Elm St"));
    }

    #[test]
    fn columns_line_up() {
        plain();
        let students = vec![
            StudentRecord::new("1", "Ana", 20),
            StudentRecord::new("123456", "Bob", 21),
        ];
        let output = render_student_table(&students);
        let lines: Vec<_> = output.lines().collect();
        let name_col = lines[0].find("Name").unwrap();
        assert_eq!(lines[2].find("Ana").unwrap(), name_col);
        assert_eq!(lines[3].find("Bob").unwrap(), name_col);
    }

    #[test]
    fn long_cells_are_truncated() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn details_show_every_field() {
        plain();
        let student = StudentRecord::new("7", "Cy", 3).with_section("C");
        let output = render_student_details(&[student]);
        assert!(output.contains("Roll No.: 7"));
        assert!(output.contains("Section:  C"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn messages_render_one_per_line() {
        plain();
        let output = render_messages(&[CmdMessage::success("done"), CmdMessage::info("note")]);
        assert_eq!(output, "done\nnote\n");
    }
}
