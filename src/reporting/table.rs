//! # Coverage Table Module / 覆盖率表格模块
//!
//! Renders a parsed coverage report as a column-aligned table: purple header
//! labels, yellow name cells and percent cells colored by coverage band.
//!
//! 将已解析的覆盖率报告渲染为列对齐的表格：紫色表头标签、
//! 黄色名称单元格，以及按覆盖率区间着色的百分比单元格。

use crate::core::coverage::{CoverageReport, CoverageRow};
use crate::reporting::style::{colorize, AnsiColor, TextStyle};

/// Width of the fixed-size percent columns.
pub const DEFAULT_LABEL_SIZE: usize = 8;

/// A renderable report column. The set of columns to render is an explicit
/// per-call value, so repeated invocations in one process cannot contaminate
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Packages,
    Class,
    Branch,
    Line,
    Method,
}

impl Column {
    pub fn title(&self) -> &'static str {
        match self {
            Column::Packages => "PACKAGES",
            Column::Class => "CLASS",
            Column::Branch => "BRANCH",
            Column::Line => "LINE",
            Column::Method => "METHOD",
        }
    }

    fn width(&self, report: &CoverageReport) -> usize {
        match self {
            Column::Packages => report.max_package_len,
            Column::Class => report.max_class_len,
            _ => DEFAULT_LABEL_SIZE,
        }
    }
}

/// The columns to render; the packages column appears only on request.
pub fn display_columns(package_print: bool) -> Vec<Column> {
    if package_print {
        vec![
            Column::Packages,
            Column::Class,
            Column::Branch,
            Column::Line,
            Column::Method,
        ]
    } else {
        vec![Column::Class, Column::Branch, Column::Line, Column::Method]
    }
}

/// One cell: the text centered in `width` (truncated when over-wide),
/// emphasized bold in the given color, between `| ... |` separators.
pub fn create_label(text: &str, width: usize, color: AnsiColor) -> String {
    let text: String = text.chars().take(width).collect();
    format!(
        "| {} |",
        colorize(&format!("{text:^width$}"), color, TextStyle::Bold)
    )
}

/// The coverage band color: below 50 red, 50 to 74 yellow, 75 to 100 green.
pub fn percent_color(percent: i64) -> AnsiColor {
    if (75..=100).contains(&percent) {
        AnsiColor::Green
    } else if (50..75).contains(&percent) {
        AnsiColor::Yellow
    } else {
        AnsiColor::Red
    }
}

/// A percent cell colored by its coverage band.
pub fn percent_label(percent: i64) -> String {
    create_label(
        &format!("{percent}%"),
        DEFAULT_LABEL_SIZE,
        percent_color(percent),
    )
}

/// The header row of the table.
pub fn render_header(report: &CoverageReport, columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| create_label(column.title(), column.width(report), AnsiColor::Purple))
        .collect()
}

/// One data row of the table.
pub fn render_row(row: &CoverageRow, report: &CoverageReport, columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| match column {
            Column::Packages => {
                create_label(&row.package, report.max_package_len, AnsiColor::Yellow)
            }
            Column::Class => create_label(&row.class, report.max_class_len, AnsiColor::Yellow),
            Column::Branch => percent_label(row.branch_percent()),
            Column::Line => percent_label(row.line_percent()),
            Column::Method => percent_label(row.method_percent()),
        })
        .collect()
}

/// Prints the full table. With a non-empty `lib` filter a title line naming
/// the module comes first.
pub fn print_report(report: &CoverageReport, columns: &[Column], lib: &str) {
    if !lib.is_empty() {
        println!("Jacoco Covered Report Info for module named '{lib}':");
    }
    println!("{}", render_header(report, columns));
    for row in &report.rows {
        println!("{}", render_row(row, report, columns));
    }
}
