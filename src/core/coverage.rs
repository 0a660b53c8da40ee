//! # Coverage Report Module / 覆盖率报告模块
//!
//! Parses a Jacoco-style CSV coverage report into a table of per-class rows
//! with missed/covered counters for branches, lines and methods.
//!
//! 将 Jacoco 风格的 CSV 覆盖率报告解析为按类划分的表格，
//! 包含分支、行和方法的未覆盖/已覆盖计数。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Minimum width reserved for the package and class name columns.
pub const MIN_NAME_COLUMN_WIDTH: usize = 20;

// Field positions after the leading GROUP column.
const FIELD_PACKAGE: usize = 1;
const FIELD_CLASS: usize = 2;
const FIELD_BRANCH_MISSED: usize = 3;
const FIELD_BRANCH_COVERED: usize = 4;
const FIELD_LINE_MISSED: usize = 5;
const FIELD_LINE_COVERED: usize = 6;
const FIELD_METHOD_MISSED: usize = 7;
const FIELD_METHOD_COVERED: usize = 8;

/// One accepted report row: a class with its coverage counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub package: String,
    pub class: String,
    pub branch_missed: u64,
    pub branch_covered: u64,
    pub line_missed: u64,
    pub line_covered: u64,
    pub method_missed: u64,
    pub method_covered: u64,
}

impl CoverageRow {
    pub fn branch_percent(&self) -> i64 {
        percent(self.branch_missed, self.branch_covered)
    }

    pub fn line_percent(&self) -> i64 {
        percent(self.line_missed, self.line_covered)
    }

    pub fn method_percent(&self) -> i64 {
        percent(self.method_missed, self.method_covered)
    }
}

/// Coverage percentage: `covered / (covered + missed)`, rounded to a whole
/// percent. A counter pair with no entries at all counts as fully covered.
pub fn percent(missed: u64, covered: u64) -> i64 {
    let total = covered + missed;
    if total == 0 {
        return 100;
    }
    (covered as f64 / total as f64 * 100.0).round() as i64
}

/// The parsed report: accepted rows in file order, plus the widest package
/// and class names seen (used for column sizing, floored at
/// [`MIN_NAME_COLUMN_WIDTH`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub rows: Vec<CoverageRow>,
    pub max_package_len: usize,
    pub max_class_len: usize,
}

/// Reads and parses the CSV report at `path`. When `lib` is non-empty, only
/// rows whose group column equals it are kept.
pub fn read_report(path: &Path, lib: &str) -> Result<CoverageReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Can't read csv file '{}'", path.display()))?;
    Ok(parse_report(&content, lib))
}

/// Parses the CSV content.
///
/// The header row (first field `GROUP`) is skipped, an empty line ends the
/// table, and rows whose class name contains parentheses or spaces are
/// dropped entirely. A dotted class name keeps only its last segment.
pub fn parse_report(content: &str, lib: &str) -> CoverageReport {
    let mut rows = Vec::new();
    let mut max_package_len = MIN_NAME_COLUMN_WIDTH;
    let mut max_class_len = MIN_NAME_COLUMN_WIDTH;

    for line in content.lines() {
        if line.is_empty() {
            break;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields[0] == "GROUP" || !is_valid_lib(fields[0], lib) {
            continue;
        }

        let Some(row) = row_from_fields(&fields) else {
            continue;
        };
        max_package_len = max_package_len.max(row.package.len());
        max_class_len = max_class_len.max(row.class.len());
        rows.push(row);
    }

    CoverageReport {
        rows,
        max_package_len,
        max_class_len,
    }
}

fn is_valid_lib(group: &str, lib: &str) -> bool {
    lib.is_empty() || group == lib
}

fn row_from_fields(fields: &[&str]) -> Option<CoverageRow> {
    let class = *fields.get(FIELD_CLASS)?;
    if class.contains('(') || class.contains(')') || class.contains(' ') {
        return None;
    }
    let class = class.rsplit('.').next().unwrap_or(class);

    Some(CoverageRow {
        package: fields.get(FIELD_PACKAGE).copied().unwrap_or("").to_string(),
        class: class.to_string(),
        branch_missed: counter(fields, FIELD_BRANCH_MISSED),
        branch_covered: counter(fields, FIELD_BRANCH_COVERED),
        line_missed: counter(fields, FIELD_LINE_MISSED),
        line_covered: counter(fields, FIELD_LINE_COVERED),
        method_missed: counter(fields, FIELD_METHOD_MISSED),
        method_covered: counter(fields, FIELD_METHOD_COVERED),
    })
}

fn counter(fields: &[&str], index: usize) -> u64 {
    fields
        .get(index)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}
