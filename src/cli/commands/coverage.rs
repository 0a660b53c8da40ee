//! # Coverage Command / coverage 命令
//!
//! Orchestrates the Jacoco CSV report printer: read and filter the report,
//! then render the column-aligned table. An unreadable input file is fatal
//! and surfaces as a non-zero exit status.

use anyhow::Result;
use std::path::Path;

use crate::core::coverage;
use crate::reporting::table;

pub fn execute(input: &Path, lib: &str, package_print: bool) -> Result<()> {
    let report = coverage::read_report(input, lib)?;
    let columns = table::display_columns(package_print);
    table::print_report(&report, &columns, lib);
    Ok(())
}
