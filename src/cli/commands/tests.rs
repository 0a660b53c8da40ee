//! # Tests Command / tests 命令
//!
//! Orchestrates the test result printer: discover the eligible files,
//! parse each one, accumulate the global totals and render the output
//! for the selected display mode.
//!
//! 编排测试结果打印器：发现符合条件的文件、逐个解析、
//! 累计全局总数，并按所选显示模式渲染输出。

use anyhow::Result;
use std::path::Path;

use crate::core::junit;
use crate::core::models::TestTotals;
use crate::infra::fs::list_result_files;
use crate::reporting::console;

pub fn execute(dir: &Path, all: bool, all_failures: bool) -> Result<()> {
    let files = list_result_files(dir)?;

    // Files are parsed strictly sequentially, in sorted file name order.
    // One bad file does not abort the run.
    let mut suites = Vec::new();
    for path in &files {
        match junit::parse_suite(path) {
            Ok(suite) => suites.push(suite),
            Err(e) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                eprintln!("Can't display test information at file '{file_name}': {e:#}");
            }
        }
    }

    let mut totals = TestTotals::default();
    for suite in &suites {
        totals.add(suite);
    }

    // The global summary always comes before any per-suite detail.
    console::print_global_summary(&totals);

    for suite in &suites {
        if all {
            console::print_suite(suite, false);
        } else if all_failures {
            console::print_suite(suite, true);
        }
    }

    Ok(())
}
