//! # Console Reporting Module / 控制台报告模块
//!
//! This module renders parsed test results at the terminal: the aggregate
//! summary printed before any detail, and the per-suite sections with their
//! color-coded case lists and summary lines.
//!
//! 此模块在终端渲染已解析的测试结果：在任何详情之前打印的聚合摘要，
//! 以及带有彩色用例列表和摘要行的套件级部分。

use crate::core::models::{Suite, TestTotals};
use crate::reporting::style::{colorize, AnsiColor, TextStyle};

/// Renders the global summary: total, passed and failed counts plus the
/// accumulated time, one emphasized line each.
///
/// # Output Format / 输出格式
/// ```text
/// Count of tests: 12
/// Count of passed tests: 10
/// Count of failed tests: 2
/// Time: 1.25
/// ```
pub fn render_global_summary(totals: &TestTotals) -> String {
    [
        colorize(
            &format!("Count of tests: {}", totals.tests),
            AnsiColor::Yellow,
            TextStyle::Bold,
        ),
        colorize(
            &format!("Count of passed tests: {}", totals.passed()),
            AnsiColor::Green,
            TextStyle::Bold,
        ),
        colorize(
            &format!("Count of failed tests: {}", totals.failures),
            AnsiColor::Red,
            TextStyle::Bold,
        ),
        colorize(
            &format!("Time: {}", totals.time),
            AnsiColor::Blue,
            TextStyle::Bold,
        ),
    ]
    .join("\n")
}

/// Prints the global summary followed by a separator line.
pub fn print_global_summary(totals: &TestTotals) {
    println!("{}\n", render_global_summary(totals));
}

/// Renders one suite's detail section.
///
/// In all-detail mode every case is listed at indent 1 in name-sorted order.
/// With `failures_only`, only failing cases are listed (passing sub-cases
/// suppressed within failing parametrized cases) and suites without failures
/// produce no section at all.
pub fn render_suite(suite: &Suite, failures_only: bool) -> Option<String> {
    if failures_only && !suite.has_failures() {
        return None;
    }

    let header = if failures_only {
        format!("Failed tests of {}", suite.display_name())
    } else {
        format!("Tests of {}", suite.display_name())
    };

    let mut lines = vec![header];
    for case in suite.cases.values() {
        if failures_only && case.passed() {
            continue;
        }
        lines.push(case.render(1, failures_only));
    }
    lines.push(render_suite_summary(suite));

    Some(lines.join("\n"))
}

/// The per-suite summary line: passed count (declared total minus declared
/// failures), failure count and elapsed time.
pub fn render_suite_summary(suite: &Suite) -> String {
    format!(
        "{} {} {}",
        colorize(
            &format!("Passed: {}", suite.passed_count()),
            AnsiColor::Green,
            TextStyle::Bold,
        ),
        colorize(
            &format!("Failures: {}", suite.failures),
            AnsiColor::Red,
            TextStyle::Bold,
        ),
        colorize(
            &format!("Time: {}", suite.time),
            AnsiColor::Blue,
            TextStyle::Bold,
        )
    )
}

/// Prints one suite's detail section, followed by a separator line.
/// Suites without failures print nothing in failures-only mode.
pub fn print_suite(suite: &Suite, failures_only: bool) {
    if let Some(section) = render_suite(suite, failures_only) {
        println!("{section}\n");
    }
}
