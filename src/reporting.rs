//! # Reporting Module / 报告模块
//!
//! This module handles the rendering of parsed reports at the terminal.
//! It provides colorful per-suite and aggregate test summaries and the
//! column-aligned coverage table.
//!
//! 此模块处理已解析报告在终端的渲染。
//! 它提供彩色的套件级和聚合测试摘要，以及列对齐的覆盖率表格。

pub mod console;
pub mod style;
pub mod table;

// Re-export common reporting functions
pub use console::{print_global_summary, print_suite};
pub use style::colorize;
pub use table::print_report;
