//! # CLI Commands Module / 命令行命令模块
//!
//! One submodule per subcommand: `tests` for the test result printer and
//! `coverage` for the Jacoco CSV report printer.

pub mod coverage;
pub mod tests;
