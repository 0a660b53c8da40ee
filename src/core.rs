//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Report Printer,
//! including data models and the JUnit XML / Jacoco CSV parsers.
//!
//! 此模块包含 Report Printer 的核心功能，
//! 包括数据模型以及 JUnit XML / Jacoco CSV 解析器。

pub mod coverage;
pub mod junit;
pub mod models;

// Re-exports
pub use coverage::CoverageReport;
pub use junit::parse_suite;
pub use models::{CaseResult, Suite, TestTotals};
