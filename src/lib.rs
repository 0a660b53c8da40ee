//! # Report Printer Library / 报告打印库
//!
//! This library provides the core functionality for the Report Printer tool,
//! a terminal printer for JUnit-style XML test results and Jacoco CSV
//! coverage reports.
//!
//! 此库为 Report Printer 工具提供核心功能，
//! 这是一个用于 JUnit 风格 XML 测试结果和 Jacoco CSV 覆盖率报告的终端打印器。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models and report parsers
//! - `infra` - Infrastructure services like file system operations
//! - `reporting` - Terminal rendering of test results and coverage tables
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型和报告解析器
//! - `infra` - 基础设施服务，如文件系统操作
//! - `reporting` - 测试结果和覆盖率表格的终端渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::coverage;
pub use crate::core::junit;
pub use crate::core::models;
