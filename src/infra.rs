//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Report Printer,
//! currently the file system operations used to discover result files.
//!
//! 此模块为 Report Printer 提供基础设施服务，
//! 目前是用于发现结果文件的文件系统操作。

pub mod fs;

pub use fs::list_result_files;
