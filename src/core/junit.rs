//! # Suite Parser Module / 套件解析模块
//!
//! Parses one JUnit-style XML result file into a [`Suite`]: the root
//! element's declared metadata plus a mapping from test name to outcome.
//!
//! 将一个 JUnit 风格的 XML 结果文件解析为 [`Suite`]：
//! 根元素声明的元数据加上从测试名称到结果的映射。

use anyhow::{anyhow, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

use crate::core::models::{Suite, DEFAULT_SUITE_NAME};

const TAG_TEST_CASE: &[u8] = b"testcase";
const TAG_FAILURE: &[u8] = b"failure";

/// Placeholder used when a `testcase` record carries no `name` attribute.
pub const DEFAULT_CASE_NAME: &str = "uncknown test cases";

/// Parses the result file at `path`.
///
/// Only `testcase` records that are immediate children of the root element
/// are considered; any other record is skipped. A case counts as passed when
/// it contains no nested `failure` marker. Root attributes `name`, `tests`,
/// `failures` and `time` default to `"UncnownTestSuite"`, 0, 0 and 0.0 when
/// absent or unreadable.
///
/// An unparseable file yields an error; the caller is expected to report it
/// per file and keep processing the remaining files.
pub fn parse_suite(path: &Path) -> Result<Suite> {
    let mut reader = Reader::from_file(path)?;
    reader.trim_text(true);

    let mut suite: Option<Suite> = None;
    // Name and pass flag of the test case record currently open.
    let mut current: Option<(String, bool)> = None;
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => {
                if depth == 0 {
                    suite = Some(suite_from_root(&e)?);
                } else if depth == 1 && e.name().as_ref() == TAG_TEST_CASE {
                    current = Some((case_name(&e)?, true));
                } else if e.name().as_ref() == TAG_FAILURE {
                    if let Some(case) = current.as_mut() {
                        case.1 = false;
                    }
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    // Self-closing root: metadata only, no cases.
                    suite = Some(suite_from_root(&e)?);
                } else if depth == 1 && e.name().as_ref() == TAG_TEST_CASE {
                    // A self-closing test case cannot hold a failure marker.
                    if let Some(suite) = suite.as_mut() {
                        suite.record_case(&case_name(&e)?, true);
                    }
                } else if e.name().as_ref() == TAG_FAILURE {
                    if let Some(case) = current.as_mut() {
                        case.1 = false;
                    }
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let (Some(suite), Some((name, passed))) = (suite.as_mut(), current.take()) {
                        suite.record_case(&name, passed);
                    }
                }
            }
            _ => (),
        }
        buf.clear();
    }

    suite.ok_or_else(|| anyhow!("no root element found in '{}'", path.display()))
}

fn suite_from_root(e: &BytesStart) -> Result<Suite> {
    let name = attr_value(e, b"name")?.unwrap_or_else(|| DEFAULT_SUITE_NAME.to_string());
    let tests = attr_value(e, b"tests")?
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let failures = attr_value(e, b"failures")?
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let time = attr_value(e, b"time")?
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0);
    Ok(Suite::new(name, tests, failures, time))
}

fn case_name(e: &BytesStart) -> Result<String> {
    Ok(attr_value(e, b"name")?.unwrap_or_else(|| DEFAULT_CASE_NAME.to_string()))
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
