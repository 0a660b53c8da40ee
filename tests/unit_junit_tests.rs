//! # Suite Parser Unit Tests / 套件解析器单元测试
//!
//! Tests for `core::junit`: parsing one XML result file into a suite,
//! attribute defaulting and the per-file failure mode.
//!
//! 针对 `core::junit` 的测试：将单个 XML 结果文件解析为套件、
//! 属性默认值以及按文件的失败模式。

use anyhow::Result;
use report_printer::core::junit::parse_suite;
use report_printer::core::models::CaseResult;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` as a result file inside a fresh temporary directory.
fn write_result_file(content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("TESTSample.xml");
    fs::write(&path, content)?;
    Ok((dir, path))
}

#[test]
fn test_parse_suite_with_parametrized_cases() -> Result<()> {
    let (_dir, path) = write_result_file(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="com.example.SampleTest" tests="3" failures="1" time="0.5">
  <testcase name="a" time="0.1"/>
  <testcase name="b[x]" time="0.2"/>
  <testcase name="b[y]" time="0.2">
    <failure message="assertion failed">expected 1 but was 2</failure>
  </testcase>
</testsuite>
"#,
    )?;

    let suite = parse_suite(&path)?;
    assert_eq!(suite.name, "com.example.SampleTest");
    assert_eq!(suite.tests, 3);
    assert_eq!(suite.failures, 1);
    assert!((suite.time - 0.5).abs() < f64::EPSILON);

    let keys: Vec<&str> = suite.cases.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);

    assert!(suite.cases.get("a").unwrap().passed());
    match suite.cases.get("b") {
        Some(CaseResult::Parametrized(case)) => {
            assert!(!case.passed);
            assert_eq!(case.cases.len(), 2);
            assert_eq!(case.cases[0].name, "[x]");
            assert!(case.cases[0].passed);
            assert_eq!(case.cases[1].name, "[y]");
            assert!(!case.cases[1].passed);
        }
        other => panic!("Expected Parametrized variant, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_attributes_fall_back_to_defaults() -> Result<()> {
    let (_dir, path) = write_result_file(
        r#"<testsuite>
  <testcase/>
</testsuite>
"#,
    )?;

    let suite = parse_suite(&path)?;
    assert_eq!(suite.name, "UncnownTestSuite");
    assert_eq!(suite.tests, 0);
    assert_eq!(suite.failures, 0);
    assert_eq!(suite.time, 0.0);
    assert!(suite.cases.contains_key("uncknown test cases"));
    Ok(())
}

#[test]
fn test_non_testcase_records_are_skipped() -> Result<()> {
    let (_dir, path) = write_result_file(
        r#"<testsuite name="s" tests="1" failures="0" time="0.1">
  <properties>
    <property name="java.version" value="17"/>
  </properties>
  <testcase name="kept"/>
  <system-out>noise</system-out>
</testsuite>
"#,
    )?;

    let suite = parse_suite(&path)?;
    let keys: Vec<&str> = suite.cases.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["kept"]);
    Ok(())
}

#[test]
fn test_self_closing_failure_marker_counts_as_failed() -> Result<()> {
    let (_dir, path) = write_result_file(
        r#"<testsuite name="s" tests="1" failures="1" time="0.1">
  <testcase name="broken">
    <failure/>
  </testcase>
</testsuite>
"#,
    )?;

    let suite = parse_suite(&path)?;
    assert!(!suite.cases.get("broken").unwrap().passed());
    Ok(())
}

#[test]
fn test_self_closing_root_yields_metadata_only() -> Result<()> {
    let (_dir, path) = write_result_file(r#"<testsuite name="s" tests="2" failures="1" time="0.3"/>"#)?;

    let suite = parse_suite(&path)?;
    assert_eq!(suite.tests, 2);
    assert!(suite.cases.is_empty());
    Ok(())
}

#[test]
fn test_unparseable_file_is_an_error() -> Result<()> {
    let (_dir, path) = write_result_file(r#"<testsuite name="s"><testcase name="#)?;
    assert!(parse_suite(&path).is_err());
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(parse_suite(&PathBuf::from("/nonexistent/TESTNothing.xml")).is_err());
}

#[test]
fn test_unreadable_numeric_attributes_default_to_zero() -> Result<()> {
    let (_dir, path) = write_result_file(
        r#"<testsuite name="s" tests="many" failures="-" time="fast">
  <testcase name="a"/>
</testsuite>
"#,
    )?;

    let suite = parse_suite(&path)?;
    assert_eq!(suite.tests, 0);
    assert_eq!(suite.failures, 0);
    assert_eq!(suite.time, 0.0);
    Ok(())
}
