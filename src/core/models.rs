//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the report
//! printer. It includes models for single test outcomes, parametrized test
//! groups, parsed suites and the running aggregate totals.
//!
//! 此模块定义了整个报告打印器中使用的核心数据结构。
//! 它包括单个测试结果、参数化测试组、已解析的套件和运行聚合总数的模型。

use crate::reporting::style::{colorize, AnsiColor, TextStyle};
use std::collections::BTreeMap;

/// Default suite name used when the root element carries no `name` attribute.
pub const DEFAULT_SUITE_NAME: &str = "UncnownTestSuite";

/// Represents the outcome of one leaf test case.
/// Created once per `testcase` record when a suite file is parsed and
/// immutable afterwards, except via aggregation into a parent.
///
/// 表示单个叶子测试用例的结果。
/// 在解析套件文件时为每个 `testcase` 记录创建一次，此后不可变，
/// 除非聚合到父级中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The test name (or the bracketed argument label for a sub-case)
    /// 测试名称（对于子用例则是带括号的参数标签）
    pub name: String,
    /// Whether the test passed / 测试是否通过
    pub passed: bool,
}

impl TestCase {
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
        }
    }

    /// Renders the case as a single line, tab-indented `indent` levels:
    /// `"{name} -> PASSED"` (green italic) or `"{name} -> FAILURE"` (red italic).
    pub fn render(&self, indent: usize) -> String {
        format!(
            "{}{} -> {}",
            "\t".repeat(indent),
            self.name,
            result_label(self.passed)
        )
    }
}

fn result_label(passed: bool) -> String {
    colorize(
        if passed { "PASSED" } else { "FAILURE" },
        if passed {
            AnsiColor::Green
        } else {
            AnsiColor::Red
        },
        TextStyle::Italic,
    )
}

/// A test logically run multiple times with different arguments, modeled as
/// one parent outcome aggregating the per-parameter-set sub-results.
///
/// Invariant: `passed` is the strict conjunction of all children. Adding a
/// failing child flips an already-true `passed` to false, and the flag never
/// flips back to true once any child has failed.
///
/// 一个使用不同参数多次运行的测试，建模为聚合子结果的单个父结果。
/// 不变量：`passed` 是所有子用例的严格合取，一旦为假就永远为假。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametrizedCase {
    /// The primary name: the test name with its bracketed argument suffix removed
    /// 主名称：去掉带括号参数后缀的测试名称
    pub name: String,
    /// Conjunction of all children's outcomes / 所有子用例结果的合取
    pub passed: bool,
    /// Per-parameter-set sub-results, in insertion order / 按插入顺序的子结果
    pub cases: Vec<TestCase>,
}

impl ParametrizedCase {
    /// Creates a parametrized case from an initial (possibly empty) sequence
    /// of children. An empty sequence counts as passed.
    pub fn new(name: impl Into<String>, cases: Vec<TestCase>) -> Self {
        let passed = cases.iter().all(|case| case.passed);
        Self {
            name: name.into(),
            passed,
            cases,
        }
    }

    /// Appends a child and updates `passed` via AND-reduction.
    pub fn add_case(&mut self, case: TestCase) {
        self.passed = self.passed && case.passed;
        self.cases.push(case);
    }

    /// Renders the header line followed by each child at `indent + 1`, one per
    /// line. With `failed_only`, children that passed are omitted; when every
    /// child passed only the header line is produced.
    pub fn render(&self, indent: usize, failed_only: bool) -> String {
        let mut out = format!(
            "{}{} -> {}",
            "\t".repeat(indent),
            self.name,
            result_label(self.passed)
        );
        for case in &self.cases {
            if failed_only && case.passed {
                continue;
            }
            out.push('\n');
            out.push_str(&case.render(indent + 1));
        }
        out
    }
}

/// One entry of a suite's case mapping: either a plain case or a
/// parametrized group. Rendering logic switches over the variant
/// exhaustively instead of inspecting types at runtime.
///
/// 套件用例映射中的一个条目：普通用例或参数化组。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseResult {
    Plain(TestCase),
    Parametrized(ParametrizedCase),
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        match self {
            CaseResult::Plain(case) => case.passed,
            CaseResult::Parametrized(case) => case.passed,
        }
    }

    /// Renders the entry. `failed_only` only affects the parametrized
    /// variant, where it suppresses passing sub-cases.
    pub fn render(&self, indent: usize, failed_only: bool) -> String {
        match self {
            CaseResult::Plain(case) => case.render(indent),
            CaseResult::Parametrized(case) => case.render(indent, failed_only),
        }
    }
}

/// One parsed test-result file: the root-level metadata declared by the file
/// plus a mapping from test name (primary name for parametrized cases) to its
/// outcome. The mapping is kept in sorted key order for deterministic output.
///
/// 一个已解析的测试结果文件：文件声明的根级元数据，
/// 以及从测试名称到其结果的映射。映射按键排序以保证确定性输出。
#[derive(Debug, Clone, PartialEq)]
pub struct Suite {
    /// Declared suite name / 声明的套件名称
    pub name: String,
    /// Declared total test count / 声明的测试总数
    pub tests: u64,
    /// Declared failure count / 声明的失败数
    pub failures: u64,
    /// Declared elapsed time in seconds / 声明的耗时（秒）
    pub time: f64,
    /// Test name to outcome mapping / 测试名称到结果的映射
    pub cases: BTreeMap<String, CaseResult>,
}

impl Suite {
    pub fn new(name: impl Into<String>, tests: u64, failures: u64, time: f64) -> Self {
        Self {
            name: name.into(),
            tests,
            failures,
            time,
            cases: BTreeMap::new(),
        }
    }

    /// Upserts one test-case record into the mapping.
    ///
    /// A name containing `[` splits at the FIRST `[`: everything before it is
    /// the primary name, `[` plus the remainder is the argument label (later
    /// `[` characters are kept literally). Bracketed records accumulate as
    /// children of one parametrized entry keyed by the primary name; a plain
    /// name is stored directly, keyed by the full name, replacing any earlier
    /// entry for that key. A plain entry hit by a bracketed record is promoted
    /// to a parametrized one, keeping the old outcome as its first child.
    pub fn record_case(&mut self, name: &str, passed: bool) {
        let Some(split_at) = name.find('[') else {
            self.cases
                .insert(name.to_string(), CaseResult::Plain(TestCase::new(name, passed)));
            return;
        };

        let primary = &name[..split_at];
        let child = TestCase::new(&name[split_at..], passed);
        let mut case = match self.cases.remove(primary) {
            Some(CaseResult::Parametrized(case)) => case,
            Some(CaseResult::Plain(previous)) => ParametrizedCase::new(primary, vec![previous]),
            None => ParametrizedCase::new(primary, Vec::new()),
        };
        case.add_case(child);
        self.cases
            .insert(primary.to_string(), CaseResult::Parametrized(case));
    }

    /// Declared passed count: declared total minus declared failures.
    pub fn passed_count(&self) -> u64 {
        self.tests.saturating_sub(self.failures)
    }

    /// The header form of the suite name: the last `.`-separated component of
    /// the declared name, with every `"Test"` token replaced by `":"`.
    pub fn display_name(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or(&self.name)
            .replace("Test", ":")
    }

    /// Whether any parsed case (or parametrized sub-case) failed.
    pub fn has_failures(&self) -> bool {
        self.cases.values().any(|case| !case.passed())
    }
}

/// Running totals across all parsed suites, taken verbatim from each file's
/// declared root metadata rather than recomputed from individual records.
///
/// 所有已解析套件的运行总数，直接取自每个文件声明的根元数据。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestTotals {
    pub tests: u64,
    pub failures: u64,
    pub time: f64,
}

impl TestTotals {
    /// Accumulates one suite's declared counts.
    pub fn add(&mut self, suite: &Suite) {
        self.tests += suite.tests;
        self.failures += suite.failures;
        self.time += suite.time;
    }

    pub fn passed(&self) -> u64 {
        self.tests.saturating_sub(self.failures)
    }
}
