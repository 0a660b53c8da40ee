// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

pub mod commands;

fn build_cli() -> Command {
    Command::new("report-printer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints JUnit-style XML test results and Jacoco CSV coverage reports at the terminal")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tests")
                .about("Read a directory of XML files with test results and print them")
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .help("Path to the directory with XML test result files")
                        .value_name("DIR")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("all")
                        .short('a')
                        .long("all")
                        .help("Print the detail section for every test suite (default off)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("all-failures")
                        .short('f')
                        .long("all-failures")
                        .help("Print the detail section only for failed tests (default off)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("all"),
                ),
        )
        .subcommand(
            Command::new("coverage")
                .about("Read a CSV file with a Jacoco report and print it")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to the CSV file with the Jacoco report")
                        .value_name("FILE")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("lib")
                        .short('l')
                        .long("lib")
                        .help("Module name to keep in the report; other groups are filtered out")
                        .value_name("NAME")
                        .default_value("")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("package-print")
                        .short('p')
                        .long("package-print")
                        .help("Include the packages column in the report (default off)")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tests", tests_matches)) => {
            let dir = tests_matches
                .get_one::<PathBuf>("dir")
                .unwrap() // Required
                .clone();
            let all = tests_matches.get_flag("all");
            let all_failures = tests_matches.get_flag("all-failures");

            commands::tests::execute(&dir, all, all_failures)
        }
        Some(("coverage", coverage_matches)) => {
            let input = coverage_matches
                .get_one::<PathBuf>("input")
                .unwrap() // Required
                .clone();
            let lib = coverage_matches
                .get_one::<String>("lib")
                .unwrap() // Has default
                .clone();
            let package_print = coverage_matches.get_flag("package-print");

            commands::coverage::execute(&input, &lib, package_print)
        }
        _ => {
            // Unreachable: a subcommand is required, clap has already
            // printed the help text otherwise.
            Ok(())
        }
    }
}
