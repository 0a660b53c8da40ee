use report_printer::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments and run the selected printer
    match cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
