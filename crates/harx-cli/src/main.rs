use harx_core::logging;

mod cli;

fn main() {
    // Log to the state file if possible; stdout is reserved for the report.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args() {
        Ok(outcome) => std::process::exit(outcome.code()),
        Err(err) => {
            eprintln!("harx error: {:#}", err);
            std::process::exit(1);
        }
    }
}
