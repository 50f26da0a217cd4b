use log::LevelFilter;
use std::process;
use subnet_analyzer::cli::{run, CommandLine};
use subnet_analyzer::logging::init_logging;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();

    let level = if commands.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    log::debug!("#Start main()");

    if let Err(e) = run(commands.command) {
        log::error!("Error: {e}");
        process::exit(1);
    }
}
