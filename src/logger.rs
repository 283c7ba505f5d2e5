use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use crate::cli::{self, Opts};

pub fn init_logger(opts: &Opts) {
    // Derive log level from CLI options and construct logger.
    let log_level = cli::calc_log_level(opts.verbosity, opts.quiet);

    CombinedLogger::init(vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    log::info!("Initialized logger from options.");
}
