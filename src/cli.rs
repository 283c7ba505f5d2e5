use clap::Parser;
use simplelog::LevelFilter;

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

/// Brigade-Console
/// The operator console for the brigade and lab submission tracker.
#[derive(Parser, Clone)]
#[command(version = "0.1.0")]
pub struct Opts {
    /// The URL to the tracking server.
    #[arg(long = "server", default_value = "http://127.0.0.1:8000")]
    pub server: String,

    /// The file the rendered board page is written to.
    #[arg(long = "page", default_value = "board.html")]
    pub page: String,

    /// The level of verbosity.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Whether the log should be suppressed. This option overrides the verbose option.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

pub fn debug_opts(opts: &Opts) {
    log::debug!("Server: {}", &opts.server);
    log::debug!("Page: {}", &opts.page);
}

pub fn calc_log_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
