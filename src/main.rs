use clap::Parser;

use cli::*;

mod api;
mod cli;
mod controller;
mod filter;
mod logger;
mod page;
mod render;
mod session;

#[tokio::main]
async fn main() {
    let opts: Opts = Opts::parse();

    logger::init_logger(&opts);
    debug_opts(&opts);

    log::debug!("Starting console...");
    if let Err(err) = controller::run(&opts).await {
        log::error!("Console stopped: {}", err);
        std::process::exit(1);
    }
}
