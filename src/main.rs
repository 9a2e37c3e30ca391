//! Paddle Ball entry point
//!
//! Parses the command line, sets up logging and runs the windowed game loop.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "paddle-ball")]
#[command(about = "Keep the ball off the floor with the paddle", version)]
struct Args {
    /// Print window and game status messages to stdout
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    // RUST_LOG is not consulted; --debug is the only switch
    let mut builder = env_logger::Builder::new();
    if debug {
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("paddle_ball", LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Off);
    }
    builder.target(env_logger::Target::Stdout).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let seed: u64 = rand::random();
    log::debug!("Round seed: {}", seed);

    match paddle_ball::platform::run(seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Startup failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
