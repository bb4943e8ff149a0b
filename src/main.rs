extern crate balanced_set;
#[macro_use]
extern crate log;
extern crate simplelog;

use balanced_set::driver::Program;
use simplelog::{ColorChoice, Config, LevelFilter, TerminalMode, TermLogger};
use std::env;
use std::io::{self, Read};
use std::process;

const LOG_LEVEL_VAR: &str = "BALANCED_SET_LOG";

fn log_level() -> LevelFilter {
    env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn main() {
    let logger = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if logger.is_err() {
        eprintln!("failed to initialize logging");
    }

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        error!("failed to read input: {}", err);
        process::exit(1);
    }

    match Program::parse(&input) {
        Ok(program) => print!("{}", program.run()),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        },
    }
}
