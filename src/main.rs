mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::warning::Warning;
use std::collections::VecDeque;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut warnings = VecDeque::new();
    let config = Config::load_default().unwrap_or_else(|e| {
        warnings.push_back(Warning::from(e));
        Config::default()
    });
    let app = App::new(&config, rand::rng(), warnings);
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
