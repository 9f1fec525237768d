//! Process entry point (§4.L): installs the logger, builds one
//! `EngineSession`, and hands stdin to whichever protocol shell the first
//! input line asks for. XBoard-speaking GUIs identify themselves by
//! sending `xboard` as their very first line rather than via an argument,
//! so the dispatch sniffs that line instead of parsing `argv`.

use std::io::{self, BufRead, Read};

use corvus_engine::engine::EngineSession;
use corvus_engine::{uci, xboard};

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    std::process::exit(run());
}

fn run() -> i32 {
    let mut reader = io::stdin().lock();
    let mut first_line = String::new();

    match reader.read_line(&mut first_line) {
        Ok(0) => return 0,
        Ok(_) => {}
        Err(e) => {
            log_error(&format!("failed to read from stdin: {e}"));
            return 1;
        }
    }

    let chained = io::BufReader::new(io::Cursor::new(first_line.clone()).chain(reader));

    if first_line.trim() == "xboard" {
        xboard::XBoardHandler::new().run_over(chained);
        0
    } else {
        uci::run_over(&mut EngineSession::new(), chained)
    }
}

fn log_error(msg: &str) {
    #[cfg(feature = "logging")]
    log::error!("{msg}");
    #[cfg(not(feature = "logging"))]
    let _ = msg;
}
