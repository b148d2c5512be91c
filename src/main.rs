//=========================================================================
// Pong Binary Entry Point
//=========================================================================

use std::process::ExitCode;

use log::error;
use pong::EngineBuilder;

fn main() -> ExitCode {
    match EngineBuilder::new().build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "engine", "Fatal: {}", e);
            eprintln!("pong: {}", e);
            ExitCode::FAILURE
        }
    }
}
