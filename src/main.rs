mod config;

use tb::{session, Settings};

use std::io;

fn main() {
    if let Err(e) = config::configure_app() {
        eprintln!("Failed to configure logging: {e}");
    }

    log::debug!("Application configured. Starting session...");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match session::start(stdin.lock(), stdout.lock(), Settings::default()) {
        Ok(Some(account)) => {
            log::debug!("Session finished successfully with account: {account:?}")
        }
        Ok(None) => log::debug!("Input closed before an account was opened"),
        Err(e) => log::error!("Session ended unexpectedly: {e:#}"),
    }
}
