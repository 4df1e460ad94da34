//! Contact Assistant - Main entry point
//!
//! Restores the address book from its data file, then runs the
//! interactive command loop until an exit command or end of input.

use anyhow::Result;
use contact_assistant::{App, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, so the prompt stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        data_path = %config.data_path.display(),
        page_size = config.page_size,
        "starting contact assistant"
    );

    let mut app = App::from_config(&config);
    if let Err(e) = app.restore() {
        error!("Failed to restore address book: {}", e);
        println!("Can't read the data file! Something went wrong!\n");
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter command: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let response = app.handle_line(&line);
        println!("{}\n", response.text);
        if response.exit {
            break;
        }
    }

    info!("contact assistant shutdown complete");
    Ok(())
}
