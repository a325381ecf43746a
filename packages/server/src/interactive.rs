//! Interactive mode for the server.
//!
//! Prompts the user for bind address and port before starting the server.

use dialoguer::{Confirm, Input};
use waste_dashboard_dataset::Snapshot;

use crate::ServerConfig;

/// Prompts for a bind address and port, then serves `snapshot`.
///
/// The prompts default to the values from [`ServerConfig::from_env`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run(snapshot: Snapshot) -> std::io::Result<()> {
    println!("Waste Dashboard Server");
    println!();

    let defaults = ServerConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or(defaults.bind_addr);

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::serve(snapshot, ServerConfig { bind_addr, port }).await
}
