pub mod catalog;
pub mod config;
pub mod score;

use serde::Serialize;

/// Print one JSON document to stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
