use serde::de::DeserializeOwned;
use std::io::{self, Read};
use tracing::debug;

/// True when stdin is an interactive terminal rather than a pipe or file.
pub fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Deserialise a piped JSON request from stdin.
///
/// Returns `None` when stdin is a terminal or carries only whitespace, so
/// callers can fall back to command-line flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    debug!(bytes = trimmed.len(), "reading JSON request from stdin");
    let request = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse JSON from stdin: {e}"))?;
    Ok(Some(request))
}
