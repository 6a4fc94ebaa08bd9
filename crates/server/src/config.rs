//! Listener configuration.

pub const DEFAULT_PORT: u16 = 8000;

/// Resolve the listen port: CLI flag first, then the `PORT` environment
/// variable. A non-numeric or empty `PORT` logs a warning and falls back to
/// the default; it is never a startup failure.
#[must_use]
pub fn resolve_port(cli_port: Option<u16>) -> u16 {
    if let Some(port) = cli_port {
        return port;
    }
    parse_port(std::env::var("PORT").ok())
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(s) if s.trim().is_empty() => DEFAULT_PORT,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %s, default = DEFAULT_PORT, "invalid PORT value, using default");
            DEFAULT_PORT
        }),
    }
}
