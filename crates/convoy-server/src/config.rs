//! Server configuration from environment.

use std::env;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Dashboard origins allowed to call the API
    pub cors_origins: Vec<String>,
    /// Buffered dashboard events per listener before it starts lagging
    pub event_channel_capacity: usize,
    /// Messages returned by the chat history endpoint
    pub message_history_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("CONVOY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            event_channel_capacity: env::var("EVENT_CHANNEL_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(256),
            message_history_limit: env::var("MESSAGE_HISTORY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            event_channel_capacity: 256,
            message_history_limit: 50,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
