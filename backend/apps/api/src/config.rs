//! Server Configuration
//!
//! Loaded from the process environment (after `.env`).

use anyhow::Context;
use std::net::SocketAddr;
use users::UsersConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `API_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<String>,
    /// `USERS_MAX_NAME_LENGTH`
    pub users: UsersConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("API_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("API_BIND_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let users = match lookup("USERS_MAX_NAME_LENGTH") {
            Some(raw) => UsersConfig::with_max_name_length(
                raw.parse()
                    .context("USERS_MAX_NAME_LENGTH must be a non-negative integer")?,
            ),
            None => UsersConfig::default(),
        };

        Ok(Self {
            bind_addr,
            frontend_origins,
            users,
        })
    }
}
