//! Runtime configuration for the SSR host, loaded from environment variables.
//!
//! Invalid or missing values fall back to defaults rather than failing
//! startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

use chat_ui::util::sweep::is_development_env;

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port bound on all interfaces.
    pub port: u16,
    /// Runtime `LEPTOS_ENV` names development mode.
    pub dev_mode: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: env_parse(lookup("PORT"), DEFAULT_PORT),
            dev_mode: is_development_env(lookup("LEPTOS_ENV").as_deref()),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

pub(crate) fn env_parse<T>(raw: Option<String>, default: T) -> T
where
    T: FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
