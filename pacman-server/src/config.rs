use figment::{providers::Env, Figment};
use serde::{Deserialize, Deserializer};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Server host address
    #[serde(default = "default_host")]
    pub host: std::net::IpAddr,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u32,
    /// How many records `GET /leaderboard` returns
    #[serde(default = "default_leaderboard_limit", deserialize_with = "deserialize_limit")]
    pub leaderboard_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            shutdown_timeout_seconds: default_shutdown_timeout(),
            leaderboard_limit: default_leaderboard_limit(),
        }
    }
}

fn default_host() -> std::net::IpAddr {
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_shutdown_timeout() -> u32 {
    5
}

fn default_leaderboard_limit() -> usize {
    10
}

fn deserialize_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let limit = usize::deserialize(deserializer)?;
    if limit == 0 {
        return Err(serde::de::Error::custom("LEADERBOARD_LIMIT must be at least 1"));
    }
    Ok(limit)
}

/// Variables read from the environment. Anything else (e.g. a shell's `HOST`) is ignored.
const KEYS: [&str; 4] = ["host", "port", "shutdown_timeout_seconds", "leaderboard_limit"];

pub fn load_config() -> Result<Config, figment::Error> {
    Figment::new().merge(Env::raw().only(&KEYS)).extract()
}
