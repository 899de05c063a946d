use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where queries are sent and how long to wait for an answer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IP address or hostname of the DNS server
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds to wait for each send and receive
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_true")]
    pub recursion_desired: bool,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn server_label(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            recursion_desired: default_true(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    7
}

fn default_true() -> bool {
    true
}
