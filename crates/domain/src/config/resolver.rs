use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits and wire options for one iterative resolution.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Destination port for every query.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Attempts shared by every query of a resolution; reaching it is fatal.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Timeouts shared by every query of a resolution; reaching it is fatal.
    #[serde(default = "default_max_timeouts")]
    pub max_timeouts: u32,

    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: usize,

    /// Reject responses whose ID differs from the query's.
    #[serde(default)]
    pub strict_transaction_id: bool,

    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            query_timeout_secs: default_query_timeout_secs(),
            max_attempts: default_max_attempts(),
            max_timeouts: default_max_timeouts(),
            max_pointer_hops: default_max_pointer_hops(),
            strict_transaction_id: false,
            max_response_size: default_max_response_size(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_secs() -> u64 {
    5
}

fn default_max_attempts() -> u32 {
    30
}

fn default_max_timeouts() -> u32 {
    2
}

fn default_max_pointer_hops() -> usize {
    128
}

fn default_max_response_size() -> usize {
    1024
}
