//! Runtime settings for [`AppSystem`](crate::lifecycle::AppSystem).

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

const DEFAULT_CHANNEL_BUFFER: usize = 32;
const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;
const DEFAULT_CHECKOUT_LATENCY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Request queue depth of each service.
    pub channel_buffer: usize,
    /// Simulated delay of login and registration.
    pub auth_latency: Duration,
    /// Simulated delay of order submission.
    pub checkout_latency: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            checkout_latency: Duration::from_millis(DEFAULT_CHECKOUT_LATENCY_MS),
        }
    }
}

impl AppConfig {
    /// Reads `PEDEAI_CHANNEL_BUFFER`, `PEDEAI_AUTH_LATENCY_MS` and
    /// `PEDEAI_CHECKOUT_LATENCY_MS`. Missing or unparsable values keep their
    /// default.
    pub fn from_env() -> Self {
        Self {
            channel_buffer: try_load("PEDEAI_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER).max(1),
            auth_latency: Duration::from_millis(try_load(
                "PEDEAI_AUTH_LATENCY_MS",
                DEFAULT_AUTH_LATENCY_MS,
            )),
            checkout_latency: Duration::from_millis(try_load(
                "PEDEAI_CHECKOUT_LATENCY_MS",
                DEFAULT_CHECKOUT_LATENCY_MS,
            )),
        }
    }

    /// No simulated latency. Meant for tests.
    pub fn instant() -> Self {
        Self {
            auth_latency: Duration::ZERO,
            checkout_latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
