//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Map a `--log-format` value onto a profile. Unknown values fall back to
    /// human-readable output.
    pub fn from_format(format: &str) -> Self {
        match format.to_ascii_lowercase().as_str() {
            "json" => Profile::Production,
            _ => Profile::Development,
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at process startup. Logs go to stderr so that the run report
/// on stdout stays machine-readable.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `questgen=debug` unless `RUST_LOG` is set
/// - **Production**: JSON structured logs, `questgen=info` unless `RUST_LOG` is set
/// - **Test**: Bare registry; test capture is installed via `init_test_capture()`
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("questgen=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("questgen=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_format() {
        assert_eq!(Profile::from_format("json"), Profile::Production);
        assert_eq!(Profile::from_format("JSON"), Profile::Production);
        assert_eq!(Profile::from_format("human"), Profile::Development);
        assert_eq!(Profile::from_format("anything"), Profile::Development);
    }
}
