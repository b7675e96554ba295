use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub struct LoggingConfig;

impl LoggingConfig {
    /// Initializes the tracing subscriber.
    ///
    /// `RUST_LOG` sets the filter when present; otherwise the default level
    /// depends on whether `BOTORNOT_DEBUG` is set. Debug mode also switches
    /// the format layer to include targets and source locations.
    pub fn init() {
        let is_debug = env::var("BOTORNOT_DEBUG").is_ok();

        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => {
                if is_debug {
                    EnvFilter::new("botornot=debug,info")
                } else {
                    EnvFilter::new("botornot=info,warn")
                }
            }
        };

        let fmt_layer = if is_debug {
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
        } else {
            fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_thread_ids(false)
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();

        if is_debug {
            tracing::debug!("debug mode enabled");
        }
    }

    pub fn init_with_filter(filter: &str) {
        let env_filter = EnvFilter::new(filter);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer())
            .init();
    }

    pub fn is_debug() -> bool {
        env::var("BOTORNOT_DEBUG").is_ok()
    }
}
