use std::backtrace::Backtrace;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Target of the per-request generation events (table, class, columns).
pub const GENERATOR_TARGET: &str = "cqrs_forge::generator";

/// `RUST_LOG` wins when set; otherwise the configured base filter plus the
/// generator target at `logging.generator_level`.
pub fn init_tracing(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(cfg)));
    fmt().with_env_filter(filter).with_target(false).init();
    set_panic_hook();
}

fn default_directives(cfg: &LoggingConfig) -> String {
    let base = cfg.rust_log.trim().trim_end_matches(',');
    let generator = format!("{GENERATOR_TARGET}={}", cfg.generator_level.trim());
    if base.is_empty() {
        generator
    } else {
        format!("{base},{generator}")
    }
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        if let Some(location) = info.location() {
            tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            );
        } else {
            tracing::error!(panic = %message, backtrace = %backtrace, "panic");
        }
    }));
}
