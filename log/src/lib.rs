use std::fmt::Display;

use backtrace::Backtrace;
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level_filter` accepts anything `EnvFilter` understands (`info`,
/// `pm_api_graphql=debug,info`, ...). A non-empty `RUST_LOG` takes precedence
/// over the configured filter.
pub fn init(display_level: &bool, level_filter: &str) {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) if !env.is_empty() => EnvFilter::new(env),
        _ => match EnvFilter::try_new(level_filter) {
            Ok(filter) => filter,
            Err(err) => panic!("Invalid log level filter '{level_filter}': {err}"),
        },
    };

    // A second call (tests, embedded use) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_env_filter(filter)
        .try_init();
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => trace!("{prefix} {msg}"),
        None => trace!("🐾 {msg}"),
    }
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => debug!("{prefix} {msg}"),
        None => debug!("🐞 {msg}"),
    };
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => info!("{prefix} {msg}"),
        None => info!("📢 {msg}"),
    };
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => warn!("{prefix} {msg}"),
        None => warn!("⚠️ {msg}"),
    };
}

pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let prefix = prefix.unwrap_or("🚨");
    if backtrace_enabled() {
        error!("{prefix} {msg}\n{:?}", Backtrace::new());
    } else {
        error!("{prefix} {msg}");
    }
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    let prefix = prefix.unwrap_or("☠️");
    error!("{prefix} {msg}");
    panic!("{prefix} {msg}");
}

fn backtrace_enabled() -> bool {
    std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1")
}
