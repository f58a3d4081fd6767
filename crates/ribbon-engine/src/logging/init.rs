use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ribbon_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Uses `filter` instead of `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // wgpu is chatty at info; keep it at warn unless asked.
            builder.filter_level(log::LevelFilter::Info);
            builder.filter_module("wgpu_core", log::LevelFilter::Warn);
            builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
        }

        builder.write_style(config.write_style);

        // `try_init` so tests or host applications that installed a logger first still work.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default().with_filter("debug"));
        init_logging(LoggingConfig::default());
        log::debug!("still alive");
    }
}
