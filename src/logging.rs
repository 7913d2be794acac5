use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the log filter. `RUST_LOG` wins when it is set and valid;
/// `--verbose` always adds `debug` on top.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

/// Installs the stderr subscriber so stdout stays free for the page.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::log_filter;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn defaults_to_info() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_is_not_overridden() {
        assert_eq!(log_filter(false, Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(false, Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_rust_log_falls_back_to_info() {
        assert_eq!(log_filter(false, Some("menu_board=loudest")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn verbose_enables_debug() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(true, Some("warn")).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
