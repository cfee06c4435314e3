use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing once. Logs go to stderr; stdout carries protocol output.
///
/// `RUST_LOG` wins over the default level, which is `warn` (`debug` with
/// `verbose`).
pub fn init_logging(verbose: bool) {
    INIT_LOGGING.call_once(|| {
        let default_filter = if verbose {
            "candwin_helper=debug,candwin_core=debug,candwin_tbl=debug"
        } else {
            "warn"
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
