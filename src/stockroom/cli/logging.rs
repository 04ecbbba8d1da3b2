use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive; it wins over `--verbose`.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

/// Installs the stderr subscriber. Quiet by default so logs never mix into rendered views.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("stockroom=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
