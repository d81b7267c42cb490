use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs at `info` unless `debug` is set. `RUST_LOG` is only honoured in
/// debug mode, so a stray variable in the user's shell can't flood the
/// terminal.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
