use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset
fn default_directive(debug: bool) -> &'static str {
    if debug { "checkin=debug" } else { "checkin=warn" }
}

/// Send tracing output to stderr so stdout stays clean for panels and JSON
pub(crate) fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
