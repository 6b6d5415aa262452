use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber for the `rover-explorer` binary.
///
/// Stdout carries the interactive prompts, so log lines go to stderr. `RUST_LOG`
/// wins when set; otherwise `verbose` lowers the crate's level to `debug`.
pub fn init_explorer_logger(verbose: bool) {
    let default_directive = if verbose {
        "mars_rover=debug,warn"
    } else {
        "mars_rover=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
