use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`, or `debug` when `verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "tabular_publish=debug"
    } else {
        "tabular_publish=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
