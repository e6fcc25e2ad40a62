use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send logs to stderr so they never mix with command output.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn setup_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("speeddial=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A second init (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .try_init();
}
