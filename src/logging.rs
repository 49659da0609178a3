//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: the crate's own diagnostics at `info`, `debug` when verbose.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,mineplex_stats=debug"
    } else {
        "warn,mineplex_stats=info"
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` overrides the defaults.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let console_layer = fmt::layer()
        .with_target(verbose)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();

    tracing::debug!("Logging initialized, version {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
