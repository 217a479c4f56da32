//! Logging setup for the command-line front end

use tracing_subscriber::EnvFilter;

/// Default filter for the given verbosity, used when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "napi_build_utils=debug"
    } else {
        "napi_build_utils=warn"
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the verbosity default.
pub fn init_logging(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
