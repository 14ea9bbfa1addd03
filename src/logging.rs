// Logging setup. Diagnostics go to stderr so they never interleave with the
// interactive prompts on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set: `-v` adds info, `-vv` debug.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "card_dashboard=info,warn",
        _ => "card_dashboard=debug,info",
    }
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
