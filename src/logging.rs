use tracing_subscriber::EnvFilter;

/// The binary and the library.
const CRATE_TARGETS: &[&str] = &["tqdate", "tqtime"];

/// Sends logs to stderr so that stdout carries only converted dates.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `-v` enables info, `-vv` debug and `-vvv` trace; warnings are always on.
fn directives(verbosity: u8) -> String {
    let level = ["warn", "info", "debug", "trace"][usize::from(verbosity.min(3))];
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
