use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Install the global subscriber. Verbosity comes from `RUST_LOG`.
pub fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
