use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{instrument, trace, warn};

use crate::config::LogsConfig;

/// Logs go to stderr; stdout carries driver responses.
///
/// `RUST_LOG` wins over the configured filter.
#[instrument]
pub fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => (env_filter, None),
        Err(_) => match EnvFilter::try_new(filter) {
            Ok(env_filter) => (env_filter, None),
            Err(err) => (EnvFilter::new(LogsConfig::default().filter), Some(err)),
        },
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    if let Some(err) = invalid {
        warn!(filter, %err, "invalid log filter, using default");
    }

    trace!("finished");
}
