use std::env::{self, VarError};

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

pub const LOG_ENV: &str = "MONOLIT_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        let filter = env::var(LOG_ENV);
        Self { filter }
    }
}

/// Installs a hierarchical stderr logger when `MONOLIT_LOG` holds a filter
/// such as `monolit_checker=debug`. Calling it more than once is harmless.
pub fn init_tracing() {
    let cfg = LoggerConfig::from_env();
    let filter = match cfg.filter {
        Ok(filter) => EnvFilter::new(filter),
        _ => return,
    };
    let layer = tracing_tree::HierarchicalLayer::default()
        .with_indent_lines(true)
        .with_writer(std::io::stderr);
    let subscribe = tracing_subscriber::Registry::default()
        .with(filter)
        .with(layer);
    // a subscriber installed by an earlier unit or by the host wins
    let _ = tracing::subscriber::set_global_default(subscribe);
}
