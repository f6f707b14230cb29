use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::AppConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the default filter;
/// production emits JSON lines.
pub fn init_tracing(config: &AppConfig) {
    let default_filter = format!("{}=info,actix_web=info", env!("CARGO_PKG_NAME"));
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
