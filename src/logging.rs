use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive, e.g. `portfolio_site=debug`.
pub const LOG_ENV: &str = "PORTFOLIO_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logging();
        init_logging();
        tracing::info!("still logging");
    }
}
