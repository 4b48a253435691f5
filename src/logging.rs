use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the stderr subscriber. `RUST_LOG` wins over `default_level`;
/// calls after the first one leave the installed subscriber in place.
pub fn init(default_level: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  let subscriber = FmtSubscriber::builder()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .compact()
    .finish();

  if tracing::subscriber::set_global_default(subscriber).is_ok() {
    tracing::debug!(default_level, "logging initialized");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repeated_init_is_harmless() {
    init("warn");
    init("debug");
    tracing::info!("still logging");
  }
}
