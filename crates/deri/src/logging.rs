use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,tower=debug",
    }
}

/// `RUST_LOG` wins over the configured filter, which wins over `-v`.
pub fn init(verbose: u8, configured: Option<&str>) {
    let from_env = std::env::var("RUST_LOG").ok();
    let directives = from_env
        .as_deref()
        .or(configured)
        .unwrap_or_else(|| level_for(verbose));
    let filter =
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!(verbose, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "info");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(2), "trace");
        assert!(level_for(5).starts_with("trace,"));
    }
}
