use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose, false);
}

/// JSON lines on stderr, for running under a log collector.
pub fn init_json_logger(verbose: bool) {
    init_logger(verbose, true);
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_directive = if verbose {
        "fair_turns=debug,warn"
    } else {
        "fair_turns=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn base_layer<S>() -> fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, fn() -> std::io::Stderr> {
    // stdout 留給報表輸出，日誌一律寫到 stderr
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> std::io::Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

fn init_logger(verbose: bool, json: bool) {
    let (compact_layer, json_layer) = if json {
        (None, Some(base_layer().json()))
    } else {
        (Some(base_layer().compact()), None)
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(compact_layer)
        .with(json_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_default_levels() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter(false).to_string().contains("fair_turns=info"));
        assert!(env_filter(true).to_string().contains("fair_turns=debug"));
    }
}
