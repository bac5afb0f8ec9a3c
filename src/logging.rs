use tracing_subscriber::EnvFilter;

/// The binary and the three calendar libraries.
const CRATE_TARGETS: &[&str] = &["luach", "luach_calendar", "luach_holidays", "luach_daf_yomi"];

/// Maps the `-v` count to a level for every crate target.
///
/// - 0 -> warn: nothing beyond failures
/// - 1 (-v) -> info: the command span and the resolved date
/// - 2 (-vv) -> debug: rejected dates and the resolved Daf Yomi
/// - 3+ (-vvv) -> trace: every molad computation
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the subscriber. Log lines go to stderr so command output on
/// stdout stays plain text. `RUST_LOG` replaces the `-v` mapping when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            default_filter(0),
            "luach=warn,luach_calendar=warn,luach_holidays=warn,luach_daf_yomi=warn"
        );
    }

    #[test]
    fn verbosity_saturates_at_trace() {
        assert!(default_filter(2).contains("luach_daf_yomi=debug"));
        assert_eq!(default_filter(3), default_filter(200));
        assert!(default_filter(3).split(',').all(|d| d.ends_with("=trace")));
    }
}
