//! Subscriber setup for library consumers and tests.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

/// Directives used when `ALTTXT_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "alttxt_core=info,alttxt_analysis=info,alttxt_narrative=info";

static INIT: Once = Once::new();

/// Install a stderr fmt subscriber filtered by `ALTTXT_LOG`.
///
/// `ALTTXT_LOG=alttxt_narrative=debug,alttxt_analysis=trace` raises the
/// level per crate. Idempotent, and a no-op when the host process already
/// installed a global subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref());

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();

        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = filter_from(None).to_string();
        assert!(filter.contains("alttxt_narrative=info"));
    }

    #[test]
    fn test_custom_filter() {
        let filter = filter_from(Some("alttxt_analysis=debug")).to_string();
        assert!(filter.contains("alttxt_analysis=debug"));
        assert!(!filter.contains("alttxt_core"));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let filter = filter_from(Some("alttxt_core=notalevel")).to_string();
        assert!(filter.contains("alttxt_core=info"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
