use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

const TRACE_DIRECTIVE: &str = "monkey=trace";

/// Initialize tracing for diagnostic output on stderr.
///
/// Reads the filter from `MONKEY_LOG`, then `RUST_LOG`. With neither set,
/// logging stays off unless `trace` asks for identifier tracing. With
/// `trace`, `monkey=trace` is added on top of any filter from the environment.
pub fn init_tracing(trace: bool) {
    TRACING_INIT.call_once(|| {
        let from_env = EnvFilter::try_from_env("MONKEY_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .ok();

        if let Some(filter) = build_filter(from_env, trace) {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn build_filter(from_env: Option<EnvFilter>, trace: bool) -> Option<EnvFilter> {
    match (from_env, trace) {
        (Some(filter), false) => Some(filter),
        (Some(filter), true) => match TRACE_DIRECTIVE.parse() {
            Ok(directive) => Some(filter.add_directive(directive)),
            Err(_) => Some(filter),
        },
        (None, true) => Some(EnvFilter::new(TRACE_DIRECTIVE)),
        (None, false) => None,
    }
}
