// Copyright (C) 2025 Red Hat
// SPDX-License-Identifier: Apache-2.0

//! Shared setup for the logmimic command lines.

/// Initializes the tracing subscriber.
///
/// Diagnostics always go to stderr: stdout is the data stream. The default
/// is a compact INFO logger; setting `LOGMIMIC_LOG` switches to hierarchical
/// spans under the given filter.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let logger = tracing_subscriber::Registry::default();
    match std::env::var_os("LOGMIMIC_LOG") {
        None => logger
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_filter(tracing_subscriber::filter::LevelFilter::INFO),
            )
            .init(),
        Some(_level) => logger
            .with(
                tracing_tree::HierarchicalLayer::new(1)
                    .with_targets(true)
                    .with_bracketed_fields(true)
                    .with_writer(std::io::stderr)
                    .with_filter(tracing_subscriber::filter::EnvFilter::from_env(
                        "LOGMIMIC_LOG",
                    )),
            )
            .init(),
    }
}
