use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default console filter, overridden by `RUST_LOG` when it is set.
const CONSOLE_FILTER: &str = "info,web_request=warn,clustering=info";

/// Filter for the rolling file log, which keeps request and clustering detail.
const FILE_FILTER: &str = "info,web_request=debug,clustering=debug";

pub fn configure_logging() {
    // Console goes to stderr so that `--json` output on stdout stays clean
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_FILTER));
    let console_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter);

    // File log configuration
    let file_appender = rolling::daily("logs", "topicmap.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(console_log)
        .with(file_log)
        .init();
}
