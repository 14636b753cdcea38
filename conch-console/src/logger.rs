//! 日志初始化
//!
//! Console binaries and demos call one of these at startup; the library
//! itself never installs a subscriber. `RUST_LOG` overrides the default
//! level, and with a log directory set the output also rolls into a
//! daily file.

use tracing_subscriber::EnvFilter;

/// Initialize terminal logging at the default level
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize logging, optionally with rolling file output.
///
/// `log_dir` must already exist; a missing directory falls back to
/// terminal-only logging instead of failing startup.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && std::path::Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "conch-console");
        subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .init();
        return;
    }

    subscriber.init();
}
