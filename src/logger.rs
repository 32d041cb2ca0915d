use std::io;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::env::LoggingSettings;

/// 전역 subscriber 를 설치하고, 파일 writer 가 살아있도록 guard 를 들고 있습니다.
/// 라이브러리는 subscriber 를 직접 설치하지 않으므로 바이너리에서만 사용합니다.
pub struct LoggerManager {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

impl LoggerManager {
    pub fn setup(settings: &LoggingSettings) -> Self {
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &settings.directory, &settings.filename);
        let (non_blocking_file_writer, guard) = tracing_appender::non_blocking(file_appender);

        // RUST_LOG 가 있으면 우선
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.level));

        // 덱 출력은 stdout 이므로 로그는 stderr 로
        let console_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .pretty();

        let file_layer = fmt::layer()
            .with_writer(non_blocking_file_writer)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        tracing::debug!(
            "logger initialized: console and file ({}/{})",
            settings.directory,
            settings.filename
        );

        Self { _guard: guard }
    }
}
