use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};
use crate::settings::{LogFormat, LogSettings, SettingsError};

/// 전역 tracing 구독자를 설치합니다.
///
/// `RUST_LOG`가 설정되어 있으면 그 지시어가 `settings.level`보다 우선합니다.
/// 이미 구독자가 설치되어 있으면 `SettingsError::LoggingInit`을 반환합니다.
pub fn init_logging(settings: &LogSettings) -> Result<(), SettingsError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(settings.level).into())
        .from_env_lossy();

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let result = match settings.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| SettingsError::LoggingInit {
        reason: e.to_string(),
    })
}
