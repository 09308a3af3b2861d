use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Включить логирование в stderr.
///
/// Уровень берётся из `RUST_LOG`, иначе из `default_spec` (например, "info"
/// или "domino_engine=debug"). Хэндл нужно держать живым до конца программы.
pub fn init_logging(default_spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(default_spec)?
        .log_to_stderr()
        .format(flexi_logger::colored_opt_format)
        .start()
}
