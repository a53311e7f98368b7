use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts logging to stderr with the given specification.
///
/// The returned handle must be kept alive for as long as logs are written.
pub fn init(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let handle = Logger::try_with_str(spec)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    log::debug!("logger initialized with `{spec}`");
    Ok(handle)
}
