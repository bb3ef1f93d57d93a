//! Generic error handling utilities
//!
//! Every error enum in the crate implements [`ContextualError`] so the
//! console can decide between the error's own wording and a generic
//! operation context.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the user can fix this error by changing their input
    ///
    /// Examples of user-actionable errors:
    /// - Malformed command line
    /// - Unknown resource types
    ///
    /// Examples of system errors:
    /// - The cluster CLI could not be started
    /// - The cluster CLI exited with a failure
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log an error with a level of detail matching its kind
///
/// User-actionable errors are logged with their own message, system errors
/// with the operation context. Errors already shown on the console are
/// logged below the default `warn` level so stderr stays quiet. The full
/// error is always available at debug level.
///
/// ```rust,no_run
/// # use kube_scanner::core::error_handling::log_error_with_context;
/// # use kube_scanner::scanner::ScanError;
/// let err = ScanError::Launch {
///     tool: "oc".to_string(),
///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
/// };
/// log_error_with_context(&err, "Scanning pods", log::Level::Info);
/// // Logs: "Scanning pods: 'oc' was not found; ..."
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
    level: log::Level,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::log!(level, "{}: {}", operation_context, user_msg);
        }
        _ => log::log!(level, "{} failed", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
