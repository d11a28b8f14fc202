//! Pluggable parse error handling.
//!
//! Two independent axes:
//!
//! - [`ParseErrorHandler`] receives *recoverable* errors at the moment of
//!   detection. Standard policies: [`ThrowingParseErrorHandler`] (abort the
//!   whole parse, the strict default), [`LoggingParseErrorHandler`] (warn
//!   and let the grammar resynchronize), [`SilentParseErrorHandler`].
//! - [`ParseExceptionHandler`] receives *unrecoverable* failures. The
//!   default [`LoggingExceptionHandler`] logs; the entry point then returns
//!   `None` for the whole parse.
//!
//! A process-wide default recoverable handler lives behind a read/write
//! lock so concurrent parses observe a consistent default; per-call
//! handlers passed via `ReaderSettings` bypass it entirely.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::error::{CssParseError, CssParseFatal};

/// Receives recoverable parse errors.
///
/// Returning `Err` aborts the entire parse; returning `Ok(())` lets the
/// grammar skip to its synchronization point and continue.
pub trait ParseErrorHandler: Send + Sync {
    fn on_parse_error(&self, error: &CssParseError) -> Result<(), CssParseError>;
}

/// Abort on the first recoverable error. The strict default.
#[derive(Debug, Default)]
pub struct ThrowingParseErrorHandler;

impl ParseErrorHandler for ThrowingParseErrorHandler {
    fn on_parse_error(&self, error: &CssParseError) -> Result<(), CssParseError> {
        Err(error.clone())
    }
}

/// Emit a warning and keep parsing.
#[derive(Debug, Default)]
pub struct LoggingParseErrorHandler;

impl ParseErrorHandler for LoggingParseErrorHandler {
    fn on_parse_error(&self, error: &CssParseError) -> Result<(), CssParseError> {
        log::warn!("{error}");
        Ok(())
    }
}

/// Ignore recoverable errors entirely.
#[derive(Debug, Default)]
pub struct SilentParseErrorHandler;

impl ParseErrorHandler for SilentParseErrorHandler {
    fn on_parse_error(&self, _error: &CssParseError) -> Result<(), CssParseError> {
        Ok(())
    }
}

/// Receives unrecoverable parse failures before the entry point returns
/// `None`.
pub trait ParseExceptionHandler: Send + Sync {
    fn on_exception(&self, error: &CssParseFatal);
}

/// Log the failure. The default exception policy.
#[derive(Debug, Default)]
pub struct LoggingExceptionHandler;

impl ParseExceptionHandler for LoggingExceptionHandler {
    fn on_exception(&self, error: &CssParseFatal) {
        log::error!("{error}");
    }
}

/// Swallow the failure; used by validation-only entry points.
#[derive(Debug, Default)]
pub struct SilentExceptionHandler;

impl ParseExceptionHandler for SilentExceptionHandler {
    fn on_exception(&self, _error: &CssParseFatal) {}
}

static DEFAULT_PARSE_ERROR_HANDLER: Lazy<RwLock<Arc<dyn ParseErrorHandler>>> =
    Lazy::new(|| RwLock::new(Arc::new(ThrowingParseErrorHandler)));

/// The current process-wide default recoverable-error handler.
pub fn default_parse_error_handler() -> Arc<dyn ParseErrorHandler> {
    match DEFAULT_PARSE_ERROR_HANDLER.read() {
        Ok(guard) => Arc::clone(&guard),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

/// Replace the process-wide default recoverable-error handler.
///
/// Intended to be set once at startup; every parse call without a per-call
/// handler reads it.
pub fn set_default_parse_error_handler(handler: Arc<dyn ParseErrorHandler>) {
    match DEFAULT_PARSE_ERROR_HANDLER.write() {
        Ok(mut guard) => *guard = handler,
        Err(poisoned) => *poisoned.into_inner() = handler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SourceLocation;

    #[test]
    fn throwing_handler_aborts() {
        let err = CssParseError::new("bad", SourceLocation::new(1, 1));
        assert!(ThrowingParseErrorHandler.on_parse_error(&err).is_err());
    }

    #[test]
    fn silent_handler_recovers() {
        let err = CssParseError::new("bad", SourceLocation::new(1, 1));
        assert!(SilentParseErrorHandler.on_parse_error(&err).is_ok());
    }

    #[test]
    fn default_handler_can_be_swapped() {
        let err = CssParseError::new("bad", SourceLocation::new(1, 1));
        assert!(default_parse_error_handler().on_parse_error(&err).is_err());

        set_default_parse_error_handler(Arc::new(SilentParseErrorHandler));
        assert!(default_parse_error_handler().on_parse_error(&err).is_ok());

        // Restore the strict default for other tests in this process.
        set_default_parse_error_handler(Arc::new(ThrowingParseErrorHandler));
    }
}
