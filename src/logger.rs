//! Optional logger capability for the SES client.
//!
//! The client accepts an injected logger with four severity-leveled
//! operations. Every method has a default no-op body, so implementors opt
//! into exactly the levels they care about and the client can log
//! unconditionally. Logging never affects control flow.

use std::sync::Arc;

/// Severity-leveled logging capability.
///
/// All methods default to no-ops; implement only the levels you need.
///
/// # Examples
///
/// ```
/// use ses_send::Logger;
///
/// struct StdoutLogger;
///
/// impl Logger for StdoutLogger {
///     fn info(&self, message: &str) {
///         println!("{message}");
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an error-level message.
    fn error(&self, message: &str) {
        let _ = message;
    }

    /// Log a warning-level message.
    fn warn(&self, message: &str) {
        let _ = message;
    }

    /// Log an info-level message.
    fn info(&self, message: &str) {
        let _ = message;
    }

    /// Log a debug-level message.
    fn debug(&self, message: &str) {
        let _ = message;
    }
}

/// Handle over an optional logger that never requires presence checks.
///
/// A `None` inner logger turns every call into a no-op.
#[derive(Clone, Default)]
pub(crate) struct LogHandle {
    inner: Option<Arc<dyn Logger>>,
}

impl LogHandle {
    pub(crate) fn new(logger: Option<Arc<dyn Logger>>) -> Self {
        Self { inner: logger }
    }

    pub(crate) fn error(&self, message: &str) {
        if let Some(logger) = &self.inner {
            logger.error(message);
        }
    }

    pub(crate) fn warn(&self, message: &str) {
        if let Some(logger) = &self.inner {
            logger.warn(message);
        }
    }

    pub(crate) fn info(&self, message: &str) {
        if let Some(logger) = &self.inner {
            logger.info(message);
        }
    }

    pub(crate) fn debug(&self, message: &str) {
        if let Some(logger) = &self.inner {
            logger.debug(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        messages: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(format!("error: {message}"));
        }

        fn info(&self, message: &str) {
            self.messages.lock().unwrap().push(format!("info: {message}"));
        }
    }

    #[test]
    fn absent_logger_is_a_noop() {
        let handle = LogHandle::new(None);
        handle.error("e");
        handle.warn("w");
        handle.info("i");
        handle.debug("d");
    }

    #[test]
    fn unimplemented_levels_default_to_noop() {
        let logger = Arc::new(RecordingLogger::default());
        let handle = LogHandle::new(Some(logger.clone()));

        handle.error("boom");
        handle.warn("careful");
        handle.info("sent");
        handle.debug("details");

        let messages = logger.messages.lock().unwrap();
        assert_eq!(*messages, vec!["error: boom", "info: sent"]);
    }

    #[test]
    fn handle_is_cloneable() {
        let logger = Arc::new(RecordingLogger::default());
        let handle = LogHandle::new(Some(logger.clone()));
        let clone = handle.clone();

        handle.info("one");
        clone.info("two");

        assert_eq!(logger.messages.lock().unwrap().len(), 2);
    }
}
