use std::sync::Arc;

/// Tag prepended to every line so generator output stands out in mixed
/// build logs.
pub const LOG_TAG: &str = "[css-typegen]";

/// Sink for operator-facing messages.
///
/// Implementations receive pre-formatted lines (already carrying
/// [`LOG_TAG`]); there are no structured fields. The generator never logs
/// through ambient global state, so tests can inject a capturing fake.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default logger: info to stdout, warnings and errors to stderr.
#[derive(Debug, Default, Clone)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Logger that drops everything. Useful for embedding callers that do their
/// own reporting.
#[derive(Debug, Default, Clone)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

pub fn default_logger() -> Arc<dyn Logger> {
    Arc::new(ConsoleLogger)
}


#[cfg(test)]
mod tests {
    use super::test_support::CapturingLogger;
    use super::*;

    #[test]
    fn test_capturing_logger_records_levels() {
        let logger = CapturingLogger::default();
        logger.info("one");
        logger.warn("two");
        logger.error("three");

        assert_eq!(logger.infos.lock().unwrap().as_slice(), ["one"]);
        assert_eq!(logger.warnings.lock().unwrap().as_slice(), ["two"]);
        assert_eq!(logger.errors.lock().unwrap().as_slice(), ["three"]);
    }

    #[test]
    fn test_null_logger_is_silent() {
        // Just exercises the trait object path.
        let logger: Box<dyn Logger> = Box::new(NullLogger);
        logger.info("ignored");
        logger.warn("ignored");
        logger.error("ignored");
    }
}
