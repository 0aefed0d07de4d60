use crate::error::LoadError;
use log::error;

/// Where load failures go
///
/// Failures are reported here and nowhere else; they never become page
/// content.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &LoadError);
}

/// Reports through the `log` facade at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, err: &LoadError) {
        error!("{}", err);
    }
}
