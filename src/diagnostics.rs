//! Diagnostic reporting for degenerate and unsupported geometric queries.
//!
//! The kernel never depends on a sink for correctness: messages carry
//! human-readable context only and must not influence control flow.

/// A sink for human-readable diagnostic messages.
///
/// Passed explicitly to the operations that can encounter an unsupported
/// shape combination, instead of a hidden process-wide logger.
pub trait DiagnosticSink {
    /// Receives one diagnostic message.
    fn report(&self, message: &str);
}

/// Forwards diagnostics to the `tracing` ecosystem at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(target: "geokern", "{message}");
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _message: &str) {}
}

/// Any `Fn(&str)` closure is a sink; tests use this to capture messages.
impl<F: Fn(&str)> DiagnosticSink for F {
    fn report(&self, message: &str) {
        self(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[test]
    fn closure_sink_captures_messages() {
        let captured = RefCell::new(Vec::new());
        let sink = |msg: &str| captured.borrow_mut().push(msg.to_owned());

        sink.report("first");
        sink.report("second");

        assert_eq!(*captured.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn null_sink_is_silent() {
        NullSink.report("nothing happens");
    }

    #[test]
    fn tracing_sink_forwards_to_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            TracingSink.report("intersection not implemented: segment <-> segment");
        });
    }
}
