/// Logger the host (CLI, GUI, tests) hands to the model and plugins.
/// Every method is optional; unimplemented levels are dropped.
pub trait CoreLog: Send + Sync {
    fn info(&self, msg: &str) {
        let _ = msg;
    }
    fn warn(&self, msg: &str) {
        let _ = msg;
    }
    fn error(&self, msg: &str) {
        let _ = msg;
    }
    fn debug(&self, msg: &str) {
        let _ = msg;
    }
}

/// No-op logger for callers that don't care about notices.
pub struct NoopLog;
impl CoreLog for NoopLog {}
