//! User-visible notification surface.
//!
//! Every library mutation reports its outcome through this trait; it is the
//! toast channel of the original browsing surface, and the only externally
//! observable side effect of a mutation beyond the store's own state.

/// Sink for one-line user-facing notifications.
pub trait Notifier {
    /// Reports a completed operation.
    fn success(&self, message: &str);

    /// Reports a failed operation. The underlying error has already been
    /// logged by the caller; this carries only the user-facing line.
    fn error(&self, message: &str);
}

/// Notifier for the terminal front end: one line per notification on stderr,
/// so command output on stdout stays clean.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("ok: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
