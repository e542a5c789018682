//! Status reporter: the latest session phase, observable by renderers.

use serde::Serialize;
use std::fmt;
use tokio::sync::watch;

/// Phase of the editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Loading,
    Saving,
    Deleting,
    Error(String),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Ready"),
            Self::Loading => f.write_str("Loading…"),
            Self::Saving => f.write_str("Saving…"),
            Self::Deleting => f.write_str("Deleting…"),
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// What the presentation layer renders: one phase string and an error flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn ready() -> Self {
        Phase::Ready.into()
    }
}

impl From<Phase> for Status {
    fn from(phase: Phase) -> Self {
        Self {
            is_error: matches!(phase, Phase::Error(_)),
            text: phase.to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Holds the latest status and hands out receivers for it.
///
/// Each report overwrites the previous one; receivers only ever see the
/// newest value.
#[derive(Debug)]
pub struct StatusReporter {
    tx: watch::Sender<Status>,
}

impl StatusReporter {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Status::ready());
        Self { tx }
    }

    pub fn report(&self, phase: Phase) {
        log::debug!("status: {phase}");
        self.tx.send_replace(phase.into());
    }

    pub fn current(&self) -> Status {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.tx.subscribe()
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn phases_render_fixed_strings() {
        assert_eq!(Phase::Ready.to_string(), "Ready");
        assert_eq!(Phase::Loading.to_string(), "Loading…");
        assert_eq!(Phase::Saving.to_string(), "Saving…");
        assert_eq!(Phase::Deleting.to_string(), "Deleting…");
        assert_eq!(
            Phase::Error("note not found: a".into()).to_string(),
            "Error: note not found: a"
        );
    }

    #[test]
    fn only_error_phase_sets_flag() {
        assert!(!Status::from(Phase::Saving).is_error);
        assert!(Status::from(Phase::Error("x".into())).is_error);
    }

    #[test]
    fn reporter_keeps_only_latest() {
        let reporter = StatusReporter::new();
        let rx = reporter.subscribe();
        assert_eq!(reporter.current(), Status::ready());

        reporter.report(Phase::Loading);
        reporter.report(Phase::Error("offline".into()));

        assert_eq!(rx.borrow().text, "Error: offline");
        assert!(reporter.current().is_error);
    }
}
