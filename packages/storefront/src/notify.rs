//! User-visible notifications.
//!
//! Three literal surfaces exist: a pending toast while the claim is in
//! flight, a success toast, and one generic failure toast. The pending
//! toast is dismissed exactly once per mint attempt, on both paths.

use serde::Serialize;

pub const MSG_MINTING: &str = "Minting NFT...";
pub const MSG_SUCCESS: &str = "Successfully minted";
pub const MSG_FAILURE: &str = "Whoops.... Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Pending,
    Success,
    Failure,
}

/// Handle to a pending toast, used to dismiss it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastId(usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub dismissed: bool,
    #[serde(skip)]
    pub dismissals: u32,
}

/// Sink for page notifications.
pub trait Notifier {
    /// Show a pending toast and return a handle for dismissal.
    fn begin_pending(&mut self, message: &str) -> ToastId;
    fn push(&mut self, kind: ToastKind, message: &str);
    fn dismiss(&mut self, id: ToastId);
}

/// Notifier that records the toast log so the page response can carry it.
/// Also mirrors each toast to the service log.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Vec<Toast>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Notifier for RecordingNotifier {
    fn begin_pending(&mut self, message: &str) -> ToastId {
        tracing::info!(message, "toast: pending");
        self.toasts.push(Toast {
            kind: ToastKind::Pending,
            message: message.to_string(),
            dismissed: false,
            dismissals: 0,
        });
        ToastId(self.toasts.len() - 1)
    }

    fn push(&mut self, kind: ToastKind, message: &str) {
        tracing::info!(?kind, message, "toast");
        self.toasts.push(Toast {
            kind,
            message: message.to_string(),
            dismissed: false,
            dismissals: 0,
        });
    }

    fn dismiss(&mut self, id: ToastId) {
        if let Some(toast) = self.toasts.get_mut(id.0) {
            toast.dismissed = true;
            toast.dismissals += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_toast_records_dismissal_count() {
        let mut notifier = RecordingNotifier::new();
        let id = notifier.begin_pending(MSG_MINTING);
        notifier.push(ToastKind::Success, MSG_SUCCESS);
        notifier.dismiss(id);

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Pending);
        assert!(toasts[0].dismissed);
        assert_eq!(toasts[0].dismissals, 1);
        assert!(!toasts[1].dismissed);
    }

    #[test]
    fn toast_serializes_without_internal_counter() {
        let mut notifier = RecordingNotifier::new();
        let id = notifier.begin_pending(MSG_MINTING);
        notifier.dismiss(id);

        let json = serde_json::to_value(&notifier.toasts()[0]).unwrap();
        assert_eq!(json["kind"], "pending");
        assert_eq!(json["message"], MSG_MINTING);
        assert_eq!(json["dismissed"], true);
        assert!(json.get("dismissals").is_none());
    }
}
