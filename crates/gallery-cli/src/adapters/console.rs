use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use gallery_core::ports::{Notification, NotificationKind, NotifierPort, UploadViewPort};

/// Prints notifications as single lines, e.g. `[error] Upload failed: ...`.
///
/// Display duration and the closable flag have no meaning on a terminal and
/// are ignored.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

fn format_notification(notification: &Notification) -> String {
    let kind = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };
    format!(
        "[{kind}] {}: {}",
        notification.title, notification.description
    )
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = format_notification(&notification);
        let mut out = self.out.lock().unwrap_or_else(|p| p.into_inner());
        if let Err(e) = writeln!(out, "{line}") {
            tracing::warn!(error = %e, "Failed to print notification");
        }
    }
}

/// Records that the upload view was asked to close.
#[derive(Default)]
pub struct ConsoleUploadView {
    closed: AtomicBool,
}

impl ConsoleUploadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl UploadViewPort for ConsoleUploadView {
    fn close_modal(&self) {
        tracing::debug!("Upload view closed");
        self.closed.store(true, Ordering::SeqCst);
    }
}
