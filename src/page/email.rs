//! Email Copy - Clipboard copy with mailto fallback
//!
//! Clicking the email link copies the address and flips a `copied` flag the
//! host can render as a confirmation. The flag reverts on a timer. When the
//! clipboard refuses, the click falls back to a mailto URL for the host to
//! open instead.

use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, flush_sync, signal};

use crate::clipboard::Clipboard;
use crate::timer::TimerQueue;

/// What a click produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Address is on the clipboard; confirmation is showing.
    Copied,
    /// Clipboard refused; open this URL instead.
    MailtoFallback(String),
}

pub struct EmailCopy {
    address: String,
    clipboard: Rc<dyn Clipboard>,
    copied: Signal<bool>,
    timers: TimerQueue,
    revert_after: Duration,
}

impl EmailCopy {
    pub fn new(address: impl Into<String>, clipboard: Rc<dyn Clipboard>, timers: TimerQueue) -> Rc<Self> {
        Rc::new(Self {
            address: address.into(),
            clipboard,
            copied: signal(false),
            timers,
            revert_after: Duration::from_millis(2000),
        })
    }

    /// Handle a click on the email link.
    pub fn click(self: &Rc<Self>) -> CopyOutcome {
        if self.clipboard.copy(&self.address) {
            self.copied.set(true);
            flush_sync();
            let email = self.clone();
            self.timers.schedule(self.revert_after, move |_| {
                email.copied.set(false);
                flush_sync();
            });
            CopyOutcome::Copied
        } else {
            CopyOutcome::MailtoFallback(format!("mailto:{}", self.address))
        }
    }

    /// Whether the confirmation is currently showing.
    pub fn copied(&self) -> bool {
        self.copied.get()
    }

    /// Reactive handle on the confirmation flag.
    pub fn copied_signal(&self) -> Signal<bool> {
        self.copied.clone()
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{BufferClipboard, DeniedClipboard};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_copy_sets_and_reverts_flag() {
        let timers = TimerQueue::default();
        let clipboard = Rc::new(BufferClipboard::new());
        let email = EmailCopy::new("me@example.com", clipboard.clone(), timers.clone());

        assert_eq!(email.click(), CopyOutcome::Copied);
        assert!(email.copied());
        assert_eq!(clipboard.paste(), Some("me@example.com".to_string()));

        timers.advance(ms(1999));
        assert!(email.copied());
        timers.advance(ms(1));
        assert!(!email.copied());
    }

    #[test]
    fn test_overlapping_clicks_revert_on_earliest_timer() {
        let timers = TimerQueue::default();
        let email = EmailCopy::new(
            "me@example.com",
            Rc::new(BufferClipboard::new()),
            timers.clone(),
        );

        email.click();
        timers.advance(ms(1500));
        email.click();

        // The first click's revert fires at the 2s mark regardless of the
        // second click; the flag settles false once both are past.
        timers.advance(ms(500));
        assert!(!email.copied());
        timers.advance(ms(1500));
        assert!(!email.copied());
    }

    #[test]
    fn test_denied_clipboard_falls_back_to_mailto() {
        let timers = TimerQueue::default();
        let email = EmailCopy::new("me@example.com", Rc::new(DeniedClipboard), timers);

        assert_eq!(
            email.click(),
            CopyOutcome::MailtoFallback("mailto:me@example.com".to_string())
        );
        assert!(!email.copied());
    }
}
