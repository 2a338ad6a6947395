//! Clipboard Module - Text copy support
//!
//! The email-copy flow needs a clipboard that may refuse, so the operation
//! is a trait with a success flag. [`BufferClipboard`] keeps the text in an
//! internal buffer (and always succeeds); [`DeniedClipboard`] always refuses,
//! standing in for a host where clipboard access is unavailable.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::clipboard::{BufferClipboard, Clipboard};
//!
//! let clipboard = BufferClipboard::new();
//! if clipboard.copy("hello@example.com") {
//!     assert_eq!(clipboard.paste(), Some("hello@example.com".to_string()));
//! }
//! ```

use std::cell::RefCell;

// =============================================================================
// Trait
// =============================================================================

/// Copy seam. Returns whether the copy succeeded.
pub trait Clipboard {
    fn copy(&self, text: &str) -> bool;
}

// =============================================================================
// Buffer implementation
// =============================================================================

/// Clipboard backed by an internal buffer.
#[derive(Debug, Default)]
pub struct BufferClipboard {
    buffer: RefCell<Option<String>>,
}

impl BufferClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text, or None if the buffer is empty.
    pub fn paste(&self) -> Option<String> {
        self.buffer.borrow().clone()
    }

    /// Empty the buffer.
    pub fn clear(&self) {
        *self.buffer.borrow_mut() = None;
    }

    pub fn has_content(&self) -> bool {
        self.buffer.borrow().is_some()
    }

    pub fn content_length(&self) -> usize {
        self.buffer.borrow().as_ref().map(|s| s.len()).unwrap_or(0)
    }
}

impl Clipboard for BufferClipboard {
    /// Empty strings are refused (buffer not modified).
    fn copy(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        *self.buffer.borrow_mut() = Some(text.to_string());
        true
    }
}

// =============================================================================
// Denied implementation
// =============================================================================

/// Clipboard that refuses every copy.
#[derive(Debug, Default)]
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn copy(&self, _text: &str) -> bool {
        false
    }
}

// =============================================================================
// Tests
// =============================================================================
