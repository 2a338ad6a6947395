//! Typewriter - Character-by-character role animation
//!
//! Cycles through a list of role strings, typing each one out a character at
//! a time, pausing on the full word, deleting it back, then moving to the
//! next role. The machine itself is synchronous: [`Typewriter::step`]
//! performs one transition and returns the delay until the next, so a timer
//! loop (see [`task`]) or a test can drive it at any speed.
//!
//! The current word is cached when the machine advances to it. Swapping the
//! role list mid-word finishes the word in flight and picks up the new list
//! at the next advance, so a language switch never garbles the text.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::typewriter::{Typewriter, TypewriterConfig};
//!
//! let mut tw = Typewriter::new(vec!["Developer".into()], TypewriterConfig::default());
//! let delay = tw.step();
//! assert_eq!(tw.text(), "D");
//! ```

pub mod task;

use std::time::Duration;

use spark_signals::{Signal, signal};

// =============================================================================
// Configuration
// =============================================================================

/// Animation pacing.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    /// Delay after typing one character.
    pub type_speed: Duration,
    /// Delay after deleting one character.
    pub delete_speed: Duration,
    /// Hold on the fully typed word.
    pub pause: Duration,
    /// Hold on the empty string before the next word.
    pub transition: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
            transition: Duration::from_millis(500),
        }
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Typewriter state machine. Drive with [`step`](Typewriter::step).
pub struct Typewriter {
    roles: Vec<String>,
    index: usize,
    /// Word currently being typed or deleted. Cached at advance time so a
    /// role-list swap never changes the word mid-flight.
    word: String,
    /// Characters currently shown.
    shown: usize,
    deleting: bool,
    text: Signal<String>,
    config: TypewriterConfig,
}

impl Typewriter {
    /// Create a machine over the given roles. An empty list falls back to a
    /// single empty role, which keeps the machine valid but inert.
    pub fn new(roles: Vec<String>, config: TypewriterConfig) -> Self {
        let roles = if roles.is_empty() {
            tracing::warn!("typewriter created with no roles");
            vec![String::new()]
        } else {
            roles
        };
        let word = roles.first().cloned().unwrap_or_default();
        Self {
            roles,
            index: 0,
            word,
            shown: 0,
            deleting: false,
            text: signal(String::new()),
            config,
        }
    }

    /// Perform one transition and return the delay until the next.
    pub fn step(&mut self) -> Duration {
        let word_len = self.word.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(word_len);
        }

        let prefix: String = self.word.chars().take(self.shown).collect();
        self.text.set(prefix);

        if !self.deleting && self.shown == word_len {
            self.deleting = true;
            return self.config.pause;
        }
        if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.roles.len();
            self.word = self.roles.get(self.index).cloned().unwrap_or_default();
            return self.config.transition;
        }

        if self.deleting {
            self.config.delete_speed
        } else {
            self.config.type_speed
        }
    }

    /// Swap the role list. The word in flight finishes first; the new list
    /// takes effect when the machine advances to its next word. Empty lists
    /// are rejected.
    pub fn set_roles(&mut self, roles: Vec<String>) {
        if roles.is_empty() {
            tracing::warn!("ignoring empty role list");
            return;
        }
        self.roles = roles;
        // The next advance wraps the position into the new list.
        self.index %= self.roles.len();
    }

    /// Text currently shown.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Reactive handle on the shown text.
    pub fn text_signal(&self) -> Signal<String> {
        self.text.clone()
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Word currently being typed or deleted.
    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }
}

// =============================================================================
// Tests
// =============================================================================
