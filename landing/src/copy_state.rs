//! Transient "copied" flag behind the install snippet's copy button.
//!
//! The flag flips on after a successful clipboard write and falls back after
//! [`RESET_DELAY`]. Each successful copy hands out a [`ResetTicket`]; only the
//! ticket from the latest copy can clear the flag, so the window always runs
//! from the most recent write no matter how timers overlap.

use crate::clipboard::ClipboardError;
use std::time::Duration;

/// How long the button shows the copied variant after a successful write.
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// Button label while nothing has been copied recently.
pub const LABEL_IDLE: &str = "Copy";
/// Button label for [`RESET_DELAY`] after a successful copy.
pub const LABEL_COPIED: &str = "Copied!";

const CLASS_IDLE: &str = "absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-lg \
    text-gray-400 hover:text-white hover:bg-gray-700/50 transition-all duration-300";
const CLASS_COPIED: &str = "absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-lg \
    bg-green-500 text-white transition-all duration-300";

/// Handle for one scheduled reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Copied flag plus the generation of the copy that set it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: bool,
    generation: u64,
}

impl CopyState {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Apply the outcome of a clipboard write. Only a successful write flips
    /// the flag and yields a ticket for the reset; a failure changes nothing.
    pub fn on_write(&mut self, result: &Result<(), ClipboardError>) -> Option<ResetTicket> {
        match result {
            Ok(()) => Some(self.mark_copied()),
            Err(_) => None,
        }
    }

    /// Record a successful write. The returned ticket is the only one that
    /// can expire this copy; earlier tickets become stale.
    pub fn mark_copied(&mut self) -> ResetTicket {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        ResetTicket(self.generation)
    }

    /// Apply a fired reset. Returns `true` if the flag was cleared.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if !self.copied || ticket.0 != self.generation {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn label(&self) -> &'static str {
        if self.is_copied() { LABEL_COPIED } else { LABEL_IDLE }
    }

    pub fn button_class(&self) -> &'static str {
        if self.is_copied() { CLASS_COPIED } else { CLASS_IDLE }
    }
}
