//! The panel status machine gating sequence starts.
//!
//! A menu is `Open` (initially), `Closed`, or `Animating`. `Animating` is the
//! only state in which a driver may run. There is no cancel transition: once
//! a sequence starts it always runs to completion, and any open/close request
//! issued meanwhile is rejected.

use crate::menu::sequencer::SequenceKind;

/// Observable state of a fan menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    /// All slots revealed; no driver active.
    Open,
    /// All slots hidden; no driver active.
    Closed,
    /// A sequence is in flight.
    Animating,
}

/// Tracks the menu status and gates sequence starts.
#[derive(Debug, Clone)]
pub struct StatusGate {
    status: MenuStatus,
}

impl StatusGate {
    /// A new gate in the initial `Open` state.
    pub fn new() -> Self {
        Self {
            status: MenuStatus::Open,
        }
    }

    /// The current status.
    pub fn status(&self) -> MenuStatus {
        self.status
    }

    /// Attempts to start a sequence in the given direction.
    ///
    /// Returns true and moves to `Animating` when the start is allowed.
    /// Redundant requests (already in the target state) and re-entrant
    /// requests (mid-sequence) are rejected, leaving the status unchanged;
    /// the rejection is observable only through the debug log.
    pub fn try_start(&mut self, kind: SequenceKind) -> bool {
        let rejected = match kind {
            SequenceKind::Open => self.status == MenuStatus::Open,
            SequenceKind::Close => self.status == MenuStatus::Closed,
        } || self.status == MenuStatus::Animating;

        if rejected {
            match kind {
                SequenceKind::Open => log::debug!("skip open animation (status {:?})", self.status),
                SequenceKind::Close => {
                    log::debug!("skip close animation (status {:?})", self.status);
                }
            }
            return false;
        }
        self.status = MenuStatus::Animating;
        true
    }

    /// Settles an `Animating` gate into the terminal state for `kind`.
    pub fn settle(&mut self, kind: SequenceKind) {
        debug_assert_eq!(self.status, MenuStatus::Animating);
        self.status = match kind {
            SequenceKind::Open => MenuStatus::Open,
            SequenceKind::Close => MenuStatus::Closed,
        };
    }
}

impl Default for StatusGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_open() {
        assert_eq!(StatusGate::new().status(), MenuStatus::Open);
    }

    #[test]
    fn open_while_open_is_rejected() {
        let mut gate = StatusGate::new();
        assert!(!gate.try_start(SequenceKind::Open));
        assert_eq!(gate.status(), MenuStatus::Open);
    }

    #[test]
    fn close_then_open_cycle() {
        let mut gate = StatusGate::new();

        assert!(gate.try_start(SequenceKind::Close));
        assert_eq!(gate.status(), MenuStatus::Animating);
        gate.settle(SequenceKind::Close);
        assert_eq!(gate.status(), MenuStatus::Closed);

        assert!(gate.try_start(SequenceKind::Open));
        gate.settle(SequenceKind::Open);
        assert_eq!(gate.status(), MenuStatus::Open);
    }

    #[test]
    fn requests_while_animating_are_rejected() {
        let mut gate = StatusGate::new();
        assert!(gate.try_start(SequenceKind::Close));

        assert!(!gate.try_start(SequenceKind::Open));
        assert!(!gate.try_start(SequenceKind::Close));
        assert_eq!(gate.status(), MenuStatus::Animating);
    }

    #[test]
    fn close_while_closed_is_rejected() {
        let mut gate = StatusGate::new();
        assert!(gate.try_start(SequenceKind::Close));
        gate.settle(SequenceKind::Close);

        assert!(!gate.try_start(SequenceKind::Close));
        assert_eq!(gate.status(), MenuStatus::Closed);
    }
}
