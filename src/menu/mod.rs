//! The fan-fold menu: an ordered strip of slots that opens and closes by
//! folding items one at a time.
//!
//! The pieces are deliberately small and state-only where possible:
//! - [`MenuAdapter`] supplies slot visuals and restyles them on selection
//! - [`TransitionDriver`] animates one slot's rotation scalar at a time
//! - [`Sequencer`] walks the requested index range in traversal order
//! - [`StatusGate`] guards against redundant or re-entrant open/close requests
//! - [`SelectionState`] tracks the current and previous selected slot
//! - [`FanMenu`] owns all of the above and integrates with egui

mod adapter;
mod driver;
mod fan_menu;
mod selection;
mod sequencer;
mod slot;
mod status;

pub use adapter::{MenuAdapter, SlotStyle, SlotVisual};
pub use driver::{DriverTick, TransitionDriver};
pub use fan_menu::{FanMenu, MenuConfig, Orientation, SequenceObserver};
pub use selection::SelectionState;
pub use sequencer::{SequenceKind, Sequencer};
pub use slot::{Pivot, Slot, SlotProperty};
pub use status::{MenuStatus, StatusGate};
