//! Headless core of the find-the-gift holiday game.
//!
//! One round: ten gift boxes on a fixed 3-4-3 layout, each hiding a
//! consolation prize except a single uniformly chosen winner. The
//! [`Session`] state machine owns the whole lifecycle (loading → playing →
//! error, plus reset) and is driven entirely by the bridge: settle calls for
//! the asset fetch, click commands, and time ticks. Nothing here touches the
//! browser, so every behavior tests natively.

pub mod api;
pub mod bridge;
pub mod core;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::SessionConfig;
pub use api::session::Session;
pub use api::types::{AssetBundle, ImageHandle, ObjectId, RoundStatus, SoundEvent};
pub use bridge::snapshot::{ObjectSnapshot, SessionSnapshot};
pub use crate::core::catalog::{Consolation, CONSOLATIONS};
pub use crate::core::layout::{layout_for, stack_order, LayoutSlot, GIFT_COUNT};
pub use crate::core::rng::Rng;
pub use crate::core::round::{GiftObject, OpenOutcome, Round};
pub use crate::core::timer::Countdown;
pub use error::{AssetError, LayoutError};
