//! Read-only view of the session for the presentation layer.
//!
//! The bridge serializes this to JSON once per change; the UI renders the
//! object list in the order given (already sorted by stack order) and never
//! mutates anything through it.

use serde::Serialize;

use crate::api::session::Session;
use crate::api::types::{AssetBundle, RoundStatus};
use crate::core::round::GiftObject;

#[derive(Debug, Clone, Serialize)]
pub struct ObjectSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub depth_scale: f32,
    pub stack_order: i32,
    pub is_winner: bool,
    pub is_open: bool,
    pub prize_glyph: &'static str,
    pub prize_label: &'static str,
    pub reveal_delay: f32,
}

impl From<&GiftObject> for ObjectSnapshot {
    fn from(o: &GiftObject) -> Self {
        Self {
            id: o.id.0,
            x: o.pos.x,
            y: o.pos.y,
            depth_scale: o.depth_scale,
            stack_order: o.stack_order,
            is_winner: o.is_winner,
            is_open: o.is_open,
            prize_glyph: o.prize_glyph,
            prize_label: o.prize_label,
            reveal_delay: o.reveal_delay,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub status: RoundStatus,
    /// Present only when status is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Present only when status is `Playing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<AssetBundle>,
    /// Render-ordered; empty unless status is `Playing`.
    pub objects: Vec<ObjectSnapshot>,
    pub win_announced: bool,
}

impl SessionSnapshot {
    pub fn capture(session: &Session) -> Self {
        let (assets, objects) = match session.round() {
            Some(round) => (
                Some(round.assets().clone()),
                round.objects().iter().map(ObjectSnapshot::from).collect(),
            ),
            None => (None, Vec::new()),
        };
        Self {
            status: session.status(),
            error_message: session.error_message().map(str::to_owned),
            assets,
            objects,
            win_announced: session.win_announced(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
