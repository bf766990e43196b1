use serde::Serialize;

/// Unique identifier for a gift object within a round.
/// Ids are `0..GIFT_COUNT` and stable for the round's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub u32);

/// Lifecycle phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// Asset fetch outstanding; no objects exist yet.
    Loading,
    /// Round constructed, clicks accepted.
    Playing,
    /// Asset fetch failed; recoverable only via reset.
    Error,
}

/// Opaque handle to a generated image. The bridge passes data URLs through
/// unchanged; the core never inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageHandle(pub String);

impl ImageHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The two generated images a round needs. Both must be present before a
/// round is constructed; there is no partial delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetBundle {
    pub background: ImageHandle,
    pub prize: ImageHandle,
}

/// A sound event emitted by the session. The numeric value maps to a
/// game-defined sound in the presentation layer's sound manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// A consolation box was opened.
    pub const POP: SoundEvent = SoundEvent(1);
    /// The winning box was opened.
    pub const WIN: SoundEvent = SoundEvent(2);
}
