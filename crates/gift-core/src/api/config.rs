/// Configuration for a session, provided by the bridge at startup.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seed for the session RNG. The bridge passes wall-clock time so every
    /// page load gets a fresh winner; tests pass fixed values.
    pub seed: u64,
    /// Delay in seconds between opening the winning box and the
    /// win-announcement signal, so the opening animation can finish first.
    pub win_announce_delay: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            win_announce_delay: 1.2,
        }
    }
}
