use gift_core::{AssetError, ImageHandle, ObjectId, Session, SessionConfig, SessionSnapshot};

/// Wraps the session for the wasm boundary: integer ids in, JSON snapshots
/// and flat sound-event ids out.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exports free
/// functions, because wasm-bindgen cannot export stateful generics cleanly.
pub struct SessionRunner {
    session: Session,
    /// Sound event ids drained on the most recent tick, for JS to replay.
    sound_buffer: Vec<u32>,
}

impl SessionRunner {
    pub fn new(seed: u64) -> Self {
        let config = SessionConfig {
            seed,
            ..SessionConfig::default()
        };
        Self {
            session: Session::new(config),
            sound_buffer: Vec::new(),
        }
    }

    /// Advance the session clock and collect sound events for JS.
    pub fn tick(&mut self, dt: f32) {
        self.session.tick(dt);
        self.sound_buffer.clear();
        self.sound_buffer
            .extend(self.session.take_sounds().iter().map(|s| s.0));
    }

    pub fn click(&mut self, id: u32) {
        self.session.handle_click(ObjectId(id));
    }

    /// Start over. Returns the new fetch generation JS must echo back.
    pub fn reset(&mut self) -> u64 {
        self.session.reset()
    }

    pub fn generation(&self) -> u64 {
        self.session.generation()
    }

    pub fn background_ready(&mut self, generation: u64, url: String) {
        self.session
            .settle_background(generation, ImageHandle(url));
    }

    pub fn prize_ready(&mut self, generation: u64, url: String) {
        self.session.settle_prize(generation, ImageHandle(url));
    }

    pub fn fetch_failed(&mut self, generation: u64, message: String) {
        self.session
            .settle_failed(generation, AssetError::generation_failed(message));
    }

    pub fn win_announced(&self) -> bool {
        self.session.win_announced()
    }

    pub fn dismiss_win(&mut self) {
        self.session.dismiss_win();
    }

    pub fn sound_events(&self) -> &[u32] {
        &self.sound_buffer
    }

    /// Serialize the current session view for the UI layer.
    pub fn snapshot_json(&self) -> String {
        match SessionSnapshot::capture(&self.session).to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("snapshot serialization failed: {err}");
                String::from("{}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gift_core::RoundStatus;

    fn playing_runner() -> SessionRunner {
        let mut runner = SessionRunner::new(21);
        let generation = runner.generation();
        runner.background_ready(generation, "data:bg".into());
        runner.prize_ready(generation, "data:prize".into());
        runner
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let runner = playing_runner();
        let json = runner.snapshot_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "playing");
        assert_eq!(value["objects"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn winner_click_surfaces_sound_and_announcement() {
        let mut runner = playing_runner();
        let winner = runner
            .session
            .round()
            .unwrap()
            .winner_id();

        runner.click(winner.0);
        runner.tick(0.0);
        assert_eq!(runner.sound_events(), &[gift_core::SoundEvent::WIN.0]);
        assert!(!runner.win_announced());

        runner.tick(1.3);
        assert!(runner.win_announced());
        // Sounds are per-tick; the next tick reports none.
        assert!(runner.sound_events().is_empty());
    }

    #[test]
    fn failure_then_reset_recovers() {
        let mut runner = SessionRunner::new(22);
        let generation = runner.generation();
        runner.fetch_failed(generation, "no network".into());
        assert_eq!(runner.session.status(), RoundStatus::Error);

        let next = runner.reset();
        runner.background_ready(next, "data:bg".into());
        runner.prize_ready(next, "data:prize".into());
        assert_eq!(runner.session.status(), RoundStatus::Playing);
    }
}
