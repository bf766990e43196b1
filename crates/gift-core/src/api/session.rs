use crate::api::config::SessionConfig;
use crate::api::types::{AssetBundle, ImageHandle, ObjectId, RoundStatus, SoundEvent};
use crate::core::round::{OpenOutcome, Round};
use crate::core::rng::Rng;
use crate::core::timer::Countdown;
use crate::error::AssetError;

/// In-flight asset fetch: two independent slots settled separately by the
/// driver. The round is built only once both are filled.
#[derive(Debug, Default)]
struct PendingFetch {
    background: Option<ImageHandle>,
    prize: Option<ImageHandle>,
}

/// The whole round lifecycle in one owned state machine: status, the
/// current round, the in-flight asset fetch, the deferred win announcement,
/// and the session RNG.
///
/// The asset fetch itself is external; the session only exposes
/// generation-tagged settle points. A settle carrying a stale generation
/// (the driver answered a fetch that a reset has since superseded) is
/// discarded, so an old fetch can never corrupt a newer round.
pub struct Session {
    config: SessionConfig,
    rng: Rng,
    status: RoundStatus,
    round: Option<Round>,
    error_message: Option<String>,
    fetch: Option<PendingFetch>,
    generation: u64,
    win_timer: Option<Countdown>,
    win_announced: bool,
    sounds: Vec<SoundEvent>,
}

impl Session {
    /// Start a session. Begins in `Loading` with generation 0; the driver
    /// must settle the fetch to reach `Playing`.
    pub fn new(config: SessionConfig) -> Self {
        let rng = Rng::new(config.seed);
        let mut session = Self {
            config,
            rng,
            status: RoundStatus::Loading,
            round: None,
            error_message: None,
            fetch: None,
            generation: 0,
            win_timer: None,
            win_announced: false,
            sounds: Vec::new(),
        };
        session.begin_loading();
        session
    }

    /// Discard the current round wholesale (any status) and start loading a
    /// fresh one. Returns the new generation the driver must echo back when
    /// settling the fetch.
    pub fn reset(&mut self) -> u64 {
        self.generation += 1;
        self.begin_loading();
        self.generation
    }

    fn begin_loading(&mut self) {
        self.round = None;
        self.error_message = None;
        self.win_timer = None;
        self.win_announced = false;
        self.sounds.clear();
        self.fetch = Some(PendingFetch::default());
        self.status = RoundStatus::Loading;
        log::info!("session: loading round, generation {}", self.generation);
    }

    /// Settle the background image slot of the pending fetch.
    pub fn settle_background(&mut self, generation: u64, handle: ImageHandle) {
        if !self.fetch_is_current(generation) {
            return;
        }
        if let Some(fetch) = &mut self.fetch {
            fetch.background = Some(handle);
        }
        self.try_complete_fetch();
    }

    /// Settle the prize image slot of the pending fetch.
    pub fn settle_prize(&mut self, generation: u64, handle: ImageHandle) {
        if !self.fetch_is_current(generation) {
            return;
        }
        if let Some(fetch) = &mut self.fetch {
            fetch.prize = Some(handle);
        }
        self.try_complete_fetch();
    }

    /// Fail the pending fetch. Either image failing fails the whole round;
    /// there is no partial round and no lingering `Loading`.
    pub fn settle_failed(&mut self, generation: u64, error: AssetError) {
        if !self.fetch_is_current(generation) {
            return;
        }
        log::error!("session: {error}");
        self.fetch = None;
        self.round = None;
        self.error_message = Some(error.message().to_string());
        self.status = RoundStatus::Error;
    }

    fn fetch_is_current(&self, generation: u64) -> bool {
        if generation != self.generation || self.fetch.is_none() {
            log::warn!(
                "session: dropping stale fetch settle (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        true
    }

    fn try_complete_fetch(&mut self) {
        let ready = matches!(
            &self.fetch,
            Some(PendingFetch {
                background: Some(_),
                prize: Some(_),
            })
        );
        if !ready {
            return;
        }
        // Both slots filled; the matches! above guarantees the unwraps below.
        if let Some(PendingFetch {
            background: Some(background),
            prize: Some(prize),
        }) = self.fetch.take()
        {
            let assets = AssetBundle { background, prize };
            self.round = Some(Round::build(assets, &mut self.rng));
            self.status = RoundStatus::Playing;
            log::info!("session: round ready, generation {}", self.generation);
        }
    }

    /// Apply a click. No-op unless `Playing`; idempotent on open objects.
    /// The open transition is visible immediately; a winner click starts the
    /// announcement countdown instead of announcing right away, so the
    /// opening animation can finish first.
    pub fn handle_click(&mut self, id: ObjectId) {
        if self.status != RoundStatus::Playing {
            log::debug!("session: click ignored, status {:?}", self.status);
            return;
        }
        let Some(round) = &mut self.round else {
            return;
        };
        match round.open(id) {
            OpenOutcome::Opened { winner: true } => {
                self.sounds.push(SoundEvent::WIN);
                self.win_timer = Some(Countdown::new(self.config.win_announce_delay));
            }
            OpenOutcome::Opened { winner: false } => {
                self.sounds.push(SoundEvent::POP);
            }
            OpenOutcome::AlreadyOpen => {}
            OpenOutcome::UnknownId => {
                log::warn!("session: click on unknown object {id:?}");
            }
        }
    }

    /// Advance time. Drives the win-announcement countdown; nothing else in
    /// the session is time-dependent.
    pub fn tick(&mut self, dt: f32) {
        if let Some(timer) = &mut self.win_timer {
            if timer.tick(dt) {
                self.win_timer = None;
                self.win_announced = true;
                log::info!("session: win announced");
            }
        }
    }

    /// Hide the celebration again. The round stays `Playing`; remaining
    /// boxes can still be opened.
    pub fn dismiss_win(&mut self) {
        self.win_announced = false;
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// The current round; present exactly when status is `Playing`.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Human-readable failure message; present exactly when status is
    /// `Error`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the deferred win announcement has fired and not been
    /// dismissed.
    pub fn win_announced(&self) -> bool {
        self.win_announced
    }

    /// Drain sound events queued since the last call.
    pub fn take_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }
}
