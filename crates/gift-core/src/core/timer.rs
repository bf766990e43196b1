/// One-shot countdown for the deferred win announcement.
/// Owned by the session and simply dropped on reset, so a pending
/// announcement can never fire against a replaced round.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: f32,
    fired: bool,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
            fired: false,
        }
    }

    /// Advance by `dt` seconds. Returns true exactly once, on the tick that
    /// crosses zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.fired = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_the_full_duration() {
        let mut c = Countdown::new(1.2);
        assert!(!c.tick(0.5));
        assert!(!c.tick(0.5));
        assert!(c.tick(0.5));
    }

    #[test]
    fn fires_once() {
        let mut c = Countdown::new(0.1);
        assert!(c.tick(1.0));
        assert!(!c.tick(1.0));
        assert!(!c.tick(1.0));
    }

    #[test]
    fn zero_duration_fires_on_first_tick() {
        let mut c = Countdown::new(0.0);
        assert!(c.tick(0.0));
        assert!(!c.tick(1.0));
    }
}
