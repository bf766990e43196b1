use glam::Vec2;

use crate::api::types::{AssetBundle, ObjectId};
use crate::core::catalog;
use crate::core::layout::{self, GIFT_COUNT};
use crate::core::rng::Rng;

/// Seconds of entrance stagger between consecutive gifts.
const REVEAL_STAGGER: f32 = 0.1;

/// One clickable gift in a round. Everything except `is_open` is immutable
/// once the round is built.
#[derive(Debug, Clone)]
pub struct GiftObject {
    pub id: ObjectId,
    /// Normalized position in percent units.
    pub pos: Vec2,
    pub depth_scale: f32,
    /// Render order; the round's object list is sorted ascending by this.
    pub stack_order: i32,
    pub is_winner: bool,
    /// Flips false → true exactly once, never back, for the round's lifetime.
    pub is_open: bool,
    pub prize_glyph: &'static str,
    pub prize_label: &'static str,
    /// Entrance stagger in seconds, deterministic per id.
    pub reveal_delay: f32,
}

/// Result of asking a round to open an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The object just transitioned closed → open.
    Opened { winner: bool },
    /// Already open; opening is idempotent and re-triggers nothing.
    AlreadyOpen,
    /// No object with that id in this round.
    UnknownId,
}

/// One complete play session's worth of gifts plus the generated assets.
#[derive(Debug, Clone)]
pub struct Round {
    objects: Vec<GiftObject>,
    assets: AssetBundle,
}

impl Round {
    /// Build a fresh round: a consolation identity per slot (sampled with
    /// replacement), exactly one uniformly chosen winner, objects sorted by
    /// stack order so callers can render the list as-is.
    pub fn build(assets: AssetBundle, rng: &mut Rng) -> Self {
        let slots = layout::table();
        let winner_index = rng.next_index(GIFT_COUNT);

        let mut objects: Vec<GiftObject> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let consolation = catalog::sample(rng);
                GiftObject {
                    id: ObjectId(i as u32),
                    pos: slot.pos,
                    depth_scale: slot.depth_scale,
                    stack_order: layout::stack_order(slot.pos.y),
                    is_winner: i == winner_index,
                    is_open: false,
                    prize_glyph: consolation.glyph,
                    prize_label: consolation.label,
                    reveal_delay: i as f32 * REVEAL_STAGGER,
                }
            })
            .collect();

        // Stable sort keeps left-to-right order within a row.
        objects.sort_by_key(|o| o.stack_order);

        log::debug!("round built: {} gifts", objects.len());
        Self { objects, assets }
    }

    /// Objects in render order (ascending stack order).
    pub fn objects(&self) -> &[GiftObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&GiftObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn assets(&self) -> &AssetBundle {
        &self.assets
    }

    /// Id of the winning gift.
    pub fn winner_id(&self) -> ObjectId {
        self.objects
            .iter()
            .find(|o| o.is_winner)
            .map(|o| o.id)
            // Round::build always flags exactly one winner.
            .unwrap_or(ObjectId(0))
    }

    /// Open an object. Replaces only that object's open flag; every other
    /// field and object is untouched.
    pub(crate) fn open(&mut self, id: ObjectId) -> OpenOutcome {
        match self.objects.iter_mut().find(|o| o.id == id) {
            None => OpenOutcome::UnknownId,
            Some(o) if o.is_open => OpenOutcome::AlreadyOpen,
            Some(o) => {
                o.is_open = true;
                OpenOutcome::Opened { winner: o.is_winner }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ImageHandle;

    fn test_assets() -> AssetBundle {
        AssetBundle {
            background: ImageHandle("data:bg".into()),
            prize: ImageHandle("data:prize".into()),
        }
    }

    #[test]
    fn exactly_one_winner() {
        let mut rng = Rng::new(1);
        for _ in 0..200 {
            let round = Round::build(test_assets(), &mut rng);
            let winners = round.objects().iter().filter(|o| o.is_winner).count();
            assert_eq!(winners, 1);
        }
    }

    #[test]
    fn ids_cover_the_range_exactly_once() {
        let mut rng = Rng::new(2);
        let round = Round::build(test_assets(), &mut rng);
        let mut seen = [false; GIFT_COUNT];
        for o in round.objects() {
            let idx = o.id.0 as usize;
            assert!(!seen[idx], "duplicate id {:?}", o.id);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn objects_are_render_ordered() {
        let mut rng = Rng::new(3);
        let round = Round::build(test_assets(), &mut rng);
        for pair in round.objects().windows(2) {
            assert!(pair[1].stack_order >= pair[0].stack_order);
            assert!(pair[1].pos.y >= pair[0].pos.y);
        }
    }

    #[test]
    fn reveal_delays_are_deterministic_per_id() {
        let mut rng = Rng::new(4);
        let round = Round::build(test_assets(), &mut rng);
        for o in round.objects() {
            let expected = o.id.0 as f32 * REVEAL_STAGGER;
            assert!((o.reveal_delay - expected).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn all_objects_start_closed() {
        let mut rng = Rng::new(5);
        let round = Round::build(test_assets(), &mut rng);
        assert!(round.objects().iter().all(|o| !o.is_open));
    }

    #[test]
    fn open_is_idempotent_and_reports_winner() {
        let mut rng = Rng::new(6);
        let mut round = Round::build(test_assets(), &mut rng);
        let winner = round.winner_id();

        assert_eq!(round.open(winner), OpenOutcome::Opened { winner: true });
        assert_eq!(round.open(winner), OpenOutcome::AlreadyOpen);
        assert_eq!(round.open(ObjectId(999)), OpenOutcome::UnknownId);
        assert!(round.get(winner).unwrap().is_open);
    }

    #[test]
    fn assets_are_attached() {
        let mut rng = Rng::new(7);
        let round = Round::build(test_assets(), &mut rng);
        assert_eq!(round.assets().background.as_str(), "data:bg");
        assert_eq!(round.assets().prize.as_str(), "data:prize");
    }

    /// Chi-square goodness-of-fit over the winner index, 10,000 rounds from
    /// one RNG stream. Critical value for 9 degrees of freedom at p = 0.001
    /// is 27.88; a uniform winner pick sits far below it.
    #[test]
    fn winner_distribution_is_uniform() {
        let mut rng = Rng::new(0xC0FFEE);
        const TRIALS: usize = 10_000;
        let mut counts = [0usize; GIFT_COUNT];
        for _ in 0..TRIALS {
            let round = Round::build(test_assets(), &mut rng);
            counts[round.winner_id().0 as usize] += 1;
        }

        let expected = TRIALS as f64 / GIFT_COUNT as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi2 < 27.88,
            "winner distribution not uniform: chi2 = {chi2:.2}, counts = {counts:?}"
        );
    }
}
