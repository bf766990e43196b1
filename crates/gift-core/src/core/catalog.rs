use crate::core::rng::Rng;

/// A consolation identity: what a non-winning box reveals when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consolation {
    pub glyph: &'static str,
    pub label: &'static str,
}

/// Fixed catalog of consolation prizes.
pub const CONSOLATIONS: [Consolation; 10] = [
    Consolation { glyph: "🧸", label: "温暖小熊" },
    Consolation { glyph: "🧦", label: "圣诞袜" },
    Consolation { glyph: "🍪", label: "姜饼人" },
    Consolation { glyph: "🍬", label: "甜甜糖果" },
    Consolation { glyph: "🔔", label: "幸运铃铛" },
    Consolation { glyph: "🧣", label: "暖暖围巾" },
    Consolation { glyph: "🦌", label: "小麋鹿" },
    Consolation { glyph: "☃️", label: "小雪人" },
    Consolation { glyph: "🕯️", label: "许愿蜡烛" },
    Consolation { glyph: "🧤", label: "毛绒手套" },
];

/// Sample one consolation uniformly, with replacement. Duplicates across a
/// round are allowed and expected.
pub fn sample(rng: &mut Rng) -> Consolation {
    CONSOLATIONS[rng.next_index(CONSOLATIONS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_gets_sampled_eventually() {
        let mut rng = Rng::new(11);
        let mut seen = [false; CONSOLATIONS.len()];
        for _ in 0..2_000 {
            let c = sample(&mut rng);
            let idx = CONSOLATIONS
                .iter()
                .position(|e| e == &c)
                .expect("sample must come from the catalog");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn labels_are_non_empty() {
        for c in &CONSOLATIONS {
            assert!(!c.glyph.is_empty());
            assert!(!c.label.is_empty());
        }
    }
}
