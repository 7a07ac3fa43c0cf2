//! Gacha bot: weighted random rarity draw.

use chatterbox_types::message::Message;

use super::Responder;

/// Rarity tiers and their draw weights (percent). Weights sum to 100.
const TIERS: [(&str, u32); 4] = [("N", 50), ("R", 30), ("SR", 15), ("SSR", 5)];

/// Draws a rarity tier when a client posts the `gacha` command.
///
/// The RNG is owned by the responder and can be seeded for reproducible
/// draws in tests.
#[derive(Debug)]
pub struct GachaResponder {
    rng: fastrand::Rng,
}

impl GachaResponder {
    /// Responder with an OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Responder with a fixed seed. Draw sequences are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Weighted draw over the rarity tiers.
    fn draw(&mut self) -> &'static str {
        let roll = self.rng.u32(0..100);
        let mut cumulative = 0;
        for (tier, weight) in TIERS {
            cumulative += weight;
            if roll < cumulative {
                return tier;
            }
        }
        // Weights sum to 100, so the loop always returns.
        unreachable!("gacha weights must sum to 100")
    }
}

impl Default for GachaResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder for GachaResponder {
    fn name(&self) -> &'static str {
        "gacha"
    }

    fn respond(&mut self, msg: &Message) -> Option<String> {
        if !msg.text.trim().eq_ignore_ascii_case("gacha") {
            return None;
        }
        Some(format!("[gacha] you drew {}", self.draw()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
