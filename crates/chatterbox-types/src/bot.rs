//! Bot kinds.
//!
//! Each kind owns one notification lane and one worker task. The kind is
//! used for lane bookkeeping and log labels only; worker behavior lives in
//! `chatterbox-core`.

use serde::{Deserialize, Serialize};

/// The fixed set of bots shipped with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    /// Replies with a templated echo of the original text.
    Echo,
    /// Draws a random rarity tier and posts the result.
    Gacha,
}

impl BotKind {
    /// Stable lowercase label for logs and lane names.
    pub fn label(&self) -> &'static str {
        match self {
            BotKind::Echo => "echo",
            BotKind::Gacha => "gacha",
        }
    }
}

impl std::fmt::Display for BotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
