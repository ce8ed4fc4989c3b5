//! Player data structure.

use serde::{Deserialize, Serialize};

/// Identity of a player, unique within a tournament.
pub type PlayerId = u32;

/// Rating of a player. Only magnitudes of differences matter.
pub type Rank = i32;

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rank: Rank,
    /// Set while the player is placed in the round under construction.
    #[serde(default)]
    pub busy: bool,
}

impl Player {
    /// Create a free player.
    pub fn new(id: PlayerId, rank: Rank) -> Self {
        Self {
            id,
            rank,
            busy: false,
        }
    }

    /// Place the player in the round under construction.
    pub fn mark_busy(&mut self) {
        self.busy = true;
    }

    /// Free the player for the next search step or round.
    pub fn release(&mut self) {
        self.busy = false;
    }
}
