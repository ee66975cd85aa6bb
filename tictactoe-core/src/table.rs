//! Precomputed score table
//!
//! Offline-built map covering every edge of both move DAGs (one per
//! starting mark). Keys are the 18-character concatenation of the
//! before-state and after-state cell strings; values are the plain
//! minimax score pair `[X-as-maximizer, O-as-maximizer]`.

use crate::ai::minimax;
use crate::error::{Error, Result};
use crate::game::{GameState, Move};
use crate::grid::Mark;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default artifact name
pub const DEFAULT_TABLE_FILENAME: &str = "precomputed_minimax.json";

/// Score pair indexed by maximizer: `[Cross, Naught]`
pub type ScorePair = [i32; 2];

/// Read-only lookup table of precomputed minimax scores
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    scores: FxHashMap<String, ScorePair>,
}

impl ScoreTable {
    /// Lookup key for a move: before cells + after cells
    pub fn key(mv: &Move) -> String {
        format!("{}{}", mv.before_state().grid(), mv.after_state().grid())
    }

    /// Score for `maximizer`, or `MissingKey` if this edge is not in the
    /// table (e.g. it was built for a different starting mark)
    pub fn score(&self, mv: &Move, maximizer: Mark) -> Result<i32> {
        let key = Self::key(mv);
        let pair = self
            .scores
            .get(&key)
            .ok_or(Error::MissingKey { key })?;
        Ok(match maximizer {
            Mark::Cross => pair[0],
            Mark::Naught => pair[1],
        })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Walk the full game tree for both starting marks and record the
    /// minimax score pair of every move. One-shot batch operation, not on
    /// any lookup path.
    pub fn precompute() -> Result<Self> {
        let mut scores = FxHashMap::default();
        for starting_mark in [Mark::Cross, Mark::Naught] {
            scan_tree(&mut scores, &GameState::initial(starting_mark))?;
        }
        tracing::debug!(entries = scores.len(), "precomputed minimax table");
        Ok(Self { scores })
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read score table {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)?;
        std::fs::write(path, content).map_err(|source| Error::Io {
            operation: format!("write score table {}", path.display()),
            source,
        })
    }
}

fn scan_tree(scores: &mut FxHashMap<String, ScorePair>, state: &GameState) -> Result<()> {
    for mv in state.possible_moves() {
        let pair = [
            minimax(&mv, Mark::Cross, false)?,
            minimax(&mv, Mark::Naught, false)?,
        ];
        scores.insert(ScoreTable::key(&mv), pair);
        scan_tree(scores, mv.after_state())?;
    }
    Ok(())
}
