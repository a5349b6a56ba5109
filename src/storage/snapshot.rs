//! JSON snapshot of the tournament data
//!
//! Used to seed the in-memory store at startup and to export it again.

use crate::types::{CheerleadingRanking, Match, Player, PlayerStat, Team};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full contents of a tournament store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub player_stats: Vec<PlayerStat>,
    #[serde(default)]
    pub cheerleading_rankings: Vec<CheerleadingRanking>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse snapshot file {}", path.display()))
    }

    /// Write the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write snapshot file {}", path.display()))
    }
}
