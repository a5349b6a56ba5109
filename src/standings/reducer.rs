//! Match result reducer
//!
//! Folds a sport's match list into one running record per team. The reducer
//! never fails: matches that are not final, lack a score, or reference a team
//! outside the supplied list are classified and left out of the table.

use crate::standings::record::StandingRecord;
use crate::types::{Match, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// How a single match was treated by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Both teams' records were updated
    Applied,
    /// Status is not `completed`
    NotFinal,
    /// Completed but at least one score is missing
    MissingScore,
    /// Home or away team is not in the supplied team list
    UnknownTeam,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Applied => "applied",
            MatchOutcome::NotFinal => "not_final",
            MatchOutcome::MissingScore => "missing_score",
            MatchOutcome::UnknownTeam => "unknown_team",
        }
    }
}

/// Per-outcome match counts for one reduction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionSummary {
    pub applied: usize,
    pub not_final: usize,
    pub missing_score: usize,
    pub unknown_team: usize,
}

impl ReductionSummary {
    fn count(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Applied => self.applied += 1,
            MatchOutcome::NotFinal => self.not_final += 1,
            MatchOutcome::MissingScore => self.missing_score += 1,
            MatchOutcome::UnknownTeam => self.unknown_team += 1,
        }
    }

    /// Total matches that did not contribute
    pub fn skipped(&self) -> usize {
        self.not_final + self.missing_score + self.unknown_team
    }

    pub fn total(&self) -> usize {
        self.applied + self.skipped()
    }
}

/// Accumulates team records from match results
#[derive(Debug, Clone)]
pub struct MatchResultReducer {
    records: Vec<StandingRecord>,
    index: HashMap<TeamId, usize>,
    summary: ReductionSummary,
}

impl MatchResultReducer {
    /// Seed one zeroed record per team, in the order given.
    ///
    /// A repeated team id keeps its first record as the one matches update.
    pub fn new(teams: &[Team]) -> Self {
        let mut records = Vec::with_capacity(teams.len());
        let mut index = HashMap::with_capacity(teams.len());

        for team in teams {
            index.entry(team.id).or_insert(records.len());
            records.push(StandingRecord::from(team));
        }

        Self {
            records,
            index,
            summary: ReductionSummary::default(),
        }
    }

    /// Apply a single match, returning how it was treated
    pub fn apply(&mut self, game: &Match) -> MatchOutcome {
        let outcome = self.apply_inner(game);
        self.summary.count(outcome);
        outcome
    }

    fn apply_inner(&mut self, game: &Match) -> MatchOutcome {
        let Some((home_score, away_score)) = game.final_score() else {
            return if game.status == crate::types::MatchStatus::Completed {
                debug!("Match {} is completed but has no final score", game.id);
                MatchOutcome::MissingScore
            } else {
                MatchOutcome::NotFinal
            };
        };

        let (Some(&home), Some(&away)) = (
            self.index.get(&game.home_team_id),
            self.index.get(&game.away_team_id),
        ) else {
            warn!(
                "Match {} references unknown team (home: {}, away: {}), skipping",
                game.id, game.home_team_id, game.away_team_id
            );
            return MatchOutcome::UnknownTeam;
        };

        self.records[home].record_result(home_score, away_score);
        self.records[away].record_result(away_score, home_score);
        MatchOutcome::Applied
    }

    /// Apply every match in order
    pub fn apply_all<'a>(&mut self, matches: impl IntoIterator<Item = &'a Match>) {
        for game in matches {
            self.apply(game);
        }
    }

    pub fn summary(&self) -> ReductionSummary {
        self.summary
    }

    /// Look up the current record of a team
    pub fn record(&self, team_id: TeamId) -> Option<&StandingRecord> {
        self.index.get(&team_id).map(|&i| &self.records[i])
    }

    /// Consume the reducer, yielding records in seeding order
    pub fn finish(self) -> Reduction {
        Reduction {
            records: self.records,
            summary: self.summary,
        }
    }
}

/// Unsorted output of a reduction
#[derive(Debug, Clone)]
pub struct Reduction {
    pub records: Vec<StandingRecord>,
    pub summary: ReductionSummary,
}

/// Reduce a sport's matches into per-team records
pub fn reduce_matches(teams: &[Team], matches: &[Match]) -> Reduction {
    let mut reducer = MatchResultReducer::new(teams);
    reducer.apply_all(matches);
    reducer.finish()
}
