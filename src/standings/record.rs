//! League table rows

use crate::types::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Points awarded for a loss
pub const POINTS_FOR_LOSS: u32 = 0;

/// One team's accumulated record in a league table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    /// Goals (soccer) or points (basketball) scored
    pub goals_for: u32,
    /// Goals or points conceded
    pub goals_against: u32,
    /// `goals_for - goals_against`, kept in sync on every update
    pub goal_difference: i64,
    /// Table points under the 3/1/0 policy
    pub points: u32,
}

impl StandingRecord {
    /// A zeroed record for a team that has not played yet
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Apply one finished match from this team's point of view
    pub fn record_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
                self.points += POINTS_FOR_LOSS;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }
    }

    /// True while no finished match has been applied
    pub fn is_untouched(&self) -> bool {
        self.played == 0
            && self.won == 0
            && self.drawn == 0
            && self.lost == 0
            && self.goals_for == 0
            && self.goals_against == 0
            && self.goal_difference == 0
            && self.points == 0
    }
}

impl From<&Team> for StandingRecord {
    fn from(team: &Team) -> Self {
        Self::new(team.id, team.name.clone())
    }
}
