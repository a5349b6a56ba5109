//! Common types used throughout the tournament service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for teams
pub type TeamId = u32;

/// Unique identifier for players
pub type PlayerId = u32;

/// Unique identifier for matches
pub type MatchId = u32;

/// Unique identifier for player stat lines
pub type StatId = u32;

/// Unique identifier for cheerleading ranking entries
pub type RankingId = u32;

/// Sport a team or match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Soccer,
    Basketball,
    Cheerleading,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Soccer, Sport::Basketball, Sport::Cheerleading];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Soccer => "soccer",
            Sport::Basketball => "basketball",
            Sport::Cheerleading => "cheerleading",
        }
    }

    /// Whether the sport is played as head-to-head matches with a league table.
    /// Cheerleading is judged and ranked manually instead.
    pub fn has_league_table(&self) -> bool {
        matches!(self, Sport::Soccer | Sport::Basketball)
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = crate::error::TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soccer" => Ok(Sport::Soccer),
            "basketball" => Ok(Sport::Basketball),
            "cheerleading" => Ok(Sport::Cheerleading),
            other => Err(crate::error::TournamentError::invalid_input(format!(
                "unknown sport '{}'",
                other
            ))),
        }
    }
}

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::InProgress => write!(f, "in_progress"),
            MatchStatus::Completed => write!(f, "completed"),
            MatchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A team registered for one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub sport: Sport,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A player on a team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    #[serde(default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

/// A fixture between two teams of the same sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub sport: Sport,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub match_date: DateTime<Utc>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl Match {
    /// The final score, if this match counts towards the table.
    ///
    /// Only `completed` matches with both scores recorded have one.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if self.status != MatchStatus::Completed {
            return None;
        }
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

/// Individual statistics for a player in one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub id: StatId,
    pub player_id: PlayerId,
    pub match_id: MatchId,
    /// Soccer goals
    #[serde(default)]
    pub goals: Option<u32>,
    /// Basketball points
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
}

impl PlayerStat {
    /// The scoring counter that matters for the given sport
    pub fn scoring_value(&self, sport: Sport) -> Option<u32> {
        match sport {
            Sport::Soccer => self.goals,
            Sport::Basketball => self.points,
            Sport::Cheerleading => None,
        }
    }
}

/// Manually entered placement of a cheerleading squad
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheerleadingRanking {
    pub id: RankingId,
    pub team_id: TeamId,
    pub rank: u32,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture(status: MatchStatus, home: Option<u32>, away: Option<u32>) -> Match {
        Match {
            id: 1,
            sport: Sport::Soccer,
            home_team_id: 1,
            away_team_id: 2,
            match_date: Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap(),
            venue: None,
            status,
            home_score: home,
            away_score: away,
        }
    }

    #[test]
    fn test_final_score_requires_completed_and_both_scores() {
        assert_eq!(
            fixture(MatchStatus::Completed, Some(3), Some(1)).final_score(),
            Some((3, 1))
        );
        assert_eq!(
            fixture(MatchStatus::Completed, None, Some(2)).final_score(),
            None
        );
        assert_eq!(
            fixture(MatchStatus::InProgress, Some(1), Some(0)).final_score(),
            None
        );
        assert_eq!(
            fixture(MatchStatus::Cancelled, Some(0), Some(0)).final_score(),
            None
        );
    }

    #[test]
    fn test_sport_parsing_and_display() {
        assert_eq!("soccer".parse::<Sport>().unwrap(), Sport::Soccer);
        assert_eq!(" Basketball ".parse::<Sport>().unwrap(), Sport::Basketball);
        assert!("hockey".parse::<Sport>().is_err());
        assert_eq!(Sport::Cheerleading.to_string(), "cheerleading");
        assert!(!Sport::Cheerleading.has_league_table());
    }

    #[test]
    fn test_match_serde_uses_snake_case_status() {
        let json = serde_json::to_value(fixture(MatchStatus::InProgress, None, None)).unwrap();
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["sport"], "soccer");

        let parsed: Match = serde_json::from_value(serde_json::json!({
            "id": 9,
            "sport": "basketball",
            "home_team_id": 3,
            "away_team_id": 4,
            "match_date": "2024-06-01T20:00:00Z"
        }))
        .unwrap();
        assert_eq!(parsed.status, MatchStatus::Scheduled);
        assert_eq!(parsed.home_score, None);
    }

    #[test]
    fn test_scoring_value_per_sport() {
        let stat = PlayerStat {
            id: 1,
            player_id: 1,
            match_id: 1,
            goals: Some(2),
            points: Some(17),
            assists: None,
        };
        assert_eq!(stat.scoring_value(Sport::Soccer), Some(2));
        assert_eq!(stat.scoring_value(Sport::Basketball), Some(17));
        assert_eq!(stat.scoring_value(Sport::Cheerleading), None);
    }
}
