//! Top scorers aggregation

use crate::error::{Result, TournamentError};
use crate::types::{Match, MatchId, Player, PlayerId, PlayerStat, Sport, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of entries in a top scorers list
pub const DEFAULT_TOP_SCORERS_LIMIT: usize = 10;

/// One player's scoring total for a sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_name: String,
    /// Goals for soccer, points for basketball
    pub total: u64,
}

/// Read-only inputs for the aggregation
#[derive(Debug, Clone, Copy)]
pub struct ScorerSources<'a> {
    pub players: &'a [Player],
    pub teams: &'a [Team],
    pub matches: &'a [Match],
    pub stats: &'a [PlayerStat],
}

/// Sum each player's goals (soccer) or points (basketball) and rank them.
///
/// A stat line only counts if its player, the player's team and its match all
/// exist and the match belongs to `sport`. Missing counters count as zero.
/// Ties are broken by player name, then player id.
pub fn top_scorers(
    sources: ScorerSources<'_>,
    sport: Sport,
    limit: usize,
) -> Result<Vec<ScorerEntry>> {
    if !sport.has_league_table() {
        return Err(TournamentError::UnsupportedSport {
            sport,
            view: "top scorers".to_string(),
        }
        .into());
    }

    let players: HashMap<PlayerId, &Player> =
        sources.players.iter().map(|p| (p.id, p)).collect();
    let teams: HashMap<TeamId, &Team> = sources.teams.iter().map(|t| (t.id, t)).collect();
    let match_sports: HashMap<MatchId, Sport> =
        sources.matches.iter().map(|m| (m.id, m.sport)).collect();

    let mut totals: HashMap<PlayerId, ScorerEntry> = HashMap::new();

    for stat in sources.stats {
        if match_sports.get(&stat.match_id) != Some(&sport) {
            continue;
        }
        let Some(player) = players.get(&stat.player_id) else {
            continue;
        };
        let Some(team) = teams.get(&player.team_id) else {
            continue;
        };

        let value = u64::from(stat.scoring_value(sport).unwrap_or(0));
        totals
            .entry(player.id)
            .or_insert_with(|| ScorerEntry {
                player_id: player.id,
                player_name: player.name.clone(),
                team_name: team.name.clone(),
                total: 0,
            })
            .total += value;
    }

    let mut entries: Vec<ScorerEntry> = totals.into_values().collect();
    entries.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    entries.truncate(limit);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchStatus;
    use chrono::{TimeZone, Utc};

    struct World {
        players: Vec<Player>,
        teams: Vec<Team>,
        matches: Vec<Match>,
        stats: Vec<PlayerStat>,
    }

    impl World {
        fn sources(&self) -> ScorerSources<'_> {
            ScorerSources {
                players: &self.players,
                teams: &self.teams,
                matches: &self.matches,
                stats: &self.stats,
            }
        }
    }

    fn player(id: PlayerId, name: &str, team_id: TeamId) -> Player {
        Player {
            id,
            name: name.to_string(),
            team_id,
            jersey_number: None,
            position: None,
        }
    }

    fn stat(id: u32, player_id: PlayerId, match_id: MatchId, goals: Option<u32>, points: Option<u32>) -> PlayerStat {
        PlayerStat {
            id,
            player_id,
            match_id,
            goals,
            points,
            assists: None,
        }
    }

    fn world() -> World {
        let date = Utc.with_ymd_and_hms(2024, 2, 2, 19, 0, 0).unwrap();
        let make_match = |id, sport| Match {
            id,
            sport,
            home_team_id: 1,
            away_team_id: 2,
            match_date: date,
            venue: None,
            status: MatchStatus::Completed,
            home_score: Some(1),
            away_score: Some(0),
        };

        World {
            teams: vec![
                Team { id: 1, name: "Lions".to_string(), sport: Sport::Soccer, logo_url: None },
                Team { id: 2, name: "Tigers".to_string(), sport: Sport::Soccer, logo_url: None },
            ],
            players: vec![
                player(10, "Carla", 1),
                player(11, "Ana", 2),
                player(12, "Beto", 1),
                player(13, "Orphan", 77),
            ],
            matches: vec![make_match(100, Sport::Soccer), make_match(200, Sport::Basketball)],
            stats: vec![
                stat(1, 10, 100, Some(2), None),
                stat(2, 11, 100, Some(1), None),
                stat(3, 12, 100, None, None),
                stat(4, 11, 100, Some(1), None),
                stat(5, 10, 200, None, Some(30)),
                stat(6, 13, 100, Some(9), None),
                stat(7, 12, 999, Some(5), None),
            ],
        }
    }

    #[test]
    fn test_sums_goals_for_soccer() {
        let world = world();
        let scorers = top_scorers(world.sources(), Sport::Soccer, 10).unwrap();

        // Carla 2, Ana 2 (1 + 1), Beto 0; orphaned player and unknown match excluded
        let names: Vec<_> = scorers.iter().map(|s| s.player_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Carla", "Beto"]);
        assert_eq!(scorers[0].total, 2);
        assert_eq!(scorers[0].team_name, "Tigers");
        assert_eq!(scorers[2].total, 0);
    }

    #[test]
    fn test_sums_points_for_basketball() {
        let world = world();
        let scorers = top_scorers(world.sources(), Sport::Basketball, 10).unwrap();
        assert_eq!(scorers.len(), 1);
        assert_eq!(scorers[0].player_id, 10);
        assert_eq!(scorers[0].total, 30);
    }

    #[test]
    fn test_limit_truncates() {
        let world = world();
        let scorers = top_scorers(world.sources(), Sport::Soccer, 1).unwrap();
        assert_eq!(scorers.len(), 1);
        assert_eq!(scorers[0].player_name, "Ana");
    }

    #[test]
    fn test_cheerleading_is_rejected() {
        let world = world();
        let err = top_scorers(world.sources(), Sport::Cheerleading, 10).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::UnsupportedSport { .. })
        ));
    }
}
