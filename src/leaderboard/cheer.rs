//! Cheerleading rankings view

use crate::types::{CheerleadingRanking, RankingId, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A ranking joined with its squad's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: RankingId,
    pub team_id: TeamId,
    pub team_name: String,
    pub rank: u32,
    pub score: Option<u32>,
    pub notes: Option<String>,
}

/// Join rankings with teams and order them by rank.
///
/// Rankings pointing at a team that no longer exists are dropped.
pub fn ranking_table(rankings: &[CheerleadingRanking], teams: &[Team]) -> Vec<RankingEntry> {
    let names: HashMap<TeamId, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();

    let mut entries: Vec<RankingEntry> = rankings
        .iter()
        .filter_map(|ranking| {
            names.get(&ranking.team_id).map(|name| RankingEntry {
                id: ranking.id,
                team_id: ranking.team_id,
                team_name: name.to_string(),
                rank: ranking.rank,
                score: ranking.score,
                notes: ranking.notes.clone(),
            })
        })
        .collect();

    entries.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.id.cmp(&b.id)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sport;

    fn squad(id: TeamId, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            sport: Sport::Cheerleading,
            logo_url: None,
        }
    }

    fn ranking(id: RankingId, team_id: TeamId, rank: u32) -> CheerleadingRanking {
        CheerleadingRanking {
            id,
            team_id,
            rank,
            score: Some(90 - rank),
            notes: None,
        }
    }

    #[test]
    fn test_orders_by_rank() {
        let teams = vec![squad(1, "Sparks"), squad(2, "Flyers"), squad(3, "Stars")];
        let rankings = vec![ranking(1, 1, 3), ranking(2, 2, 1), ranking(3, 3, 2)];

        let table = ranking_table(&rankings, &teams);
        let names: Vec<_> = table.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(names, vec!["Flyers", "Stars", "Sparks"]);
        assert_eq!(table[0].score, Some(89));
    }

    #[test]
    fn test_drops_rankings_without_team() {
        let teams = vec![squad(1, "Sparks")];
        let rankings = vec![ranking(1, 1, 2), ranking(2, 42, 1)];

        let table = ranking_table(&rankings, &teams);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].team_id, 1);
    }

    #[test]
    fn test_shared_rank_ordered_by_id() {
        let teams = vec![squad(1, "Sparks"), squad(2, "Flyers")];
        let rankings = vec![ranking(8, 2, 1), ranking(4, 1, 1)];

        let table = ranking_table(&rankings, &teams);
        assert_eq!(table[0].id, 4);
        assert_eq!(table[1].id, 8);
    }
}
