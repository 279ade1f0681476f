use crate::common::error::{AppError, ServiceResult};
use crate::entities::scores::RankRow;
use crate::models::scores::LimitArgs;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const MAX_RANKS_LIMIT: u32 = 1000;
pub const MAX_AROUND: u32 = 500;

/// One positioned entry of a game's ranking. Derived on every read, never
/// stored. The player id is deliberately absent from the wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub position: usize,
    pub score: i64,
    pub player_name: String,
    pub timestamp: i64,
}

/// A game's ranking page, non-increasing by score from index 0. The sort
/// order comes from the store and is trusted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranks(Vec<Rank>);

impl Ranks {
    /// Positions a page of rows already sorted descending by score.
    /// The i-th row becomes rank i + 1.
    pub fn from_rows(rows: Vec<RankRow>) -> Ranks {
        Ranks(
            rows.into_iter()
                .enumerate()
                .map(|(i, row)| Rank {
                    position: i + 1,
                    score: row.score,
                    player_name: row.player_name,
                    timestamp: row.timestamp,
                })
                .collect(),
        )
    }

    /// Binary search for an entry with the given score.
    ///
    /// The sequence is sorted descending, so the usual bisection branches are
    /// mirrored: a probe greater than the target sends the search right, a
    /// smaller probe sends it left. With equal scores any of the tied indices
    /// may be returned.
    pub fn locate(&self, score: i64) -> Option<usize> {
        let mut low = 0;
        let mut high = self.0.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match self.0[mid].score.cmp(&score) {
                Ordering::Equal => return Some(mid),
                Ordering::Greater => low = mid + 1,
                Ordering::Less => high = mid,
            }
        }
        None
    }

    /// The contiguous slice of ranks within `around` of `index`, clipped at
    /// both ends. Never pads: near a boundary the window is simply shorter.
    pub fn around(&self, index: usize, around: usize) -> Ranks {
        if index >= self.0.len() {
            return Ranks::default();
        }
        let start = index.saturating_sub(around);
        let end = (index + around).min(self.0.len() - 1);
        Ranks(self.0[start..=end].to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rank> {
        self.0.iter()
    }
}

#[derive(Debug, Deserialize)]
pub struct AroundArgs {
    pub around: u32,
}

#[derive(Debug)]
pub struct RanksRequest {
    pub game: String,
    pub limit: u32,
}

impl RanksRequest {
    pub fn new(game: String, args: LimitArgs) -> ServiceResult<Self> {
        if args.limit > MAX_RANKS_LIMIT {
            return Err(AppError::RanksInvalidLimit);
        }
        Ok(RanksRequest {
            game,
            limit: args.limit,
        })
    }
}

#[derive(Debug)]
pub struct PlayerRanksRequest {
    pub game: String,
    pub player_id: String,
    pub around: u32,
}

impl PlayerRanksRequest {
    pub fn new(game: String, player_id: String, args: AroundArgs) -> ServiceResult<Self> {
        if args.around > MAX_AROUND {
            return Err(AppError::RanksInvalidAround);
        }
        Ok(PlayerRanksRequest {
            game,
            player_id,
            around: args.around,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(player_name: &str, score: i64) -> RankRow {
        RankRow {
            player_name: player_name.to_owned(),
            score,
            timestamp: 1700000000,
        }
    }

    fn ranks(scores: &[i64]) -> Ranks {
        Ranks::from_rows(
            scores
                .iter()
                .enumerate()
                .map(|(i, &score)| row(&format!("player-{i}"), score))
                .collect(),
        )
    }

    #[test]
    fn test_from_rows_assigns_one_based_positions() {
        let ranks = ranks(&[100, 50, 20, 10]);
        for (i, rank) in ranks.iter().enumerate() {
            assert_eq!(rank.position, i + 1);
        }
    }

    #[test]
    fn test_from_rows_preserves_order_and_fields() {
        let ranks = Ranks::from_rows(vec![row("annie", 100), row("bert", 50)]);
        let entries: Vec<_> = ranks.iter().collect();
        assert_eq!(entries[0].player_name, "annie");
        assert_eq!(entries[0].score, 100);
        assert_eq!(entries[1].player_name, "bert");
        assert_eq!(entries[1].score, 50);
        for pair in entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_from_rows_empty_input_yields_empty_ranks() {
        assert!(Ranks::from_rows(vec![]).is_empty());
    }

    #[test]
    fn test_locate_finds_every_entry() {
        let ranks = ranks(&[100, 50, 20, 10]);
        assert_eq!(ranks.locate(100), Some(0));
        assert_eq!(ranks.locate(50), Some(1));
        assert_eq!(ranks.locate(20), Some(2));
        assert_eq!(ranks.locate(10), Some(3));
    }

    #[test]
    fn test_locate_misses_are_none() {
        let ranks = ranks(&[100, 50, 20, 10]);
        assert_eq!(ranks.locate(999), None);
        assert_eq!(ranks.locate(60), None);
        assert_eq!(ranks.locate(1), None);
    }

    #[test]
    fn test_locate_on_empty_ranks() {
        assert_eq!(ranks(&[]).locate(0), None);
    }

    #[test]
    fn test_locate_single_entry() {
        let ranks = ranks(&[42]);
        assert_eq!(ranks.locate(42), Some(0));
        assert_eq!(ranks.locate(41), None);
        assert_eq!(ranks.locate(43), None);
    }

    #[test]
    fn test_locate_tied_scores_lands_on_some_tie() {
        let ranks = ranks(&[100, 50, 50, 50, 10]);
        let index = ranks.locate(50).expect("tied score should be found");
        assert!((1..=3).contains(&index));
    }

    #[test]
    fn test_around_clips_at_the_top() {
        let ranks = ranks(&[100, 50, 20, 10]);
        let window = ranks.around(0, 1);
        let scores: Vec<_> = window.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![100, 50]);
    }

    #[test]
    fn test_around_clips_at_both_ends() {
        let ranks = ranks(&[100, 50, 20, 10]);
        let window = ranks.around(1, 2);
        let scores: Vec<_> = window.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![100, 50, 20, 10]);
    }

    #[test]
    fn test_around_clips_at_the_bottom() {
        let ranks = ranks(&[100, 50, 20, 10]);
        let window = ranks.around(2, 1);
        let scores: Vec<_> = window.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![50, 20, 10]);
    }

    #[test]
    fn test_around_zero_radius_is_the_single_entry() {
        let ranks = ranks(&[100, 50, 20, 10]);
        let window = ranks.around(2, 0);
        let scores: Vec<_> = window.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![20]);
    }

    #[test]
    fn test_around_out_of_bounds_index_is_empty() {
        let ranks = ranks(&[100, 50, 20, 10]);
        assert!(ranks.around(4, 2).is_empty());
        assert!(Ranks::default().around(0, 1).is_empty());
    }

    #[test]
    fn test_around_preserves_original_positions() {
        let ranks = ranks(&[100, 50, 20, 10]);
        let window = ranks.around(2, 1);
        let positions: Vec<_> = window.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![2, 3, 4]);
    }

    #[test]
    fn test_ranks_request_limit_bounds() {
        assert!(RanksRequest::new("g".into(), LimitArgs { limit: 1000 }).is_ok());
        let result = RanksRequest::new("g".into(), LimitArgs { limit: 1001 });
        assert_eq!(result.unwrap_err(), AppError::RanksInvalidLimit);
    }

    #[test]
    fn test_player_ranks_request_around_bounds() {
        assert!(
            PlayerRanksRequest::new("g".into(), "p".into(), AroundArgs { around: 500 }).is_ok()
        );
        let result = PlayerRanksRequest::new("g".into(), "p".into(), AroundArgs { around: 501 });
        assert_eq!(result.unwrap_err(), AppError::RanksInvalidAround);
    }

    #[test]
    fn test_rank_serializes_without_player_id() {
        let ranks = Ranks::from_rows(vec![row("annie", 100)]);
        let json = serde_json::to_value(&ranks).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "position": 1,
                "score": 100,
                "playerName": "annie",
                "timestamp": 1700000000,
            }])
        );
    }
}
