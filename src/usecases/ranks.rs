use crate::common::error::{ServiceResult, unexpected};
use crate::models::ranks::{PlayerRanksRequest, Ranks, RanksRequest};
use crate::repositories::scores::{MAX_RANKS_PAGE, ScoreStore};

pub async fn fetch_top<S: ScoreStore>(store: &S, request: RanksRequest) -> ServiceResult<Ranks> {
    match store.top_ranks(&request.game, request.limit).await {
        Ok(rows) => Ok(Ranks::from_rows(rows)),
        Err(e) => unexpected(e),
    }
}

/// The window of ranks surrounding a player's best score.
///
/// A player with no recorded score, or whose score sits below the top page,
/// gets an empty window rather than an error.
pub async fn fetch_around_player<S: ScoreStore>(
    store: &S,
    request: PlayerRanksRequest,
) -> ServiceResult<Ranks> {
    let player_scores = match store
        .top_player_scores(&request.game, &request.player_id, 1)
        .await
    {
        Ok(scores) => scores,
        Err(e) => return unexpected(e),
    };
    let best_score = match player_scores.first() {
        Some(row) => row.score,
        None => return Ok(Ranks::default()),
    };

    let rows = store.top_ranks(&request.game, MAX_RANKS_PAGE).await?;
    let ranks = Ranks::from_rows(rows);

    match ranks.locate(best_score) {
        Some(index) => Ok(ranks.around(index, request.around as usize)),
        None => Ok(Ranks::default()),
    }
}
