use crate::common::error::{ServiceResult, unexpected};
use crate::models::scores::{NewScore, PlayerScoreRequest, Score};
use crate::repositories::scores::ScoreStore;
use chrono::Utc;
use tracing::info;

pub async fn submit<S: ScoreStore>(
    store: &S,
    game: &str,
    player_id: &str,
    body: NewScore,
) -> ServiceResult<Score> {
    let timestamp = Utc::now().timestamp();
    let score = Score::new(game, player_id, body, timestamp)?;
    match store.put_score(&score).await {
        Ok(()) => {
            info!(
                "Recorded score {} for {} in {}",
                score.score, score.player_id, score.game
            );
            Ok(score)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_top<S: ScoreStore>(
    store: &S,
    request: PlayerScoreRequest,
) -> ServiceResult<Vec<Score>> {
    let rows = match store
        .top_player_scores(
            &request.request.game,
            &request.player_id,
            request.request.limit,
        )
        .await
    {
        Ok(rows) => rows,
        Err(e) => return unexpected(e),
    };
    Ok(rows.into_iter().map(Score::from).collect())
}
