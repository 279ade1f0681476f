use crate::api::RequestContext;
use crate::common::error::{AppError, ServiceResponse, ServiceResult};
use crate::models::scores::{LimitArgs, NewScore, PlayerScoreRequest, Score};
use crate::usecases::scores;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;

pub async fn put_score(
    ctx: RequestContext,
    Path((game, player_id)): Path<(String, String)>,
    body: Result<Json<NewScore>, JsonRejection>,
) -> ServiceResult<StatusCode> {
    let Json(body) = body.map_err(|_| AppError::DecodingRequestFailed)?;
    scores::submit(&ctx, &game, &player_id, body).await?;
    Ok(StatusCode::CREATED)
}

pub async fn top_player_scores(
    ctx: RequestContext,
    Path((game, player_id)): Path<(String, String)>,
    Query(args): Query<LimitArgs>,
) -> ServiceResponse<Vec<Score>> {
    let request = PlayerScoreRequest::new(game, player_id, args)?;
    let scores = scores::fetch_top(&ctx, request).await?;
    Ok(Json(scores))
}
