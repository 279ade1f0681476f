use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::ranks::{AroundArgs, PlayerRanksRequest, Ranks, RanksRequest};
use crate::models::scores::LimitArgs;
use crate::usecases::ranks;
use axum::Json;
use axum::extract::{Path, Query};

pub async fn top_ranks(
    ctx: RequestContext,
    Path(game): Path<String>,
    Query(args): Query<LimitArgs>,
) -> ServiceResponse<Ranks> {
    let request = RanksRequest::new(game, args)?;
    let ranks = ranks::fetch_top(&ctx, request).await?;
    Ok(Json(ranks))
}

pub async fn around_player(
    ctx: RequestContext,
    Path((game, player_id)): Path<(String, String)>,
    Query(args): Query<AroundArgs>,
) -> ServiceResponse<Ranks> {
    let request = PlayerRanksRequest::new(game, player_id, args)?;
    let ranks = ranks::fetch_around_player(&ctx, request).await?;
    Ok(Json(ranks))
}
