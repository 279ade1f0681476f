use crate::common::context::Context;
use crate::entities::scores::{RankRow, ScoreRow};
use crate::models::scores::Score;
use async_trait::async_trait;

/// The most rank rows a single query will ever return. Rank reads are kept to
/// one page of data so that query cost and the in-memory ranking pass stay
/// bounded regardless of how many players a game has. A player below this
/// page is reported as unranked even though their score is stored.
pub const MAX_RANKS_PAGE: u32 = 1000;

const TABLE_NAME: &str = "scores";
const READ_FIELDS: &str = "game, player_id, player_name, score, timestamp";

/// The three storage operations the ranking code relies on. Both top queries
/// return rows sorted descending by score; ties are ordered oldest first so
/// repeated reads see the same order.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Upsert keyed by (player_id, game, score): resubmitting the same score
    /// value overwrites the stored name and timestamp instead of piling up
    /// duplicate attempts.
    async fn put_score(&self, score: &Score) -> anyhow::Result<()>;

    async fn top_player_scores(
        &self,
        game: &str,
        player_id: &str,
        limit: u32,
    ) -> anyhow::Result<Vec<ScoreRow>>;

    /// At most `min(limit, MAX_RANKS_PAGE)` rows; a limit of 0 means a full
    /// page.
    async fn top_ranks(&self, game: &str, limit: u32) -> anyhow::Result<Vec<RankRow>>;
}

#[async_trait]
impl<C: Context> ScoreStore for C {
    async fn put_score(&self, score: &Score) -> anyhow::Result<()> {
        create(self, score).await?;
        Ok(())
    }

    async fn top_player_scores(
        &self,
        game: &str,
        player_id: &str,
        limit: u32,
    ) -> anyhow::Result<Vec<ScoreRow>> {
        Ok(fetch_top_player_scores(self, game, player_id, limit).await?)
    }

    async fn top_ranks(&self, game: &str, limit: u32) -> anyhow::Result<Vec<RankRow>> {
        Ok(fetch_top_ranks(self, game, limit).await?)
    }
}

pub async fn create<C: Context>(ctx: &C, score: &Score) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "REPLACE INTO ",
        TABLE_NAME,
        " (",
        READ_FIELDS,
        ") VALUES (?, ?, ?, ?, ?)"
    );
    sqlx::query(QUERY)
        .bind(&score.game)
        .bind(&score.player_id)
        .bind(&score.player_name)
        .bind(score.score)
        .bind(score.timestamp)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn fetch_top_player_scores<C: Context>(
    ctx: &C,
    game: &str,
    player_id: &str,
    limit: u32,
) -> sqlx::Result<Vec<ScoreRow>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE player_id = ? AND game = ? ORDER BY score DESC, timestamp ASC LIMIT ?"
    );
    sqlx::query_as(QUERY)
        .bind(player_id)
        .bind(game)
        .bind(limit)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_top_ranks<C: Context>(
    ctx: &C,
    game: &str,
    limit: u32,
) -> sqlx::Result<Vec<RankRow>> {
    const QUERY: &str = const_str::concat!(
        "SELECT player_name, score, timestamp FROM ",
        TABLE_NAME,
        " WHERE game = ? ORDER BY score DESC, timestamp ASC LIMIT ?"
    );
    let limit = match limit {
        0 => MAX_RANKS_PAGE,
        n => n.min(MAX_RANKS_PAGE),
    };
    sqlx::query_as(QUERY)
        .bind(game)
        .bind(limit)
        .fetch_all(ctx.db())
        .await
}
