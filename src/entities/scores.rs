#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScoreRow {
    pub game: String,
    pub player_id: String,
    pub player_name: String,
    pub score: i64,
    pub timestamp: i64,
}

/// A single row of a game's ranking page. Position is not stored anywhere,
/// it is assigned when a page is turned into `Ranks`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RankRow {
    pub player_name: String,
    pub score: i64,
    pub timestamp: i64,
}
