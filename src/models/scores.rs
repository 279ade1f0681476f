use crate::common::error::{AppError, ServiceResult};
use crate::entities::scores::ScoreRow;
use serde::{Deserialize, Serialize};

pub const MAX_PLAYER_NAME_LENGTH: usize = 32;
pub const MAX_SCORES_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub game: String,
    pub score: i64,
    pub player_id: String,
    pub player_name: String,
    pub timestamp: i64,
}

/// Request body of a score submission. Game and player come from the path,
/// the timestamp is assigned server-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub score: i64,
    pub player_name: String,
}

impl Score {
    pub fn new(
        game: &str,
        player_id: &str,
        body: NewScore,
        timestamp: i64,
    ) -> ServiceResult<Score> {
        if body.score == 0 {
            return Err(AppError::ScoresInvalidScore);
        }
        let name_length = body.player_name.chars().count();
        if name_length == 0 || name_length > MAX_PLAYER_NAME_LENGTH {
            return Err(AppError::ScoresInvalidPlayerName);
        }

        Ok(Score {
            game: game.to_owned(),
            score: body.score,
            player_id: player_id.to_owned(),
            player_name: body.player_name,
            timestamp,
        })
    }
}

impl From<ScoreRow> for Score {
    fn from(row: ScoreRow) -> Self {
        Score {
            game: row.game,
            score: row.score,
            player_id: row.player_id,
            player_name: row.player_name,
            timestamp: row.timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LimitArgs {
    pub limit: u32,
}

#[derive(Debug)]
pub struct ScoreRequest {
    pub game: String,
    pub limit: u32,
}

impl ScoreRequest {
    pub fn new(game: String, args: LimitArgs) -> ServiceResult<Self> {
        if args.limit > MAX_SCORES_LIMIT {
            return Err(AppError::ScoresInvalidLimit);
        }
        Ok(ScoreRequest {
            game,
            limit: args.limit,
        })
    }
}

pub struct PlayerScoreRequest {
    pub request: ScoreRequest,
    pub player_id: String,
}

impl PlayerScoreRequest {
    pub fn new(game: String, player_id: String, args: LimitArgs) -> ServiceResult<Self> {
        let request = ScoreRequest::new(game, args)?;
        Ok(PlayerScoreRequest { request, player_id })
    }
}
