use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::get;
use sqlx::{MySql, Pool};
use std::convert::Infallible;
use std::net::SocketAddr;
use tracing::info;

pub mod ranks;
pub mod scores;

pub struct RequestContext {
    pub db: Pool<MySql>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{game}/ranks", get(ranks::top_ranks))
        .route("/{game}/{player_id}/ranks", get(ranks::around_player))
        .route(
            "/{game}/{player_id}/scores",
            get(scores::top_player_scores).put(scores::put_score),
        )
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn index() -> &'static str {
    "Running leaderboard-service v0.1"
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<MySql> {
        &self.db
    }
}
