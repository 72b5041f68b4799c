//! HTTP surface for the baro reporting API.
//!
//! Two read endpoints plus a health probe:
//!
//! - `GET /word_collection/rank?start_time&end_time&tag`
//! - `GET /word_collection/word_tags?start_time&end_time&search_word`
//! - `GET /` — health probe
//!
//! Handlers are thin: parse the window, call the [`Baro`] facade, map the
//! typed error onto a status code. All report semantics live below this
//! layer.

use std::convert::Infallible;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use baro::{Baro, BaroError};
use baro_core::window::TimeWindow;

/// Search word used when the mention query omits `search_word`, carried over
/// from the original service's documented default.
pub const DEFAULT_SEARCH_WORD: &str = "궃이";

// =============================================================================
// Request/Response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RankQuery {
    start_time: Option<String>,
    end_time: Option<String>,
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MentionQuery {
    start_time: Option<String>,
    end_time: Option<String>,
    search_word: Option<String>,
}

#[derive(Debug, Serialize)]
struct Detail {
    detail: String,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

// =============================================================================
// Routes
// =============================================================================

/// Build the full route tree over a shared [`Baro`] orchestrator.
pub fn routes(
    baro: Arc<Baro>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::json(&Health { status: "ok" }));

    let rank = warp::path("word_collection")
        .and(warp::path("rank"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<RankQuery>())
        .and(with_baro(baro.clone()))
        .and_then(handle_rank);

    let word_tags = warp::path("word_collection")
        .and(warp::path("word_tags"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<MentionQuery>())
        .and(with_baro(baro))
        .and_then(handle_word_tags);

    // Browser clients of the dashboard; GET only, this API has no write path.
    let cors = warp::cors()
        .allow_origins(vec![
            "http://localhost",
            "http://localhost:3000",
            "http://localhost:5173",
        ])
        .allow_methods(vec!["GET"]);

    health.or(rank).or(word_tags).with(cors)
}

fn with_baro(baro: Arc<Baro>) -> impl Filter<Extract = (Arc<Baro>,), Error = Infallible> + Clone {
    warp::any().map(move || baro.clone())
}

// =============================================================================
// Handlers
// =============================================================================

async fn handle_rank(query: RankQuery, baro: Arc<Baro>) -> Result<impl Reply, Infallible> {
    let window = match TimeWindow::parse(query.start_time.as_deref(), query.end_time.as_deref()) {
        Ok(w) => w,
        Err(e) => return Ok(error_response(&e)),
    };
    Ok(report_response(
        baro.rank(window, query.tag.as_deref()).await,
    ))
}

async fn handle_word_tags(query: MentionQuery, baro: Arc<Baro>) -> Result<impl Reply, Infallible> {
    let window = match TimeWindow::parse(query.start_time.as_deref(), query.end_time.as_deref()) {
        Ok(w) => w,
        Err(e) => return Ok(error_response(&e)),
    };
    let search_word = query.search_word.as_deref().unwrap_or(DEFAULT_SEARCH_WORD);
    Ok(report_response(baro.mentions(window, search_word).await))
}

// =============================================================================
// Status mapping
// =============================================================================

fn report_response<T: Serialize>(result: Result<Vec<T>, BaroError>) -> warp::reply::Response {
    match result {
        Ok(body) => {
            warp::reply::with_status(warp::reply::json(&body), StatusCode::OK).into_response()
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &BaroError) -> warp::reply::Response {
    match err {
        BaroError::NoData => {
            warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT).into_response()
        }
        BaroError::Connectivity { .. } => {
            warn!(error = %err, "record source unreachable");
            detail_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to connect to the database.",
            )
        }
        BaroError::InvalidArg(msg) => detail_response(StatusCode::UNPROCESSABLE_ENTITY, msg),
        BaroError::UnknownChannel { .. } | BaroError::Source { .. } => {
            warn!(error = %err, "record source contract violation");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn detail_response(status: StatusCode, message: &str) -> warp::reply::Response {
    let body = Detail {
        detail: message.to_string(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

// =============================================================================
// Tests
// =============================================================================
