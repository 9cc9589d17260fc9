use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use maud::Markup;

use super::error::PageError;
use crate::app::AppState;
use crate::catalog::{self, ArtistPageData, Associations, PageData, SearchQuery};

type QueryPairs = Vec<(String, String)>;

/// First value for `key`, or `""` when absent. Repeated keys do not make a
/// request invalid.
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> &'a str {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let result = render_index(&state, params).await;
    respond(&state, result)
}

pub async fn artist(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Response {
    let result = render_artist(&state, params).await;
    respond(&state, result)
}

pub async fn method_not_allowed(State(state): State<Arc<AppState>>) -> Response {
    let mut response = respond(&state, Err(PageError::MethodNotAllowed));
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
    response
}

pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    respond(&state, Err(PageError::not_found("Page Not Found")))
}

async fn render_index(
    state: &AppState,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Markup, PageError> {
    let Query(params) = params.map_err(|_| PageError::bad_request("Invalid query string"))?;

    // Refuse oversized queries before any upstream traffic.
    let query = SearchQuery::parse(first_param(&params, "q"))?;
    let members = first_param(&params, "members");

    let artists = state.client.fetch_artists().await?;
    let associations = Associations::fetch(&state.client).await;
    let page = PageData::build(artists, &query, members, associations);

    tracing::debug!(
        query = %page.query,
        members = %page.members_filter,
        matches = page.artists.len(),
        "rendering listing"
    );

    Ok(state.renderer.index(&page))
}

async fn render_artist(
    state: &AppState,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Markup, PageError> {
    let Query(params) = params.map_err(|_| PageError::bad_request("Invalid query string"))?;

    let raw_id = first_param(&params, "id");
    if raw_id.is_empty() {
        return Err(PageError::bad_request("Missing artist id"));
    }
    let id: i64 = raw_id
        .parse()
        .map_err(|_| PageError::bad_request("Invalid artist id"))?;

    let artists = state.client.fetch_artists().await?;
    let artist =
        catalog::find_artist(artists, id).ok_or_else(|| PageError::not_found("Artist not found"))?;

    let associations = Associations::fetch(&state.client).await;
    let page = ArtistPageData::build(artist, &associations);

    Ok(state.renderer.artist(&page))
}

fn respond(state: &AppState, result: Result<Markup, PageError>) -> Response {
    match result {
        Ok(markup) => markup.into_response(),
        Err(err) => {
            let status = err.status();
            match &err {
                PageError::Upstream(cause) => {
                    tracing::error!(error = %cause, "artist collection unavailable");
                }
                other => tracing::debug!(status = status.as_u16(), reason = %other, "request rejected"),
            }
            (status, state.renderer.error(status, &err.to_string())).into_response()
        }
    }
}
