use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{
    auth::{RequirePassword, PASSWORD_HEADER},
    card::{generate_svg, RenderOptions, RenderQuery, Theme},
    constants::{uptime_secs, version::get_version},
    error::ApiError,
    models::{
        envelope::Envelope,
        quotes::{Quote, QuotePayload, DEFAULT_AUTHOR},
    },
    storage, Data,
};

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_NO_CACHE: &str = "no-cache";
/// Cards for a fixed id only change when the quote is edited.
pub const CACHE_ONE_DAY: &str = "public, max-age=86400";

/// A body sent without a JSON content type is read as empty, so it fails on the missing
/// text rather than on the header.
fn read_payload(
    payload: Result<Json<QuotePayload>, JsonRejection>,
) -> Result<QuotePayload, ApiError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(QuotePayload::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Ids that do not parse can never match a row, so they are reported as missing.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::NotFound)
}

fn svg_response(svg: String, cache_control: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, cache_control),
        ],
        svg,
    )
        .into_response()
}

#[tracing::instrument(skip_all)]
pub async fn index(State(data): State<Data>) -> Result<Json<Value>, ApiError> {
    let total = storage::count_quotes(&data.db).await.inspect_err(
        |e| tracing::error!(err = ?e, "an error occurred when counting quotes"),
    )?;

    let themes: Vec<&str> = Theme::ALL.iter().map(|theme| theme.name()).collect();

    Ok(Json(json!({
        "message": "Welcome to the Quotes API!",
        "endpoints": {
            "GET /quotes": "Get all quotes",
            "GET /quotes/:id": "Get a specific quote by ID",
            "GET /quotes/random": "Get a random quote",
            "GET /quotes/random/svg": "Get a random quote as SVG image",
            "GET /quotes/:id/svg": "Get a specific quote as SVG image",
            "POST /quotes": "Add a new quote (Protected - requires password)",
            "PUT /quotes/:id": "Update a quote by ID (Protected - requires password)",
            "DELETE /quotes/:id": "Delete a quote by ID (Protected - requires password)"
        },
        "svgOptions": {
            "themes": themes,
            "queryParams": "?theme=dark&width=800&height=400",
            "examples": [
                "/quotes/random/svg?theme=ocean",
                "/quotes/1/svg?theme=gradient&width=1200&height=600"
            ]
        },
        "authentication": {
            "note": "POST, PUT, and DELETE operations require authentication",
            "method": format!("Header: {PASSWORD_HEADER}: your_password")
        },
        "totalQuotes": total,
        "status": {
            "version": get_version(),
            "rust": rustc_version_runtime::version().to_string(),
            "uptime": uptime_secs()
        }
    })))
}

#[tracing::instrument(skip_all)]
pub async fn list_quotes(
    State(data): State<Data>,
) -> Result<Json<Envelope<Vec<Quote>>>, ApiError> {
    let quotes = storage::list_quotes(&data.db).await.inspect_err(
        |e| tracing::error!(err = ?e, "an error occurred when fetching quotes from database"),
    )?;
    let count = quotes.len();

    Ok(Json(Envelope::data(quotes).with_count(count)))
}

#[tracing::instrument(skip_all)]
pub async fn random_quote(
    State(data): State<Data>,
) -> Result<Json<Envelope<Quote>>, ApiError> {
    let quote = storage::random_quote(&data.db)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when fetching random quote"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::data(quote)))
}

#[tracing::instrument(skip(data))]
pub async fn get_quote(
    State(data): State<Data>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Quote>>, ApiError> {
    let id = parse_id(&id)?;
    let quote = storage::get_quote(&data.db, id)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, id, "an error occurred when fetching quote"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::data(quote)))
}

#[tracing::instrument(skip_all)]
pub async fn create_quote(
    _auth: RequirePassword,
    State(data): State<Data>,
    payload: Result<Json<QuotePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Quote>>), ApiError> {
    let payload = read_payload(payload)?;
    let text = payload.text().ok_or(ApiError::TextRequired)?;
    let author = payload.author().unwrap_or(DEFAULT_AUTHOR);

    let quote = storage::insert_quote(&data.db, text, author)
        .await
        .inspect_err(|e| {
            tracing::error!(err = ?e, text = %text, author = %author, "an error occurred when adding quote");
        })?;

    tracing::info!(id = quote.id, "added quote");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(quote).with_message("Quote added successfully")),
    ))
}

#[tracing::instrument(skip(data, _auth, payload))]
pub async fn update_quote(
    _auth: RequirePassword,
    State(data): State<Data>,
    Path(id): Path<String>,
    payload: Result<Json<QuotePayload>, JsonRejection>,
) -> Result<Json<Envelope<Quote>>, ApiError> {
    let payload = read_payload(payload)?;
    let text = payload.text().ok_or(ApiError::TextRequired)?;
    let id = parse_id(&id)?;

    let existing = storage::get_quote(&data.db, id)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, id, "an error occurred when fetching quote"))?
        .ok_or(ApiError::NotFound)?;

    let author = payload.author().unwrap_or(existing.author.as_str());

    let quote = storage::update_quote(&data.db, id, text, author)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, id, "an error occurred when updating quote"))?;

    tracing::info!(id, "updated quote");

    Ok(Json(
        Envelope::data(quote).with_message("Quote updated successfully"),
    ))
}

#[tracing::instrument(skip(data, _auth))]
pub async fn delete_quote(
    _auth: RequirePassword,
    State(data): State<Data>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Quote>>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = storage::delete_quote(&data.db, id)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, id, "an error occurred when deleting quote"))?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id, "deleted quote");

    Ok(Json(
        Envelope::data(deleted).with_message("Quote deleted successfully"),
    ))
}

#[tracing::instrument(skip(data))]
pub async fn random_quote_svg(
    State(data): State<Data>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let quote = storage::random_quote(&data.db)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when fetching random quote"))
        .map_err(ApiError::Render)?
        .ok_or(ApiError::NotFound)?;

    let svg = generate_svg(&quote, &RenderOptions::from(&RenderQuery::from_pairs(params)));

    Ok(svg_response(svg, CACHE_NO_CACHE))
}

#[tracing::instrument(skip(data))]
pub async fn quote_svg(
    State(data): State<Data>,
    Path(id): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let quote = storage::get_quote(&data.db, id)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, id, "an error occurred when fetching quote"))
        .map_err(ApiError::Render)?
        .ok_or(ApiError::NotFound)?;

    let svg = generate_svg(&quote, &RenderOptions::from(&RenderQuery::from_pairs(params)));

    Ok(svg_response(svg, CACHE_ONE_DAY))
}
