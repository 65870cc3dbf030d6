use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use rand::seq::SliceRandom;
use serde::Deserialize;
use service::errors::ServiceError;
use service::quotes::{generator, Quote, QuotePatch, QuoteRepository};
use tracing::{error, warn};

use crate::errors::JsonApiError;
use crate::state::AppState;

const NOT_FOUND: &str = "Quote not found";

/// `POST /api/quotes` body; both keys are required.
#[derive(Debug, Deserialize)]
pub struct CreateQuoteBody {
    pub author: Option<String>,
    pub quote: Option<String>,
}

/// `PUT /api/quotes/:id` body; at least one key with a non-empty value.
#[derive(Debug, Deserialize)]
pub struct UpdateQuoteBody {
    pub author: Option<String>,
    pub quote: Option<String>,
}

impl UpdateQuoteBody {
    fn has_content(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.author) || filled(&self.quote)
    }
}

/// Non-integer ids can never match a quote.
fn quote_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, JsonApiError> {
    path.map(|Path(id)| id).map_err(|_| JsonApiError::not_found(NOT_FOUND))
}

fn store_failure(context: &'static str, e: ServiceError) -> JsonApiError {
    match &e {
        ServiceError::Validation(_) => warn!(error = %e, "{context}"),
        _ => error!(error = %e, "{context}"),
    }
    JsonApiError::internal(context)
}

#[utoipa::path(get, path = "/api/quotes", tag = "quotes", responses((status = 200, description = "All quotes", body = [crate::openapi::QuoteDoc])))]
pub async fn list_quotes(State(state): State<AppState>) -> Json<Vec<Quote>> {
    Json(state.quotes.list().await)
}

#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    tag = "quotes",
    params(("id" = u64, Path, description = "Quote id")),
    responses((status = 200, description = "OK", body = crate::openapi::QuoteDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc))
)]
pub async fn get_quote(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Quote>, JsonApiError> {
    let id = quote_id(path)?;
    state
        .quotes
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(NOT_FOUND))
}

#[utoipa::path(get, path = "/api/quotes/random", tag = "quotes", responses((status = 200, description = "OK", body = crate::openapi::QuoteDoc), (status = 404, description = "Empty collection", body = crate::openapi::ErrorDoc)))]
pub async fn random_quote(State(state): State<AppState>) -> Result<Json<Quote>, JsonApiError> {
    let quotes = state.quotes.list().await;
    let picked = quotes.choose(&mut rand::thread_rng()).cloned();
    picked
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("No quotes available"))
}

#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = "quotes",
    request_body = crate::openapi::CreateQuoteDoc,
    responses((status = 201, description = "Created", body = crate::openapi::QuoteDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc), (status = 500, description = "Rejected", body = crate::openapi::ErrorDoc))
)]
pub async fn create_quote(
    State(state): State<AppState>,
    body: Result<Json<CreateQuoteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Quote>), JsonApiError> {
    const MISSING: &str = "Missing 'author' or 'quote' in request body";
    let Ok(Json(body)) = body else {
        return Err(JsonApiError::bad_request(MISSING));
    };
    let (Some(author), Some(text)) = (body.author, body.quote) else {
        return Err(JsonApiError::bad_request(MISSING));
    };

    state
        .quotes
        .add(&author, &text)
        .await
        .map(|q| (StatusCode::CREATED, Json(q)))
        .map_err(|e| store_failure("Could not add quote", e))
}

#[utoipa::path(post, path = "/api/quotes/generate", tag = "quotes", responses((status = 201, description = "Created", body = crate::openapi::QuoteDoc), (status = 500, description = "Rejected", body = crate::openapi::ErrorDoc)))]
pub async fn generate_quote(State(state): State<AppState>) -> Result<(StatusCode, Json<Quote>), JsonApiError> {
    generator::generate_and_add(state.quotes.as_ref())
        .await
        .map(|q| (StatusCode::CREATED, Json(q)))
        .map_err(|e| store_failure("Failed to generate and add quote", e))
}

#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    tag = "quotes",
    params(("id" = u64, Path, description = "Quote id")),
    request_body = crate::openapi::UpdateQuoteDoc,
    responses((status = 200, description = "Updated", body = crate::openapi::QuoteDoc), (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc), (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc))
)]
pub async fn update_quote(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<UpdateQuoteBody>, JsonRejection>,
) -> Result<Json<Quote>, JsonApiError> {
    let id = quote_id(path)?;
    let Ok(Json(body)) = body else {
        return Err(JsonApiError::bad_request("No data provided for update"));
    };
    if !body.has_content() {
        return Err(JsonApiError::bad_request("No 'author' or 'quote' field provided for update"));
    }

    let patch = QuotePatch { author: body.author, quote: body.quote };
    match state.quotes.update(id, patch).await {
        Ok(Some(q)) => Ok(Json(q)),
        Ok(None) => Err(JsonApiError::not_found(NOT_FOUND)),
        Err(e) => Err(store_failure("Could not update quote", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    tag = "quotes",
    params(("id" = u64, Path, description = "Quote id")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc))
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let id = quote_id(path)?;
    match state.quotes.delete(id).await {
        Ok(true) => Ok(Json(Message::new("Quote deleted successfully"))),
        Ok(false) => Err(JsonApiError::not_found(NOT_FOUND)),
        Err(e) => Err(store_failure("Could not delete quote", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_needs_a_non_empty_field() {
        let body = |a: Option<&str>, q: Option<&str>| UpdateQuoteBody {
            author: a.map(String::from),
            quote: q.map(String::from),
        };
        assert!(!body(None, None).has_content());
        assert!(!body(Some(""), Some("")).has_content());
        assert!(body(Some("New"), None).has_content());
        assert!(body(Some(""), Some("text")).has_content());
    }
}
