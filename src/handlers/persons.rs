//! Read endpoints for the person collection.
//!
//! Both handlers return 200 unconditionally: an unknown id and an empty
//! collection are surfaced as empty bodies, not as 404s.

use crate::dtos::PersonResponse;
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    body::{Body, Bytes},
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::stream::{self, Stream, StreamExt, TryStreamExt};

/// List every person as a streamed JSON array.
///
/// The response body is fed straight from the store's cursor; elements are
/// serialized one at a time as the client drains the connection, so the
/// collection is never buffered in memory.
pub async fn list_persons(State(state): State<AppState>) -> Result<Response, AppError> {
    metrics::counter!("persons_list_total").increment(1);

    let persons = state.store.all().await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json_array_body(persons.map_ok(PersonResponse::from)),
    )
        .into_response())
}

/// Fetch a single person by id.
///
/// An unknown id yields 200 with an empty body. A route matched without an
/// `id` parameter is a contract violation and fails the request internally.
pub async fn get_person(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Response, AppError> {
    metrics::counter!("persons_get_total").increment(1);

    let Path(id) = id.ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("id path parameter missing from matched route"))
    })?;

    tracing::debug!(id = %id, "Fetching person");

    match state.store.find_by_id(&id).await? {
        Some(person) => Ok(Json(PersonResponse::from(person)).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// Frame a stream of persons as one JSON array, a chunk per element.
///
/// An error from the stream is handed to the body as-is; hyper aborts the
/// connection mid-stream rather than closing the array.
fn json_array_body<S>(items: S) -> Body
where
    S: Stream<Item = Result<PersonResponse, AppError>> + Send + 'static,
{
    let elements = items.enumerate().map(|(index, item)| {
        let person = item?;
        let json = serde_json::to_vec(&person).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("failed to serialize person: {}", e))
        })?;

        let mut chunk = Vec::with_capacity(json.len() + 1);
        if index > 0 {
            chunk.push(b',');
        }
        chunk.extend_from_slice(&json);
        Ok(Bytes::from(chunk))
    });

    let framed = stream::once(async { Ok::<_, AppError>(Bytes::from_static(b"[")) })
        .chain(elements)
        .chain(stream::once(async { Ok(Bytes::from_static(b"]")) }));

    Body::from_stream(framed)
}
