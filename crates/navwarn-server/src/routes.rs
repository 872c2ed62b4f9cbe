//! HTTP routes.
//!
//! | Method | Path                               | Response                         |
//! |--------|------------------------------------|----------------------------------|
//! | GET    | `/api/s124/{messageId}?lang=xx`    | S-124 GML dataset of the message |
//! | GET    | `/api/s124/xsd/{name}`             | Schema document, verbatim        |

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use navwarn_s124::{GML_CONTENT_TYPE, MessageRepository, S124Service, XSD_CONTENT_TYPE};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;

/// Query of `GET /api/s124/{messageId}`.
#[derive(Debug, Deserialize)]
struct DatasetQuery {
    /// Output language; the configured default when absent.
    lang: Option<String>,
}

/// `GET /api/s124/{messageId}`: the message as an S-124 dataset.
async fn get_dataset<R: MessageRepository + 'static>(
    State(service): State<Arc<S124Service<R>>>,
    Path(message_id): Path<String>,
    Query(query): Query<DatasetQuery>,
) -> Result<Response, ApiError> {
    info!(message_id = %message_id, lang = ?query.lang, "dataset requested");
    let gml = service.generate(&message_id, query.lang.as_deref())?;
    Ok(([(header::CONTENT_TYPE, GML_CONTENT_TYPE)], gml).into_response())
}

/// `GET /api/s124/xsd/{name}`: a schema document.
async fn get_schema<R: MessageRepository + 'static>(
    State(service): State<Arc<S124Service<R>>>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let xsd = service.schema(&name)?;
    Ok(([(header::CONTENT_TYPE, XSD_CONTENT_TYPE)], xsd).into_response())
}

/// Build the router over `service`.
pub fn router<R: MessageRepository + 'static>(service: Arc<S124Service<R>>) -> Router {
    Router::new()
        .route("/api/s124/xsd/{name}", get(get_schema::<R>))
        .route("/api/s124/{message_id}", get(get_dataset::<R>))
        .with_state(service)
}
