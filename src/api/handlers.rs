//! HTTP request handlers for the wage shortfall API.
//!
//! Every handler is stateless apart from the shared reference table: the
//! records to compute travel in the request body.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_manual;
use crate::error::EngineError;
use crate::export::{
    CSV_FILE_NAME, DOCUMENT_FILE_NAME, ShortfallTable, to_csv, to_markdown,
};
use crate::import::{ImportBatch, import_records};

use super::request::{CalculationRequest, ImportRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ReferenceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reference", get(reference_handler))
        .route("/import", post(import_handler))
        .route("/import/csv", post(import_csv_handler))
        .route("/calculate", post(calculate_handler))
        .route("/export/csv", post(export_csv_handler))
        .route("/export/markdown", post(export_markdown_handler))
        .with_state(state)
}

/// Handler for `GET /reference`.
async fn reference_handler(State(state): State<AppState>) -> Json<ReferenceResponse> {
    Json(ReferenceResponse::from(state.table()))
}

/// Handler for `POST /import`.
///
/// Validates the rows and, if they are clean, returns the computed table.
/// A rejected import returns 422 with every problem found.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing import request");

    let request: ImportRequest = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    import_response(&request.to_batch(), &state, correlation_id)
}

/// Handler for `POST /import/csv`.
///
/// The body is a CSV file with a header row. A body the CSV reader cannot
/// read (for example, one that is not UTF-8) returns 400.
async fn import_csv_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing CSV import request"
    );

    match ImportBatch::from_csv_reader(body.as_ref()) {
        Ok(batch) => import_response(&batch, &state, correlation_id),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn import_response(batch: &ImportBatch, state: &AppState, correlation_id: Uuid) -> Response {
    match import_records(batch, state.table()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                rows = batch.len(),
                total_deficit = summary.total_deficit,
                "Import completed successfully"
            );
            json_response(StatusCode::OK, CalculationResponse::from_summary(summary))
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for `POST /calculate`.
///
/// Computes manually entered rows. Duplicate rows are dropped, not rejected.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request: CalculationRequest = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match compute_manual(&request.entries, state.table()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                entries = request.entries.len(),
                total_deficit = summary.total_deficit,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, CalculationResponse::from_summary(summary))
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for `POST /export/csv`.
async fn export_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    render_export(state, payload, "text/csv; charset=utf-8", CSV_FILE_NAME, to_csv).await
}

/// Handler for `POST /export/markdown`.
async fn export_markdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    render_export(
        state,
        payload,
        "text/markdown; charset=utf-8",
        DOCUMENT_FILE_NAME,
        |table| Ok(to_markdown(table)),
    )
    .await
}

async fn render_export<F>(
    state: AppState,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    content_type: &'static str,
    file_name: &'static str,
    render: F,
) -> Response
where
    F: FnOnce(&ShortfallTable) -> Result<String, EngineError>,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, file_name, "Processing export request");

    let request: CalculationRequest = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rendered = compute_manual(&request.entries, state.table())
        .and_then(|summary| render(&ShortfallTable::from_summary(&summary)));

    match rendered {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                bytes = body.len(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(json_response(StatusCode::BAD_REQUEST, error))
        }
    }
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
