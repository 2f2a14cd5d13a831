//! HTTP request handlers for the rota API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::rota::{build_day_rota, build_rota_range};

use super::request::{RotaRangeQuery, parse_date_param};
use super::response::{ApiError, ApiErrorResponse, RotaRangeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rota", get(rota_range_handler))
        .route("/rota/:date", get(day_rota_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Handler for `GET /rota/:date`.
async fn day_rota_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let raw_date = match path {
        Ok(Path(raw_date)) => raw_date,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Path rejected");
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )));
        }
    };

    info!(correlation_id = %correlation_id, date = %raw_date, "Received day rota request");

    let date = match parse_date_param(&raw_date) {
        Ok(date) => date,
        Err(error) => {
            warn!(correlation_id = %correlation_id, date = %raw_date, "Invalid date");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let now = state.now();
    let start_time = Instant::now();
    match build_day_rota(state.store(), state.config(), date, now).await {
        Ok(rota) => {
            info!(
                correlation_id = %correlation_id,
                date = %date,
                entries = rota.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Day rota completed successfully"
            );
            json_response(StatusCode::OK, rota)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Day rota failed");
            error_response(err.into())
        }
    }
}

/// Handler for `GET /rota?start_date=..&end_date=..`.
async fn rota_range_handler(
    State(state): State<AppState>,
    query: Result<Query<RotaRangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Query rejected");
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )));
        }
    };

    info!(
        correlation_id = %correlation_id,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "Received rota range request"
    );

    let (start, end) = match query.dates() {
        Ok(dates) => dates,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error.message, "Invalid range query");
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let now = state.now();
    let start_time = Instant::now();
    match build_rota_range(state.store(), state.config(), start, end, now).await {
        Ok(days) => {
            info!(
                correlation_id = %correlation_id,
                days = days.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Rota range completed successfully"
            );
            json_response(StatusCode::OK, RotaRangeResponse { days })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rota range failed");
            error_response(err.into())
        }
    }
}
