//! HTTP handler functions for the waste dashboard API.

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use waste_dashboard_dataset::export::to_csv_string;
use waste_dashboard_dataset_models::DateRange;
use waste_dashboard_server_models::{
    ApiError, ApiHealth, ApiSection, ExportQueryParams, ViewQueryParams,
};
use waste_dashboard_view::{ViewError, resolve_range, select, select_by_name};
use waste_dashboard_view_models::Section;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/sections`
///
/// Lists the dashboard sections in menu order.
pub async fn sections() -> HttpResponse {
    let sections: Vec<ApiSection> = Section::all()
        .iter()
        .copied()
        .map(ApiSection::from)
        .collect();

    HttpResponse::Ok().json(sections)
}

/// `GET /api/aggregates`
pub async fn aggregates(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.snapshot.aggregates())
}

/// `GET /api/view`
///
/// Computes one section's view. A missing `from` or `to` bound is filled
/// from the dataset span.
pub async fn view(
    state: web::Data<AppState>,
    params: web::Query<ViewQueryParams>,
) -> HttpResponse {
    let snapshot = &state.snapshot;
    let range = DateRange::from_bounds(params.from, params.to, snapshot.span());

    let result = match params.section.as_deref() {
        Some(name) => select_by_name(snapshot, name, range),
        None => select(snapshot, Section::default(), range),
    };

    match result {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(&e),
    }
}

/// `GET /api/export.csv`
///
/// Exports the records within the requested range as CSV.
pub async fn export_csv(
    state: web::Data<AppState>,
    params: web::Query<ExportQueryParams>,
) -> HttpResponse {
    let snapshot = &state.snapshot;
    let requested = DateRange::from_bounds(params.from, params.to, snapshot.span());

    let range = match resolve_range(snapshot.span(), requested) {
        Ok(range) => range,
        Err(e) => return error_response(&e),
    };

    match to_csv_string(snapshot.dataset().records_between(&range)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"waste_data.csv\"",
            ))
            .body(csv),
        Err(e) => {
            log::error!("Failed to export CSV: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to export CSV".to_string(),
            })
        }
    }
}

/// Turns a query string that fails to deserialize, such as a malformed
/// date, into the same JSON error body the handlers return.
#[must_use]
pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query for {}: {err}", req.path());
    let response = HttpResponse::BadRequest().json(ApiError {
        error: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}

fn error_response(e: &ViewError) -> HttpResponse {
    log::warn!("Rejected view request: {e}");
    HttpResponse::BadRequest().json(ApiError {
        error: e.to_string(),
    })
}
