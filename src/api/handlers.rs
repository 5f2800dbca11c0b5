//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{DashboardQuery, ErrorResponse, SeriesQuery};
use crate::dashboard::{build_dashboard, localized_error};
use crate::error::DashError;
use crate::i18n::Locale;
use crate::series::{Aggregate, Measure, yearly_series};

/// Returns the full localized dashboard payload.
///
/// `GET /dashboard` → 200 + `Dashboard` JSON
/// `GET /dashboard?lang=id` → localized variant
/// Unknown `lang` → 400; data errors → 404/422 with a localized message.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let locale = match resolve_locale(&state, query.lang.as_deref()) {
        Ok(locale) => locale,
        Err(resp) => return Err(resp),
    };

    match state.cache.get_or_load(&state.data_path) {
        Ok(dataset) => Ok(Json(build_dashboard(&dataset, locale))),
        Err(e) => Err(data_error_response(locale, &e)),
    }
}

/// Returns per-bloc yearly series for one measure.
///
/// `GET /series?measure=fossil_share_energy` → 200 + series JSON (mean)
/// `GET /series?measure=fossil_fuel_consumption&agg=sum` → summed variant
/// Unknown measure or operator → 400.
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesQuery>,
) -> impl IntoResponse {
    let Some(measure) = Measure::parse(&query.measure) else {
        return Err(bad_request(format!(
            "unknown measure \"{}\"",
            query.measure
        )));
    };
    let aggregate = match query.agg.as_deref() {
        None => Aggregate::Mean,
        Some(name) => match Aggregate::parse(name) {
            Some(agg) => agg,
            None => {
                return Err(bad_request(format!(
                    "unknown aggregate \"{name}\", expected \"mean\" or \"sum\""
                )));
            }
        },
    };

    match state.cache.get_or_load(&state.data_path) {
        Ok(dataset) => Ok(Json(yearly_series(&dataset, measure, aggregate))),
        Err(e) => Err(data_error_response(state.default_locale, &e)),
    }
}

fn resolve_locale(
    state: &AppState,
    lang: Option<&str>,
) -> Result<Locale, (StatusCode, Json<ErrorResponse>)> {
    match lang {
        None => Ok(state.default_locale),
        Some(code) => Locale::parse(code).ok_or_else(|| {
            bad_request(format!("unknown locale \"{code}\", expected \"en\" or \"id\""))
        }),
    }
}

fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn data_error_response(locale: Locale, err: &DashError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        DashError::NotFound { .. } => StatusCode::NOT_FOUND,
        DashError::Schema { .. } | DashError::EmptyResult => StatusCode::UNPROCESSABLE_ENTITY,
        DashError::Csv(_) | DashError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: localized_error(locale, err),
        }),
    )
}
