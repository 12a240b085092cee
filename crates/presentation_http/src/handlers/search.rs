//! Nearest-stop search handlers
//!
//! The form flow (GET / and POST /) always answers with a rendered page:
//! lookup failures become the user-visible unavailable sentence instead of
//! a 5xx. The JSON endpoint reports failures through proper status codes.

use axum::{
    Json,
    extract::{Form, Query, State},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use application::ApplicationError;
use application::services::message_formatter;
use domain::value_objects::WheelchairAccessibility;

use crate::error::ApiError;
use crate::state::AppState;

/// Form body for the place search
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Free-text place name or address
    pub place: String,
}

/// Query parameters for the JSON nearest-stop endpoint
#[derive(Debug, Deserialize)]
pub struct NearestStopParams {
    /// Free-text place name or address
    pub place: String,
}

/// JSON response for the nearest-stop endpoint
#[derive(Debug, Serialize)]
pub struct NearestStopResponse {
    /// The place as searched
    pub place: String,
    /// Name of the nearest stop, absent when none exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Wheelchair boarding status of the stop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<WheelchairAccessibility>,
    /// The user-facing sentence for this outcome
    pub message: String,
}

/// Serve the search form
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state
        .templates
        .render_index()
        .map(Html)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Handle a form submission and render the result page
///
/// POST /
#[instrument(skip(state), fields(place = %form.place))]
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let message = match state.stop_finder.find_stop_near(&form.place).await {
        Ok(stop) => message_formatter::nearest_stop_message(stop.as_ref()),
        Err(ApplicationError::NotFound(_)) => {
            message_formatter::place_not_found_message(&form.place)
        }
        Err(e) => {
            warn!(error = %e, "Nearest-stop lookup failed");
            message_formatter::unavailable_message()
        }
    };

    state
        .templates
        .render_result(&form.place, &message)
        .map(Html)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Look up the nearest stop as JSON
///
/// GET /v1/stops/nearest?place=...
#[instrument(skip(state), fields(place = %params.place))]
pub async fn nearest_stop(
    State(state): State<AppState>,
    Query(params): Query<NearestStopParams>,
) -> Result<Json<NearestStopResponse>, ApiError> {
    if params.place.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "place must not be empty".to_string(),
        ));
    }

    let stop = state
        .stop_finder
        .find_stop_near(&params.place)
        .await
        .map_err(map_lookup_error)?;

    let message = message_formatter::nearest_stop_message(stop.as_ref());
    let (station, accessibility) =
        stop.map_or((None, None), |s| (Some(s.name), Some(s.accessibility)));

    Ok(Json(NearestStopResponse {
        place: params.place,
        station,
        accessibility,
        message,
    }))
}

/// Map a lookup failure to an API error
fn map_lookup_error(err: ApplicationError) -> ApiError {
    match err {
        ApplicationError::NotFound(place) => {
            ApiError::NotFound(format!("No place found for \"{place}\""))
        }
        ApplicationError::RateLimited => ApiError::RateLimited,
        ApplicationError::ExternalService(e) => ApiError::ServiceUnavailable(e),
        ApplicationError::Configuration(e) | ApplicationError::Internal(e) => {
            ApiError::Internal(e)
        }
    }
}
