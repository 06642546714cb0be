//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Local, NaiveTime};

use crate::domain::StationName;
use crate::resolver::resolve;
use crate::schedule::estimate_wait;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(plan_route))
        .route("/wait", get(wait_estimate))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations with coordinates, sorted by name.
async fn list_stations(State(state): State<AppState>) -> Result<Json<StationListResponse>, AppError> {
    let mut stations = Vec::new();
    for name in state.network.station_names() {
        let coord = state.network.coord(name).map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?;
        stations.push(StationEntry::new(name, coord));
    }

    Ok(Json(StationListResponse { stations }))
}

/// Parse and validate a station query parameter against the network.
///
/// Unknown stations are rejected here, before the resolver runs.
fn parse_station(state: &AppState, raw: &str) -> Result<StationName, AppError> {
    let station = StationName::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("invalid station {raw:?}: {e}"),
    })?;

    if !state.network.contains(&station) {
        return Err(AppError::BadRequest {
            message: format!("unknown station: {station}"),
        });
    }

    Ok(station)
}

/// Plan a route between two stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = parse_station(&state, &req.from)?;
    let to = parse_station(&state, &req.to)?;

    // No route is a valid outcome, reported with zero metrics.
    let response = match resolve(&state.network, &from, &to) {
        Some(result) => RouteResponse::from_result(&result),
        None => RouteResponse::no_route(),
    };

    Ok(Json(response))
}

/// Estimate the wait for the next departure.
///
/// Takes an optional `time=HH:MM` query parameter; otherwise uses the
/// local wall clock.
async fn wait_estimate(Query(req): Query<WaitRequest>) -> Result<Json<WaitResponse>, AppError> {
    let time = match &req.time {
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| AppError::BadRequest {
            message: format!("invalid time {raw:?}: expected HH:MM"),
        })?,
        None => Local::now().time(),
    };

    Ok(Json(WaitResponse::from_estimate(estimate_wait(time))))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::chennai;

    fn test_state() -> AppState {
        AppState::new(chennai().unwrap())
    }

    #[test]
    fn parse_station_accepts_known() {
        let state = test_state();
        let station = parse_station(&state, "Egmore").unwrap();
        assert_eq!(station.as_str(), "Egmore");
    }

    #[test]
    fn parse_station_rejects_unknown() {
        let state = test_state();
        let err = parse_station(&state, "Tambaram").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn parse_station_rejects_malformed() {
        let state = test_state();
        let err = parse_station(&state, " Egmore").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = parse_station(&state, "").unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn plan_route_handler_direct() {
        let state = test_state();
        let req = RouteRequest {
            from: "Wimco Nagar".to_string(),
            to: "Chennai Airport".to_string(),
        };

        let Json(response) = plan_route(State(state), Query(req)).await.unwrap();
        assert_eq!(response.label, "Direct (Blue Line)");
        assert_eq!(response.stops, 22);
        assert_eq!(response.fare, 50);
    }

    #[tokio::test]
    async fn plan_route_handler_rejects_unknown_station() {
        let state = test_state();
        let req = RouteRequest {
            from: "Wimco Nagar".to_string(),
            to: "Tambaram".to_string(),
        };

        let err = plan_route(State(state), Query(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn wait_handler_with_explicit_time() {
        let req = WaitRequest {
            time: Some("09:57".to_string()),
        };

        let Json(response) = wait_estimate(Query(req)).await.unwrap();
        assert_eq!(response.wait_minutes, 3);
        assert_eq!(response.status, "crowded");
    }

    #[tokio::test]
    async fn wait_handler_rejects_malformed_time() {
        let req = WaitRequest {
            time: Some("9pm".to_string()),
        };

        let err = wait_estimate(Query(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn station_list_is_sorted_and_complete() {
        let state = test_state();
        let Json(response) = list_stations(State(state)).await.unwrap();

        assert_eq!(response.stations.len(), 38);
        assert_eq!(response.stations[0].name, "AG-DMS");
        let names: Vec<&String> = response.stations.iter().map(|s| &s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
