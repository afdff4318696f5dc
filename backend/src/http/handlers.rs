//! HTTP handlers for the REST API.
//!
//! Each handler resolves the dataset through the repository and hands the
//! shared booking set to the service layer. Analytics run on the blocking
//! pool since they are CPU-bound.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, Utc};

use super::dto::{
    DatasetListResponse, EarningsQuery, HealthResponse, LiveQuery, OccupancyQuery, RollingQuery,
    UploadQuery, UploadResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DriverId, DriverListData, DriverSpotlight, EarningsData, LiveData, OccupancyData,
    RollingOccupancyData,
};
use crate::db::repository::Dataset;
use crate::db::services::{self as db_services, DatasetRef};
use crate::services::{self, EarningsPeriod};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DEFAULT_UPLOAD_NAME: &str = "upload";

async fn resolve_dataset(state: &AppState, raw: &str) -> Result<Dataset, AppError> {
    let dataset_ref: DatasetRef = raw.parse()?;
    Ok(db_services::get_dataset(state.repository.as_ref(), dataset_ref).await?)
}

/// Run CPU-bound analytics off the async runtime.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Datasets
// =============================================================================

/// GET /v1/datasets
pub async fn list_datasets(State(state): State<AppState>) -> HandlerResult<DatasetListResponse> {
    let datasets = db_services::list_datasets(state.repository.as_ref()).await?;
    let total = datasets.len();
    Ok(Json(DatasetListResponse { datasets, total }))
}

/// POST /v1/datasets
///
/// The body is the raw export document. Responds `201` for a new dataset and
/// `200` when the identical document was already stored.
pub async fn upload_dataset(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: String,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let name = query
        .name
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());
    let dataset = run_blocking(move || Ok(db_services::prepare_export(&name, &body)?)).await?;
    let outcome = db_services::store_prepared(state.repository.as_ref(), dataset).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(UploadResponse {
            dataset: outcome.info,
            created: outcome.created,
        }),
    ))
}

// =============================================================================
// Occupancy
// =============================================================================

/// GET /v1/datasets/{dataset}/occupancy/daily
pub async fn get_daily_occupancy(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<OccupancyQuery>,
) -> HandlerResult<OccupancyData> {
    let dataset = resolve_dataset(&state, &dataset).await?;
    let driver_id = query.driver_id.map(DriverId::new);

    let data = run_blocking(move || {
        let daily = services::compute_daily_occupancy(&dataset.bookings.intervals(driver_id))?;
        let summary = services::summarize(&daily);
        Ok(OccupancyData {
            dataset_id: dataset.info.dataset_id,
            driver_id,
            daily,
            summary,
        })
    })
    .await?;

    Ok(Json(data))
}

/// GET /v1/datasets/{dataset}/occupancy/rolling
pub async fn get_rolling_occupancy(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<RollingQuery>,
) -> HandlerResult<RollingOccupancyData> {
    let windows = query
        .parse_windows()
        .map_err(AppError::BadRequest)?
        .unwrap_or_else(|| state.config.occupancy.default_windows.clone());
    let dataset = resolve_dataset(&state, &dataset).await?;
    let driver_id = query.driver_id.map(DriverId::new);

    let data = run_blocking(move || {
        let daily = services::compute_daily_occupancy(&dataset.bookings.intervals(driver_id))?;
        let series = services::rolling_occupancy_series(&daily, &windows)?;
        Ok(RollingOccupancyData {
            dataset_id: dataset.info.dataset_id,
            driver_id,
            series,
        })
    })
    .await?;

    Ok(Json(data))
}

// =============================================================================
// Drivers
// =============================================================================

/// GET /v1/datasets/{dataset}/drivers
pub async fn list_drivers(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
) -> HandlerResult<DriverListData> {
    let dataset = resolve_dataset(&state, &dataset).await?;

    let data = run_blocking(move || {
        Ok(DriverListData {
            dataset_id: dataset.info.dataset_id,
            drivers: services::driver_stats(&dataset.bookings),
        })
    })
    .await?;

    Ok(Json(data))
}

/// GET /v1/datasets/{dataset}/drivers/{driver_id}
pub async fn get_driver(
    State(state): State<AppState>,
    Path((dataset, driver_id)): Path<(String, i64)>,
) -> HandlerResult<DriverSpotlight> {
    let dataset = resolve_dataset(&state, &dataset).await?;

    let data = run_blocking(move || {
        Ok(services::driver_spotlight(
            &dataset.bookings,
            DriverId::new(driver_id),
        )?)
    })
    .await?;

    Ok(Json(data))
}

// =============================================================================
// Earnings & live view
// =============================================================================

/// GET /v1/datasets/{dataset}/earnings
pub async fn get_earnings(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<EarningsQuery>,
) -> HandlerResult<EarningsData> {
    let period: EarningsPeriod = match query.period.as_deref() {
        Some(raw) => raw.parse()?,
        None => EarningsPeriod::default(),
    };
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());
    let step = state.config.earnings.milestone_step;
    let dataset = resolve_dataset(&state, &dataset).await?;

    let data = run_blocking(move || {
        let points = services::earnings_points(&dataset.bookings);
        Ok(EarningsData {
            dataset_id: dataset.info.dataset_id,
            period,
            summary: services::earnings_summary(&points, today, step),
            buckets: services::earnings_by_period(&points, period),
        })
    })
    .await?;

    Ok(Json(data))
}

/// GET /v1/datasets/{dataset}/live
pub async fn get_live(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    Query(query): Query<LiveQuery>,
) -> HandlerResult<LiveData> {
    let dataset = resolve_dataset(&state, &dataset).await?;
    let now = Utc::now().fixed_offset();

    let bookings = services::live_bookings(&dataset.bookings, query.from, query.to, now)?;
    Ok(Json(LiveData {
        dataset_id: dataset.info.dataset_id,
        bookings,
    }))
}
