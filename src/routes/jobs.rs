use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::job_dto::{
        CreateJobPayload, FilterOptionsResponse, JobListQuery, JobListResponse, JobResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/public/jobs",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search over title, description, and client"),
        ("category" = Option<String>, Query, description = "Exact category match"),
        ("payment_range" = Option<String>, Query, description = "Budget bucket id: under-500, 500-1000, 1000-5000, over-5000"),
        ("experience_level" = Option<String>, Query, description = "Exact experience level match")
    ),
    responses(
        (status = 200, description = "Jobs matching every active filter, in catalog order", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let result = state.job_service.search(query);
    Ok(Json(JobListResponse::from(result)))
}

#[utoipa::path(
    get,
    path = "/api/public/jobs/filters",
    responses(
        (status = 200, description = "Filter sidebar values derived from the catalog", body = Json<FilterOptionsResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_filter_options(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let options = state.job_service.filter_options();
    Ok(Json(FilterOptionsResponse::from(options)))
}

#[utoipa::path(
    get,
    path = "/api/public/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(&id)?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    post,
    path = "/api/public/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job posting created", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload);
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}
