use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::proposal_dto::{ProposalListResponse, ProposalResponse, SubmitProposalPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/public/jobs/{id}/proposals",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    request_body = SubmitProposalPayload,
    responses(
        (status = 201, description = "Proposal submitted", body = Json<ProposalResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SubmitProposalPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.get_by_id(&id)?;
    let proposal = state.proposal_service.submit(&job.id, payload);
    Ok((StatusCode::CREATED, Json(ProposalResponse::from(proposal))))
}

#[utoipa::path(
    get,
    path = "/api/public/jobs/{id}/proposals",
    params(
        ("id" = String, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Proposals for the job in submission order", body = Json<ProposalListResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn list_proposals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(&id)?;
    let items = state
        .proposal_service
        .list_for_job(&job.id)
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ProposalListResponse { items }))
}
