use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{dto::profile_dto::ProfileResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/public/freelancers/{address}",
    params(
        ("address" = String, Path, description = "Freelancer wallet address")
    ),
    responses(
        (status = 200, description = "Freelancer profile", body = Json<ProfileResponse>),
        (status = 404, description = "Freelancer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.get_by_address(&address)?;
    Ok(Json(ProfileResponse::from(profile)))
}
