use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error};

use crate::{
    dto::{DomainResponse, ErrorResponse},
    state::AppState,
};

pub async fn get_domain(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DomainResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.resolve_domain.execute(&name).await {
        Ok(record) => {
            debug!(domain = %name, "Domain lookup served");
            Ok(Json(DomainResponse::from_record(&record)))
        }
        Err(e) if e.is_client_error() => {
            debug!(domain = %name, reason = %e, "Rejected domain name");
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))))
        }
        Err(e) => {
            error!(domain = %name, error = %e, "Failed to resolve domain");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}
