use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline;

#[derive(Serialize)]
pub struct ContactCreated {
    pub success: bool,
    pub id: Uuid,
    pub message: &'static str,
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ContactCreated>), AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let id = pipeline::run(state.store.as_ref(), content_type, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            success: true,
            id,
            message: "Contact saved successfully",
        }),
    ))
}
