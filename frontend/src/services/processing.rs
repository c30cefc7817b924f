//! Processing request endpoint.

use gloo_net::http::Request;

use super::http::{authorized, check};
use crate::config::api_url;
use crate::types::{AppResult, ProcessingRequest, ProcessingRequestCreate, ProcessingType};

/// Ask the backend to start a job on the given input assets.
pub async fn create_processing_request(
    processing_type: ProcessingType,
    user_id: &str,
    project_id: &str,
    input_assets_ids: Vec<String>,
    token: &str,
) -> AppResult<ProcessingRequest> {
    let body = ProcessingRequestCreate {
        request_type: processing_type.request_type().to_string(),
        user_id: user_id.to_string(),
        project_id: project_id.to_string(),
        input_assets_ids,
        output_assets_ids: Vec::new(),
    };

    let response = authorized(Request::post(&api_url("processing-requests/")), token)
        .json(&body)?
        .send()
        .await?;
    let created: ProcessingRequest = check(response).await?.json().await?;
    log::info!("Processing request {} is {}", created.id, created.status);
    Ok(created)
}
