//! Project endpoints.

use gloo_net::http::Request;

use super::http::{authorized, check};
use crate::config::api_url;
use crate::types::{AppResult, Project};

pub async fn list_projects_for_user(user_id: &str, token: &str) -> AppResult<Vec<Project>> {
    let response = authorized(Request::get(&api_url("projects/")), token)
        .query([("user_id", user_id)])
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

pub async fn get_project(project_id: &str, token: &str) -> AppResult<Project> {
    let response = authorized(Request::get(&api_url(&format!("projects/{}", project_id))), token)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

pub async fn remove_asset_from_project(asset_id: &str, project_id: &str, token: &str) -> AppResult<()> {
    let url = api_url(&format!("projects/{}/assets/{}", project_id, asset_id));
    let response = authorized(Request::delete(&url), token).send().await?;
    check(response).await?;
    log::info!("Removed asset {} from project {}", asset_id, project_id);
    Ok(())
}
