//! Asset endpoints, including the multipart upload.

use futures::future::try_join_all;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::http::{authorized, check};
use crate::config::api_url;
use crate::types::{AppError, AppResult, Asset};
use crate::upload::UploadRequest;

pub async fn get_asset(asset_id: &str, token: &str) -> AppResult<Asset> {
    let response = authorized(Request::get(&api_url(&format!("assets/{}", asset_id))), token)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// Fetch every asset of a project, in `assets_ids` order.
pub async fn get_assets(assets_ids: &[String], token: &str) -> AppResult<Vec<Asset>> {
    try_join_all(assets_ids.iter().map(|id| get_asset(id, token))).await
}

/// Build the multipart body for an upload.
fn form_data(request: &UploadRequest<File>) -> AppResult<FormData> {
    let js_err = |e: wasm_bindgen::JsValue| AppError::Upload(format!("{:?}", e));

    let form = FormData::new().map_err(js_err)?;
    for (name, value) in request.text_fields() {
        form.append_with_str(name, &value).map_err(js_err)?;
    }
    for (slot, file) in &request.files {
        form.append_with_blob_and_filename(slot.field_name(), file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

/// Upload new assets to a project.
pub async fn upload_assets(project_id: &str, request: &UploadRequest<File>, token: &str) -> AppResult<()> {
    let form = form_data(request)?;

    log::info!(
        "Uploading {} ({} file(s)) to project {}",
        request.asset_type,
        request.files.len(),
        project_id
    );

    let url = api_url(&format!("projects/{}/assets", project_id));
    let response = authorized(Request::post(&url), token)
        .body(form)?
        .send()
        .await?;
    check(response).await?;
    Ok(())
}
