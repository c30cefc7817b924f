//! Login against the backend's JWT endpoint.

use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use super::http::{authorized, check};
use crate::config::api_url;
use crate::session::Session;
use crate::types::{AppError, AppResult, TokenResponse, User};

/// Exchange credentials for a token.
pub async fn get_jwt(email: &str, password: &str) -> AppResult<String> {
    let form = UrlSearchParams::new().map_err(|e| AppError::Network(format!("{:?}", e)))?;
    form.append("username", email);
    form.append("password", password);

    let response = Request::post(&api_url("auth/jwt/login"))
        .body(form)?
        .send()
        .await?;

    let token: TokenResponse = check(response).await.map_err(|e| match e {
        AppError::Http { status: 400, .. } => AppError::Validation("Invalid email or password".into()),
        other => other,
    })?
    .json()
    .await?;

    log::debug!("obtained {} token", token.token_type);
    Ok(token.access_token)
}

pub async fn get_user_info(token: &str) -> AppResult<User> {
    let response = authorized(Request::get(&api_url("users/me")), token)
        .send()
        .await?;
    Ok(check(response).await?.json().await?)
}

/// Full login: token, then the user it belongs to.
pub async fn login(email: &str, password: &str) -> AppResult<Session> {
    log::info!("Logging in {}", email);
    let token = get_jwt(email, password).await?;
    let user = get_user_info(&token).await?;
    Ok(Session { user, token })
}
