use std::sync::Arc;

use axum::{
    Form,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::{
    articles::Article,
    auth::{current_user, sign_in, sign_out},
    error::AppError,
    flash,
    state::AppState,
    utils::{found, is_acceptable_upload},
    views::{self, LOGIN_FAILED, UPLOAD_FAILED, UPLOAD_SUCCEEDED},
};

pub const PORTFOLIO_PATH: &str = "/portfolio";
pub const LOGIN_PATH: &str = "/login";
pub const UPLOAD_FIELD: &str = "pdf_file";

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

pub async fn home_handler() -> Html<String> {
    Html(views::home())
}

pub async fn portfolio_handler(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let logged_in = current_user(&session).await?.is_some();
    let articles = state.articles.snapshot().await;
    let notices = flash::drain(&session).await?;

    Ok(Html(views::portfolio(logged_in, &articles, &notices)))
}

pub async fn login_form_handler() -> Html<String> {
    Html(views::login_form())
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if !state.credentials.verify(&form.username, &form.password) {
        warn!("Rejected login for {}", form.username);
        return Ok((StatusCode::OK, LOGIN_FAILED).into_response());
    }

    sign_in(&session, &form.username).await?;
    info!("{} logged in", form.username);

    Ok(found(PORTFOLIO_PATH))
}

pub async fn logout_handler(session: Session) -> Result<Response, AppError> {
    sign_out(&session).await?;

    Ok(found(PORTFOLIO_PATH))
}

pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let Some(username) = current_user(&session).await? else {
        return Ok(found(LOGIN_PATH));
    };

    let upload = match multipart {
        Ok(multipart) => match read_upload(multipart).await {
            Ok(upload) => upload,
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!("Upload from {username} exceeded the body limit: {e}");
                None
            }
            Err(e) => return Err(e.into()),
        },
        Err(rejection) => {
            warn!("Upload from {username} was not multipart: {rejection}");
            None
        }
    };

    match upload {
        Some(Upload { filename, bytes }) if is_acceptable_upload(&filename) => {
            let path = state.files.save(&filename, &bytes).await?;

            state
                .articles
                .append(Article {
                    filename,
                    author: username.clone(),
                })
                .await;

            info!(
                "{username} uploaded {} ({} bytes)",
                path.display(),
                bytes.len()
            );
            flash::push(&session, UPLOAD_SUCCEEDED).await?;
        }
        rejected => {
            let filename = rejected.map(|upload| upload.filename).unwrap_or_default();
            warn!("Rejected upload {filename:?} from {username}");
            flash::push(&session, UPLOAD_FAILED).await?;
        }
    }

    Ok(found(PORTFOLIO_PATH))
}

async fn read_upload(mut multipart: Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            return Ok(None);
        };
        let bytes = field.bytes().await?.to_vec();

        return Ok(Some(Upload { filename, bytes }));
    }

    Ok(None)
}
