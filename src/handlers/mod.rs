pub mod admin;
pub mod query;

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    index::{IndexError, IndexHandle},
    models::DataConfig,
};

/// Application context passed to all handlers.
pub struct Ctx {
    pub index: IndexHandle,

    /// Dataset location and format, used for reloads.
    pub data_path: PathBuf,
    pub data: DataConfig,

    pub consts: Consts,
}

/// Application constants.
pub struct Consts {
    pub admin_username: String,
    pub admin_password: String,
    pub version: String,
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Map an index error to a response. Bad queries are the client's fault.
    pub fn from_index(err: IndexError) -> Self {
        let status = match err {
            IndexError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            IndexError::InvalidRecord { .. } | IndexError::EmptyDataset => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(err.to_string(), status)
    }
}

impl<E: std::fmt::Display> From<E> for ApiErr {
    fn from(err: E) -> Self {
        Self::new(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;
