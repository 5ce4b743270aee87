// src/error.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::infrastructure::web::fire_aqi_controller::FireAqiResponse;

#[derive(Error, Debug)]
pub enum FireSourceError {
    #[error("Reading fire data failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing fire data failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid fire data: {0}")]
    Invalid(String),
}

/// Anything that stops a fire/AQI report from being assembled.
#[derive(Error, Debug)]
pub enum ComputationFailure {
    #[error("Fire data unavailable: {0}")]
    FireSource(#[from] FireSourceError),
}

impl ResponseError for ComputationFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(FireAqiResponse::Error {
            message: self.to_string(),
        })
    }
}
