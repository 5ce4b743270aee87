use actix_web::{web, HttpResponse};
use log::error;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::assemble_fire_aqi::FireAqiReport;
use crate::domain::entities::aqi_sample::AqiSample;
use crate::domain::entities::fire_observation::FlatFireObservation;
use crate::error::ComputationFailure;
use crate::setup::http_server::AppState;

/// Body of `/api/fire_aqi_data`, discriminated by its `status` field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FireAqiResponse {
    Success {
        fire_data: Vec<FlatFireObservation>,
        aqi_data: Vec<AqiSample>,
    },
    Error {
        message: String,
    },
}

impl From<FireAqiReport> for FireAqiResponse {
    fn from(report: FireAqiReport) -> Self {
        FireAqiResponse::Success {
            fire_data: report.fire_data,
            aqi_data: report.aqi_data,
        }
    }
}

pub async fn get_fire_aqi_data(state: web::Data<AppState>) -> Result<HttpResponse, ComputationFailure> {
    let report = state
        .use_cases
        .assemble_fire_aqi
        .execute()
        .inspect_err(|e| error!("Error in get_fire_aqi_data: {}", e))?;

    Ok(HttpResponse::Ok().json(FireAqiResponse::from(report)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/fire_aqi_data")
            .route(web::get().to(get_fire_aqi_data))
    );
}
