// src/domain/services/mod.rs
pub mod aqi_synthesis_service;
pub mod fire_aggregation_service;
