pub mod fire_aqi_controller;
