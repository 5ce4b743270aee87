pub mod file_fire_source;
pub mod fixture_fire_source;
