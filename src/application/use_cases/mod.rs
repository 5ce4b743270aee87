pub mod assemble_fire_aqi;
