// src/cli.rs
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "wildfire-aqi", about = "Serves wildfire progression and synthetic AQI data")]
pub struct Cli {
    /// Configuration file; defaults apply when it does not exist.
    #[structopt(short, long, default_value = "config.yml")]
    pub config: String,
}
