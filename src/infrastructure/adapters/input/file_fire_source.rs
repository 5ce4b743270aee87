use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::from_reader;

use crate::application::ports::output::fire_event_port::FireEventSource;
use crate::domain::entities::fire_event::FireEvent;
use crate::error::FireSourceError;

/// Reads fire events from a YAML file on each request, so edits to the file
/// show up without a restart.
#[derive(Debug, Clone)]
pub struct FileFireEventSource {
    path: PathBuf,
}

impl FileFireEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_events(path: &Path) -> Result<Vec<FireEvent>, FireSourceError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let events: Vec<FireEvent> = from_reader(reader)?;

        if let Some(unnamed) = events.iter().position(|e| e.name.trim().is_empty()) {
            return Err(FireSourceError::Invalid(format!(
                "fire event #{} in {} has no name",
                unnamed + 1,
                path.display()
            )));
        }

        debug!("Loaded {} fire events from {}", events.len(), path.display());
        Ok(events)
    }
}

impl FireEventSource for FileFireEventSource {
    fn fire_events(&self) -> Result<Vec<FireEvent>, FireSourceError> {
        Self::load_events(&self.path)
    }
}
