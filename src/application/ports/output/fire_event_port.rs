/*

Fire Event Port

The port through which the application reads fire progression data. The
bundled fixture and the YAML file reader both sit behind it, and a live
satellite feed could replace either without changing how reports are
assembled.

*/

use std::sync::Arc;

use crate::domain::entities::fire_event::FireEvent;
use crate::error::FireSourceError;

pub trait FireEventSource: Send + Sync {
    /// All known fire events in a stable order.
    fn fire_events(&self) -> Result<Vec<FireEvent>, FireSourceError>;
}

impl<T: FireEventSource + ?Sized> FireEventSource for Arc<T> {
    fn fire_events(&self) -> Result<Vec<FireEvent>, FireSourceError> {
        (**self).fire_events()
    }
}

impl<T: FireEventSource + ?Sized> FireEventSource for Box<T> {
    fn fire_events(&self) -> Result<Vec<FireEvent>, FireSourceError> {
        (**self).fire_events()
    }
}
