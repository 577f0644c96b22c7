pub mod error;
pub mod mutate;
pub mod types;

pub use error::CatalogError;
pub use mutate::{add_event, delete_event, parse_points, rename_event, update_event_points};
pub use types::{EventCatalog, EventDefinition};
