//! Application layer - Use cases and orchestration

pub mod add_brag;
pub mod export_brags;
pub mod list_brags;

pub use add_brag::{AddBragService, AddRequest};
pub use export_brags::{ExportBragsService, ExportFormat};
pub use list_brags::{group_by_day, DayGroup, ListBragsService};
