//! Imgsift core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, PageScan};
pub use state::{AppState, OperationState, FALLBACK_ARCHIVE_TOKEN};
pub use update::update;
pub use view_model::{display_name, AppViewModel, ImageCardView};
