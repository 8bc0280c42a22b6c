//! Job finder core: pure search state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, JobListing, Phase, SearchId};
pub use update::update;
pub use view_model::{
    AppViewModel, ContentView, JobCardView, LinkView, ERROR_HEADING, UNKNOWN_ERROR_MESSAGE,
};
