//! ChainCheck core: pure state machine and view-model helpers for the demo
//! analysis page. No IO and no toolkit types live here.
pub mod content;
mod effect;
mod input;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use input::{InputMode, InputSelection, SelectedFile};
pub use msg::Msg;
pub use state::{AnalysisStatus, AnalysisTicket, AppState, DEFAULT_ANALYSIS_DELAY};
pub use update::update;
pub use view_model::{AnalyzeButtonView, AppViewModel};
