//! Chat Upload Widget UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for `/upload` and `/chat`
//! - state.rs: WidgetState and its transitions
//! - view_model.rs: ChatUploadVm with RwSignals
//! - view.rs: Main component ChatUploadWidget

mod model;
mod state;
mod view;
mod view_model;

pub use state::{WidgetOptions, WidgetState};
pub use view::ChatUploadWidget;
pub use view_model::ChatUploadVm;
