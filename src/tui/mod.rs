//! Terminal frontend for the simulated process dashboard.
//!
//! The interaction model is substrate-neutral: input (keys, mouse) is mapped
//! to `UiEvent`s, the controller applies the transitions, and the renderer
//! materializes the row model plus any open overlay into ratatui widgets.

mod app;
mod controller;
mod hit;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use controller::{
    Controller, ControllerConfig, DirectAction, SubscriptionRegion, Subscriptions, UiEvent,
};
pub use hit::{HitMap, Region};
pub use input::{InputResult, handle_key, handle_mouse};
pub use render::render;
pub use state::{InputMode, Overlay, ViewState};
