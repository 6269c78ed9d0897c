pub mod screen;
pub mod session;

pub use screen::{Notification, TipScreen, UiEvent};
pub use session::run_session;
