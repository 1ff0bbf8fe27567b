//! UI screens.

mod app;
pub(crate) mod manage_screen;

pub use app::App;
pub use manage_screen::{ManageScreen, ScreenAction};
