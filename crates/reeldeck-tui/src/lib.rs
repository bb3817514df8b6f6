pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod poster;
pub mod scale;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::{App, Focus, Mode};
pub use event::{AppEvent, EventHandler, PosterLoadResult};
pub use input::{handle_key_event, handle_mouse_event, Action};
pub use keymap::Keymap;
pub use theme::Theme;
