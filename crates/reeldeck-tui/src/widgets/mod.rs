mod featured;
mod nav_bar;
mod popup;
mod status_bar;
mod toolbar;
mod watching;

pub use featured::FeaturedWidget;
pub use nav_bar::NavBarWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use toolbar::ToolbarWidget;
pub use watching::WatchingWidget;
