//! Content widgets: the tab container and its building blocks

mod button;
mod tabs;
mod text_pane;

pub use button::Button;
pub use tabs::Tabs;
pub use text_pane::{SharedLines, TextPane};
