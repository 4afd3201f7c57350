//! Frame navigation: the button graph behind the `/api/frame/*` routes.

pub mod navigator;
pub mod screen;

pub use navigator::{parse_button_index, FrameButton, FrameDescriptor, FrameResponse, Navigator, Step};
pub use screen::ScreenId;
