//! Reusable UI components

mod button;
mod popup;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use popup::{centered_rect, render_popup_frame};
pub use toast::render_toast;
