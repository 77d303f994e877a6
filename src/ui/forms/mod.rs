//! Modal form overlays

mod entry_form;
mod field_renderer;
mod report_form;

pub use entry_form::draw as draw_entry_create;
pub use report_form::draw as draw_report_create;
