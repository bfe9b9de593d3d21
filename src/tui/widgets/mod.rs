//! Widgets for the process dashboard.

mod dropdown;
mod header;
mod preview;
mod table;

pub use dropdown::render_dropdown;
pub use header::{render_advanced, render_footer, render_header};
pub use preview::{preview_lines, render_preview};
pub use table::render_table;
