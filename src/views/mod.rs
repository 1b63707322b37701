pub mod app;
pub mod control_panel;

pub use app::render_app;
pub use control_panel::render_control_panel;
