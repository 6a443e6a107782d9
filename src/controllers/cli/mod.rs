pub mod navigation_step;
pub mod render_command;
