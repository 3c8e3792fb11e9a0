pub mod resolver;
pub mod week_window;
