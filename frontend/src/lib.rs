pub mod api;

pub mod app;
pub use app::App;

pub mod pitch;
pub mod players;
pub mod svg;
