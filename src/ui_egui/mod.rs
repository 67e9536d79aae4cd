mod app;
pub mod theme;
mod views;

pub use app::HackathonApp;
