//! HTTP API handlers for amyarc-ar

pub mod analyses;
pub mod audio;
pub mod health;

pub use analyses::{get_analysis, list_analyses};
pub use audio::get_audio;
pub use health::health_routes;
