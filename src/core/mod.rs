pub mod animation;
pub mod ballistics;
pub mod config;
pub mod controls;
pub mod error;
pub mod frames;
pub mod modes;
pub mod plot;
pub mod scene;
pub mod session;
pub mod window;
