//! Presentation layer - Dioxus UI components and views

pub mod components;
pub mod messages;
pub mod services;
pub mod state;
pub mod views;

pub use services::Services;
