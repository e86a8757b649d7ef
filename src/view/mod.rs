//! View module
//!
//! Server-side markup for the itinerary, rendered with askama templates.

pub mod event_form;

pub use event_form::render_event_form;
