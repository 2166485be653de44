//! A floating-window workspace for the terminal.
//!
//! A [`window::Workspace`] owns a fixed set of windows, keeps them in a single
//! most-recently-focused-first stacking order, and routes pointer input so
//! windows can be focused, dragged by their title bar and resized from their
//! borders inside the canvas bounds. Each window body shows one
//! [`content::ContentDescriptor`] rendered by [`content::render_content`].

pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod content;
pub mod definitions;
pub mod drivers;
pub mod event_loop;
pub mod layout;
pub mod runner;
pub mod term_color;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
