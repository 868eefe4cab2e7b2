pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod runner;
pub mod shell;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
