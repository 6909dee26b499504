// Library root: the UI-agnostic core of the xPT lookup client. Re-exports all
// modules so the terminal front-end and integration tests can reach them.

pub mod app;
pub mod client;
pub mod config;
pub mod form;
pub mod protocol;
pub mod season;
pub mod suggest;
