pub mod commands;
pub mod config;
pub mod git;
pub mod logging;
pub mod models;
pub mod select;
pub mod share;
pub mod tui;
pub mod utils;
pub mod workflow;

/// ASCII art logo shown in the TUI header
pub const LOGO: &str = "\
 ┬ ┬┌─┐┬─┐┬┌─┌┬┐┬─┐┌─┐┌─┐
 ││││ │├┬┘├┴┐ │ ├┬┘├┤ ├┤
 └┴┘└─┘┴└─┴ ┴ ┴ ┴└─└─┘└─┘";
