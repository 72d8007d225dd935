// ABOUTME: Library crate for Flagdeck exposing the toast manager, API clients, and TUI for testing

pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod toast;
