//! Integration tests for the StoryTime generation gateway

mod cli_commands;
mod config_integration;
mod http_api;
mod test_utils;
