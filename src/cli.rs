//! CLI domain: parse, route and output only.
//! The route table dispatches to the gateway and the HTTP surface.

mod output;
mod parse;
mod route;

pub use output::{format_status_json, format_status_text, map_error, OutputFormat};
pub use parse::{Cli, Commands};
pub use route::RunContext;
