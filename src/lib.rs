//! StoryTime: Story-Generation Gateway
//!
//! A guarded call-through to an external generative-text provider for the StoryTime
//! picture-book reading platform. The gateway validates the prompt, refuses to run
//! without a startup credential, and reports every failure as a typed error.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod provider;

pub use error::{ApiError, ErrorKind, GenerationError};
pub use gateway::{Client, GatewayState, GenerationGateway, GenerationResult, Prompt};
