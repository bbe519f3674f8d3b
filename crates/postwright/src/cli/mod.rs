//! CLI module.

pub mod commands;
mod generate;
mod publish;

pub use commands::{Cli, Commands};
pub use generate::{run_generate, run_rewrite, run_schedule};
pub use publish::{run_pages, run_publish};
