//! Postwright CLI binary.
//!
//! Command-line access to the studio pipeline:
//! - Generate a post for a platform/topic/tone combination
//! - Rewrite a saved post for a different audience
//! - Publish a saved post (direct to a Facebook Page, or manual handoff)
//! - List the Facebook Pages available to the connected account

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, run_generate, run_pages, run_publish, run_rewrite, run_schedule,
    };

    // Pick up GEMINI_API_KEY and friends from a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "info" };
    postwright_core::init_tracing(default_directive);

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Rewrite(args) => {
            run_rewrite(args).await?;
        }

        Commands::Schedule(args) => {
            run_schedule(args)?;
        }

        Commands::Publish(args) => {
            run_publish(args).await?;
        }

        Commands::Pages(args) => {
            run_pages(args).await?;
        }
    }

    Ok(())
}
