use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use shelfpick::{
    config::Config, models::Genre, render, services::HttpRecommendationProvider,
    RecommendationController,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with rendered results
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let provider = HttpRecommendationProvider::from_config(&config)
        .context("Failed to build recommendation service client")?;
    let controller = RecommendationController::new(Arc::new(provider));

    println!("📚 Find Your Next Favorite Book\n");
    print!("{}", render::genre_menu());
    print!("{}", render::render(&controller.current_state().await, &config.cover_base_url));

    let mut updates = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                let input = line.trim();
                match input {
                    "" => continue,
                    "quit" | "exit" => break,
                    "genres" => print!("{}", render::genre_menu()),
                    _ => match input.parse::<Genre>() {
                        Ok(genre) => {
                            drop(controller.select_genre(genre).await);
                        }
                        Err(()) => {
                            drop(controller.select_user(input).await);
                        }
                    },
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                print!("{}", render::render(&snapshot, &config.cover_base_url));
            }
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
