//! TerraWatch social feed CLI
//!
//! Thin shell over the core services: parse a command, run it against the
//! backend, render the result to stdout.

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use terrawatch_core::adapters::http::HttpSocialApi;
use terrawatch_core::app::{
    CommentService, DirectoryService, FeedLoad, FeedService, InteractionService, PostingService,
};
use terrawatch_core::config::Config;
use terrawatch_core::feed::renderer;

mod commands;

use commands::{help_text, parse_command, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args)?;

    if command == Command::Help {
        print!("{}", help_text());
        return Ok(());
    }

    let config = Config::from_env().context("loading configuration")?;
    let api = Arc::new(HttpSocialApi::new(
        config.api_url.clone(),
        config.api_token.clone(),
    ));

    let directory = DirectoryService::new(Arc::clone(&api));
    let comments = CommentService::new(Arc::clone(&api));
    let interactions = InteractionService::new(Arc::clone(&api));

    match command {
        Command::Feed { execution_sheet_id } => {
            let feed = FeedService::new(Arc::clone(&api));
            directory.load().await;
            match feed
                .load_feed(execution_sheet_id.as_deref(), config.feed_limit)
                .await
            {
                FeedLoad::Loaded(posts) => {
                    print!("{}", renderer::render_feed(&posts, &directory, Utc::now()));
                }
                FeedLoad::Superseded => {
                    // Single load per invocation, this cannot happen here.
                    tracing::warn!("feed load superseded");
                }
            }
        }

        Command::Comments { post_id } => {
            directory.load().await;
            let threads = comments.load_threads(&post_id).await?;
            print!(
                "{}",
                renderer::render_comment_threads(&threads, &directory, Utc::now())
            );
        }

        Command::Like { target } => {
            let state = interactions.toggle_post_like(&target).await?;
            print_like_state(&state);
        }

        Command::LikeComment { comment_id } => {
            let state = interactions.toggle_comment_like(&comment_id).await?;
            print_like_state(&state);
        }

        Command::Comment { post_id, content } => {
            directory.load().await;
            let threads = comments.submit_comment(&post_id, &content).await?;
            print!(
                "{}",
                renderer::render_comment_threads(&threads, &directory, Utc::now())
            );
        }

        Command::Reply {
            post_id,
            parent_comment_id,
            content,
        } => {
            directory.load().await;
            let threads = comments
                .submit_reply(&post_id, &parent_comment_id, &content)
                .await?;
            print!(
                "{}",
                renderer::render_comment_threads(&threads, &directory, Utc::now())
            );
        }

        Command::Post {
            execution_sheet_id,
            content,
        } => {
            let posting = PostingService::new(Arc::clone(&api));
            posting.submit_text_post(&execution_sheet_id, &content).await?;
            println!("Posted to {execution_sheet_id}.");
        }

        Command::Activity {
            execution_sheet_id,
            operation_code,
            added_progress,
            description,
        } => {
            let posting = PostingService::new(Arc::clone(&api));
            let receipt = posting
                .submit_activity_post(
                    &execution_sheet_id,
                    &operation_code,
                    added_progress,
                    &description,
                )
                .await?;
            println!(
                "Recorded +{added_progress}% on {operation_code}: {:.2} ha worked, {:.1}% total.",
                receipt.area_ha, receipt.total_percentage
            );
        }

        Command::Help => unreachable!("handled above"),
    }

    Ok(())
}

fn print_like_state(state: &terrawatch_core::domain::ports::backend::LikeState) {
    if state.liked {
        println!("Liked ({} likes).", state.like_count);
    } else {
        println!("Unliked ({} likes).", state.like_count);
    }
}
