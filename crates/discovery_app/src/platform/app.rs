use std::io::{self, Write};

use anyhow::Context;
use discovery_core::{AppState, TimingConfig};
use discovery_engine::{spawn_runtime, Notification};
use discovery_logging::discovery_info;

use super::{config, logging, render};
use crate::cli::{Cli, Command};

pub async fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.verbose);

    let timing = config::load_timing(cli.config.as_deref())?;

    match cli.command {
        Command::Search {
            query,
            languages,
            json,
        } => run_search(timing, &query, &languages, json).await,
        Command::Stages => {
            print!("{}", render::render_stages(&timing));
            Ok(())
        }
        Command::Languages => {
            print!("{}", render::render_languages());
            Ok(())
        }
    }
}

async fn run_search(
    timing: TimingConfig,
    query: &str,
    languages: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let (handle, mut notifications, task) = spawn_runtime(AppState::with_timing(timing));
    handle
        .submit_search(query, languages)
        .context("could not start search")?;

    let mut stdout = io::stdout().lock();
    while let Some(notification) = notifications.recv().await {
        match notification {
            Notification::Progress {
                stage_index,
                percent,
                ..
            } => {
                if json {
                    continue;
                }
                write!(stdout, "\r{}", render::render_progress(stage_index, percent))?;
                if percent == 100 {
                    writeln!(stdout)?;
                }
                stdout.flush()?;
            }
            Notification::Completed { run_id, results } => {
                discovery_info!("run {} delivered {} results", run_id, results.len());
                if json {
                    serde_json::to_writer_pretty(&mut stdout, &results)?;
                    writeln!(stdout)?;
                } else {
                    writeln!(stdout)?;
                    write!(stdout, "{}", render::render_results(query.trim(), &results))?;
                }
                break;
            }
        }
    }

    drop(handle);
    task.await.context("search runtime failed")?;
    Ok(())
}
