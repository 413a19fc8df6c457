//! # CLI Layer
//!
//! One possible UI client for pointcollector, not the application itself.
//!
//! This is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing and configuration lookup
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves configuration and builds the session
//! - `handle_*()`: Per-command handlers for the one-shot subcommands
//! - [`prompt`]: The interactive command prompt (the default command)
//! - [`render`]: Output formatting

mod args;
mod prompt;
mod render;
mod styles;

use args::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use pointcollector::api::PointsApi;
use pointcollector::config::PointsConfig;
use pointcollector::error::Result;
use pointcollector::session::{Action, Session};
use pointcollector::store::fs::FileStore;
use prompt::{Animation, Prompt};
use render::{animate_chart, render_chart, render_messages, render_team_list, render_total};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    config: PointsConfig,
    session: Session<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => handle_prompt(ctx),
        Commands::Show { sorted } => handle_show(&mut ctx, sorted),
        Commands::Total => handle_total(&mut ctx),
        Commands::Chart => handle_chart(&mut ctx),
        Commands::Config { write } => handle_config(&ctx, write),
    }
}

/// Logs go to stderr so they never mix with prompt output.
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))];
    if let Some(proj_dirs) = ProjectDirs::from("com", "pointcollector", "pointcollector") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    dirs
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = PointsConfig::load(&config_dirs())?;
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    if cli.no_animation {
        config.animate = false;
    }
    debug!(?config, "resolved configuration");

    let store = FileStore::new(&config.data_file);
    let session = Session::new(PointsApi::new(store), config.animation_steps);
    Ok(AppContext { config, session })
}

fn animation(config: &PointsConfig) -> Option<Animation> {
    let term = Term::stdout();
    if config.animate && term.is_term() {
        Some(Animation {
            term,
            frame_delay: Duration::from_millis(config.frame_delay_ms),
        })
    } else {
        None
    }
}

fn handle_prompt(ctx: AppContext) -> Result<()> {
    let AppContext { config, session } = ctx;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut prompt = Prompt::new(stdin.lock(), stdout.lock(), session, config.chart_width);
    if let Some(animation) = animation(&config) {
        prompt = prompt.with_animation(animation);
    }
    prompt.run()
}

fn handle_show(ctx: &mut AppContext, sorted: bool) -> Result<()> {
    ctx.session.dispatch(Action::Load)?;
    let result = ctx.session.api().list_teams(sorted)?;
    let heading = if sorted { "Points:" } else { "Teams:" };
    print!("{}", render_team_list(heading, &result.listed_teams));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_total(ctx: &mut AppContext) -> Result<()> {
    ctx.session.dispatch(Action::Load)?;
    let result = ctx.session.dispatch(Action::SumPoints)?;
    if let Some(total) = result.total {
        print!("{}", render_total(total));
    }
    Ok(())
}

fn handle_chart(ctx: &mut AppContext) -> Result<()> {
    ctx.session.dispatch(Action::Load)?;
    let result = ctx.session.dispatch(Action::ShowGraph)?;
    print!("{}", render_messages(&result.messages));

    let width = ctx.config.chart_width;
    let animation = animation(&ctx.config);
    if let Some(chart) = ctx.session.chart_mut() {
        match animation {
            Some(animation) => {
                animate_chart(&animation.term, chart, width, animation.frame_delay)?
            }
            None => {
                chart.finish();
                print!("{}", render_chart(chart, width));
            }
        }
    }
    io::stdout().flush()?;
    Ok(())
}

fn handle_config(ctx: &AppContext, write: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    if write {
        let path = ctx.config.save(std::env::current_dir()?)?;
        println!("Configuration written to '{}'.", path.display());
    }
    Ok(())
}
