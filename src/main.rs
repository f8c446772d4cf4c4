use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use git_bump::config::Config;
use git_bump::event::PushEvent;
use git_bump::git_ops::GitWorkspace;
use git_bump::manifest::VersionManifest;
use git_bump::resolver::{self, BumpDirective};
use git_bump::{sequencer, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    about = "Bump the project version from commit messages, then commit, tag and push"
)]
struct Args {
    #[arg(short, long, help = "Path to the CI event payload JSON")]
    event: Option<PathBuf>,

    #[arg(short, long, help = "Workspace directory (defaults to GITHUB_WORKSPACE)")]
    workspace: Option<PathBuf>,

    #[arg(long, help = "Resolve and report the bump without touching the repository")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from_env();

    let workspace_dir = args
        .workspace
        .or_else(|| env::var("GITHUB_WORKSPACE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let workspace = GitWorkspace::new(&workspace_dir);

    let event_path = args
        .event
        .or_else(|| env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from));

    let event = match PushEvent::load(event_path.as_deref()) {
        Ok(event) => event,
        Err(e) => {
            ui::display_error(&format!("Failed to read event payload: {}", e));
            std::process::exit(1);
        }
    };

    let messages = event.messages();
    if event.is_empty() && config.version_type.is_none() {
        ui::display_status("Couldn't find any commits in this event, using the configured default");
    }
    ui::display_status(&format!("tag prefix: '{}'", config.tag_prefix));
    ui::display_commit_messages(&messages);

    // The version file is required before any decision is acted on.
    let manifest_path = workspace_dir.join(&config.version_file);
    let mut manifest = match VersionManifest::read(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let directive = match resolver::resolve(&messages, &config) {
        Ok(directive) => directive,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match &directive {
        BumpDirective::Skip => {
            ui::display_success("No action necessary because we found a previous bump!");
            return Ok(());
        }
        BumpDirective::NoBump => {
            ui::display_success("No version keywords found, skipping bump.");
            return Ok(());
        }
        BumpDirective::Apply { kind, .. } => {
            ui::display_status(&format!("version action: {}", kind));
        }
    }

    if !config.push {
        ui::display_success("Push disabled; leaving the tag and version file untouched. Finished.");
        return Ok(());
    }

    let current = match manifest.current_version(&config.tag_prefix) {
        Ok(current) => current,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let applied = match version::apply(&current, &directive, &config.tag_prefix) {
        Ok(Some(applied)) => applied,
        Ok(None) => unreachable!("no-op directives return before apply"),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("old version: {}", current));
    ui::display_status(&format!("new version: {}", applied.tag));

    if args.dry_run {
        ui::display_status("Dry run:");
        ui::display_success(&format!("  would rewrite {}", manifest_path.display()));
        ui::display_success(&format!("  would commit and tag {}", applied.tag));
        ui::display_success("  would push to the target branch");
        return Ok(());
    }

    if let Err(e) = sequencer::run(&workspace, &config, &mut manifest, &applied) {
        ui::display_error(&e.to_string());
        ui::display_error("Failed to bump version");
        std::process::exit(1);
    }

    ui::display_success(&format!("Version bumped to {}!", applied.tag));
    Ok(())
}
