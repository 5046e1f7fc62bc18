use crate::application::PushApplication;
use crate::launcher::Launcher;
use crate::preferences::{PreferenceSource, PushPreferences};
use crate::push::{Pusher, split_keys};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

const UNSET_PATH: &str = "<unset>";

#[derive(Debug, Parser)]
#[command(name = "citepush")]
#[command(version)]
#[command(about = "Push citation keys into a running LaTeX editor")]
pub struct CliArgs {
    /// Preference file to read instead of the discovered one
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Insert citation keys into an external application
    Push {
        /// Comma separated citation keys
        keys: String,

        /// Target application display name (falls back to default_application)
        #[arg(long, short = 'a')]
        app: Option<PushApplication>,
    },
    /// Print the command line a push would run, without running it
    Show {
        /// Comma separated citation keys
        keys: String,

        #[arg(long, short = 'a')]
        app: Option<PushApplication>,

        /// Print the argv as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// List supported applications and their configured paths
    List,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run one subcommand, writing its report to `out`.
pub fn run<P, L, W>(command: CliCommand, preferences: P, launcher: L, out: &mut W) -> Result<()>
where
    P: PreferenceSource,
    L: Launcher,
    W: Write,
{
    match command {
        CliCommand::Push { keys, app } => {
            let app = match app {
                Some(app) => app,
                None => default_application(&preferences.load()?)?,
            };
            Pusher::new(preferences, launcher).push(app, &keys)?;
            writeln!(out, "Pushed to {}", app)?;
        }
        CliCommand::Show { keys, app, json } => {
            let prefs = preferences.load()?;
            let app = match app {
                Some(app) => app,
                None => default_application(&prefs)?,
            };
            let keys = split_keys(&keys);
            let path = prefs.command_paths.resolve(app.display_name());
            let argv = app
                .build_command_line(&keys, path, &prefs)
                .display_argv(UNSET_PATH);
            if json {
                let encoded =
                    serde_json::to_string(&argv).context("Failed to encode command line")?;
                writeln!(out, "{}", encoded)?;
            } else {
                for arg in argv {
                    writeln!(out, "{}", arg)?;
                }
            }
        }
        CliCommand::List => {
            let prefs = preferences.load()?;
            for app in PushApplication::ALL {
                let path = prefs
                    .command_paths
                    .resolve(app.display_name())
                    .unwrap_or("(not configured)");
                writeln!(out, "{:<14} {:<32} {}", app.display_name(), path, app.tooltip())?;
            }
        }
    }
    Ok(())
}

fn default_application(prefs: &PushPreferences) -> Result<PushApplication> {
    let name = prefs
        .default_application
        .as_deref()
        .ok_or_else(|| anyhow!("No application given; pass --app or set default_application"))?;
    name.parse::<PushApplication>()
        .context("default_application in the preferences is not a supported application")
}
