//! Load binding exports through their plugins, merge them, and dump the model as JSON.
//!
//! Examples:
//!   jd-export --source elite_dangerous=".\\Custom.4.0.binds"
//!   jd-export --source sc=".\\actionmaps.xml" --source ed=".\\Custom.4.0.binds"
//!   jd-export --source sc=".\\actionmaps.xml" --flatten "All Devices"
//!
//! Notes:
//! - Sources are merged in the order given; on conflicts the later source wins.
//! - `--source <plugin>` with no path reuses the path saved by a previous run.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use joystick_diagrams_core::config::SETTINGS_FILE;
use joystick_diagrams_core::prelude::*;
use joystick_diagrams_plugins::{PLUGIN_IDS, find_plugin};

// ───────────────────────────── CLI Args ─────────────────────────────

/// `plugin=path` or bare `plugin`.
#[derive(Debug, Clone)]
struct Source {
    plugin: String,
    path: Option<PathBuf>,
}

fn parse_source_arg(s: &str) -> Result<Source, String> {
    let (plugin, path) = match s.split_once('=') {
        Some((p, path)) => (p.trim(), Some(PathBuf::from(path.trim()))),
        None => (s.trim(), None),
    };
    if plugin.is_empty() {
        return Err("expected <plugin>=<path> or <plugin>".into());
    }
    Ok(Source {
        plugin: plugin.to_string(),
        path,
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "jd-export",
    version,
    about = "Merge joystick bindings from several games into one JSON model"
)]
struct Args {
    /// Source to load, as <plugin>=<path> (repeatable; later sources win)
    #[arg(short, long = "source", value_parser = parse_source_arg)]
    sources: Vec<Source>,

    /// Settings file (JSON)
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: PathBuf,

    /// Collapse every profile into a single profile with this name
    #[arg(long)]
    flatten: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print plugin ids and exit
    #[arg(long)]
    list_plugins: bool,
}

// ───────────────────────────── Logger ─────────────────────────────

#[derive(Clone)]
struct StderrLogger {
    verbose: bool,
}

// Implement CoreLog (used by the core crate and plugins). Stdout is reserved for JSON.
impl CoreLog for StderrLogger {
    fn info(&self, msg: &str) {
        eprintln!("INFO:  {msg}");
    }
    fn warn(&self, msg: &str) {
        eprintln!("WARN:  {msg}");
    }
    fn error(&self, msg: &str) {
        eprintln!("ERROR: {msg}");
    }
    fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("DEBUG: {msg}");
        }
    }
}

// ───────────────────────────── main ─────────────────────────────

fn main() -> Result<(), String> {
    let args = Args::parse();

    if args.list_plugins {
        for id in PLUGIN_IDS {
            println!("{id}");
        }
        return Ok(());
    }

    if args.sources.is_empty() {
        return Err("at least one --source is required (see --list-plugins)".into());
    }

    let logger: Arc<dyn CoreLog> = Arc::new(StderrLogger {
        verbose: args.verbose,
    });
    let settings = Arc::new(Settings::load(&args.settings).map_err(|e| e.to_string())?);
    logger.debug(&format!("settings: {settings:?}"));

    let mut merged = ProfileCollection::new();
    for source in &args.sources {
        let collection = load_source(source, &settings, &logger)?;
        logger.info(&format!(
            "{}: {} profiles",
            source.plugin,
            collection.len()
        ));
        merged = merged.merge(&collection);
    }

    let json = match args.flatten.as_deref() {
        Some(name) => serde_json::to_string_pretty(&merged.flatten(name)),
        None => serde_json::to_string_pretty(&merged),
    }
    .map_err(|e| format!("serialize: {e}"))?;

    println!("{json}");
    Ok(())
}

// ───────────────────────────── helpers ─────────────────────────────

fn load_source(
    source: &Source,
    settings: &Arc<Settings>,
    logger: &Arc<dyn CoreLog>,
) -> Result<ProfileCollection, String> {
    let mut plugin = find_plugin(&source.plugin, settings, logger).ok_or_else(|| {
        format!(
            "unknown plugin '{}' (expected one of: {})",
            source.plugin,
            PLUGIN_IDS.join(", ")
        )
    })?;

    let ready = match source.path.as_ref() {
        Some(path) => plugin.set_path(path),
        None => plugin
            .load_plugin_state()
            .map_err(|e| format!("{}: {e}", plugin.name()))?,
    };
    if !ready {
        let fp = plugin.path_type();
        return Err(format!(
            "{}: no usable file ({}; accepted: {})",
            plugin.name(),
            fp.prompt,
            fp.extensions.join(", ")
        ));
    }

    plugin
        .process()
        .map_err(|e| format!("{}: {e}", plugin.name()))
}
