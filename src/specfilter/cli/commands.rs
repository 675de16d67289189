//! Context setup and per-command handlers.
//!
//! `run()` parses arguments, installs logging, builds an [`AppContext`] and
//! dispatches. Each `handle_*` calls the API once and renders the result,
//! either as text or, with `--json`, as the serialized `CmdResult`.

use super::logging;
use super::print::{
    print_attributes, print_config, print_groups, print_items, print_json, print_messages,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use specfilter::api::{CmdResult, ConfigAction, SpecFilterApi, SpecFilterPaths};
use specfilter::config::SpecFilterConfig;
use specfilter::error::{Result, SpecFilterError};
use specfilter::store::fs::FileCatalog;
use specfilter::store::memory::InMemoryCatalog;
use specfilter::store::CatalogStore;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the platform data directory.
const HOME_ENV: &str = "SPECFILTER_HOME";

struct AppContext {
    api: SpecFilterApi<Box<dyn CatalogStore>>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Filter { query }) => handle_filter(&ctx, &query.join(" ")),
        Some(Commands::Attrs) => handle_attrs(&ctx),
        Some(Commands::Demo) => handle_demo(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let paths = SpecFilterPaths::new(data_dir()?);

    let config = SpecFilterConfig::load(&paths.data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        SpecFilterConfig::default()
    });
    if !config.color {
        colored::control::set_override(false);
    }

    let store = open_catalog(cli.catalog.as_deref(), &config);
    debug!(source = %store.describe(), data_dir = %paths.data_dir.display(), "context ready");

    Ok(AppContext {
        api: SpecFilterApi::new(store, paths),
        json: cli.json,
    })
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "specfilter", "specfilter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SpecFilterError::Config("Could not determine data directory".into()))
}

/// `--catalog` first, then the configured catalog, then the built-in one.
fn open_catalog(flag: Option<&Path>, config: &SpecFilterConfig) -> Box<dyn CatalogStore> {
    match flag.or(config.catalog.as_deref()) {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(InMemoryCatalog::demo()),
    }
}

fn emit(ctx: &AppContext, result: &CmdResult, render: impl FnOnce(&CmdResult)) -> Result<()> {
    if ctx.json {
        return print_json(result);
    }
    render(result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    emit(ctx, &result, |r| print_items(&r.listed))
}

fn handle_filter(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.filter_items(query)?;
    emit(ctx, &result, |r| print_items(&r.listed))
}

fn handle_attrs(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.attributes();
    emit(ctx, &result, |r| print_attributes(&r.attributes))
}

fn handle_demo(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.demo()?;
    emit(ctx, &result, |r| print_groups(&r.groups))
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    emit(ctx, &result, |r| {
        if let (true, Some(config)) = (show_all, &r.config) {
            print_config(config);
        }
    })
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    emit(ctx, &result, |_| {})
}
