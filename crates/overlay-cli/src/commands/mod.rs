//! Subcommand implementations and the session they share

pub mod menus;
pub mod overlay;

use std::path::{Path, PathBuf};

use clap::Args;
use overlay_core::catalog::InMemoryCatalog;
use overlay_core::config::ManagerConfig;
use overlay_core::logging_facility;
use overlay_core::manager::CollectionManager;
use overlay_core::model::CharacterHandle;
use overlay_core::render::{RecordingRenderer, RenderCall, RenderReport};
use overlay_store::FsCharacterStore;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

pub type CliManager = CollectionManager<InMemoryCatalog, RecordingRenderer, FsCharacterStore>;

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Catalog seed file (YAML)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Character record file (JSON); created on first save
    #[arg(long, global = true)]
    pub record: Option<PathBuf>,

    /// Manager configuration (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Character handle the decorations are painted on
    #[arg(long, global = true, default_value_t = 1)]
    pub character: i32,
}

impl SessionArgs {
    pub fn catalog_path(&self) -> CliResult<&Path> {
        self.catalog
            .as_deref()
            .ok_or_else(|| "--catalog <FILE> is required for this command".into())
    }

    fn record_path(&self) -> CliResult<&Path> {
        self.record
            .as_deref()
            .ok_or_else(|| "--record <FILE> is required for this command".into())
    }

    /// Read `--config`, falling back to defaults, and start logging
    pub fn load_config(&self) -> CliResult<ManagerConfig> {
        let config = match &self.config {
            Some(path) => ManagerConfig::from_toml(&std::fs::read_to_string(path)?)?,
            None => ManagerConfig::default(),
        };
        logging_facility::init(config.logging);
        Ok(config)
    }

    /// Build a manager and load the record's saved collection into it
    ///
    /// The load's render pass is dropped from the renderer so callers only
    /// print what their own command painted.
    pub fn open(&self) -> CliResult<CliManager> {
        let config = self.load_config()?;
        let catalog = overlay_store::load_catalog_file(self.catalog_path()?)?;
        let store = FsCharacterStore::open(self.record_path()?)?;
        let saved = store.snapshot().cloned();

        let mut manager = CollectionManager::new(
            CharacterHandle(self.character),
            catalog,
            RecordingRenderer::new(),
            store,
        )
        .with_config(config);
        manager.load(saved.as_ref())?;
        manager.renderer_mut().reset();
        Ok(manager)
    }
}

/// Print the calls the renderer received and how the pass ended
pub fn print_render(manager: &CliManager) {
    for call in manager.renderer().calls() {
        match call {
            RenderCall::Clear(character) => println!("clear {}", character.0),
            RenderCall::Apply(character, key) => println!(
                "apply {} {:#010x} {:#010x}",
                character.0, key.collection, key.name
            ),
        }
    }
    if let Some(report) = manager.last_render() {
        print_report(report);
    }
}

fn print_report(report: &RenderReport) {
    if let Some(id) = report.aborted_at {
        println!("render aborted at overlay {} (not in catalog)", id);
    }
    for id in &report.skipped {
        println!("skipped overlay {} (not in catalog)", id);
    }
}
