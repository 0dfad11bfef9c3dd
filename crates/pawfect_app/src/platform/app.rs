use anyhow::Context;
use chrono::Local;
use pawfect_core::{
    update, AnimalId, CatalogProvider, CatalogStore, Effect, Msg, StoreEvent, StoreSettings,
};
use pawfect_engine::{CatalogWriter, DemoCatalogProvider, JsonCatalogProvider};
use pawfect_logging::pawfect_debug;

use super::config::{load_config, AppConfig, CatalogSource};
use super::render::{render_home, render_list};
use crate::cli::{Cli, Commands};

type Store = CatalogStore<Box<dyn CatalogProvider>>;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)?;
    pawfect_logging::initialize(&config.log.destination(), config.log.level.into());

    let source = resolve_source(&cli, &config);
    pawfect_debug!("Catalog source: {:?}", source);
    let settings = StoreSettings {
        lives_saved: config.lives_saved,
        ..StoreSettings::default()
    };
    let mut store: Store = CatalogStore::with_settings(open_provider(source), settings);
    store.subscribe(|event: &StoreEvent| pawfect_debug!("Store event: {:?}", event));

    let (store, effects) = update(store, Msg::LoadRequested);
    run_effects(effects)?;

    let now = Local::now();
    let output = match cli.command {
        Commands::Home => render_home(&store.view(&now)),
        Commands::Search(args) => {
            let (store, _) = update(store, Msg::SearchSubmitted(args.criteria()));
            render_list("Search results", &store.view(&now).cards)
        }
        Commands::Favorites(args) => {
            let store = toggle_favorites(store, args.favorites);
            render_list("Your favorites", &store.view(&now).favorites)
        }
        Commands::Export(args) => {
            let path = CatalogWriter::new(args.out)
                .write(&args.file, store.all_records())
                .context("could not export the catalog")?;
            format!(
                "Exported {} animals to {}\n",
                store.all_records().len(),
                path.display()
            )
        }
    };

    print!("{output}");
    Ok(())
}

/// Unknown ids are reported by the store's own warn log.
fn toggle_favorites(store: Store, ids: Vec<AnimalId>) -> Store {
    ids.into_iter()
        .fold(store, |store, id| update(store, Msg::FavoriteToggled(id)).0)
}

/// Command-line flags win over the config file.
fn resolve_source(cli: &Cli, config: &AppConfig) -> CatalogSource {
    if cli.demo {
        CatalogSource::Demo
    } else if let Some(path) = &cli.catalog {
        CatalogSource::JsonFile(path.clone())
    } else {
        config.catalog.clone()
    }
}

fn open_provider(source: CatalogSource) -> Box<dyn CatalogProvider> {
    match source {
        CatalogSource::Demo => Box::new(DemoCatalogProvider::with_system_clock()),
        CatalogSource::JsonFile(path) => Box::new(JsonCatalogProvider::new(path)),
    }
}

fn run_effects(effects: Vec<Effect>) -> anyhow::Result<()> {
    for effect in effects {
        match effect {
            // Each skipped record is already logged by the store.
            Effect::ReportSkipped(skipped) => {
                eprintln!("warning: {} animals skipped while loading", skipped.len());
            }
            Effect::ShowLoadError(err) => {
                return Err(anyhow::Error::new(err).context("could not load the catalog"));
            }
        }
    }
    Ok(())
}
