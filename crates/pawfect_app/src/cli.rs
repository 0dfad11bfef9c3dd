use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pawfect_core::{AnimalId, SearchCriteria, UrgencyLevel};

/// Browse adoptable animals, their deadlines and your favorites.
#[derive(Debug, Parser)]
#[command(name = "pawfect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// RON configuration file.
    #[arg(long, env = "PAWFECT_CONFIG", default_value = "pawfect.ron")]
    pub config: PathBuf,

    /// Read the catalog from this JSON file instead of the configured source.
    #[arg(long, conflicts_with = "demo")]
    pub catalog: Option<PathBuf>,

    /// Use the built-in sample animals instead of the configured source.
    #[arg(long)]
    pub demo: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Animal of the day, the full list and success stories.
    Home,
    /// Filter the catalog.
    Search(SearchArgs),
    /// Mark animals as favorites and list them.
    Favorites(FavoritesArgs),
    /// Write the loaded catalog as JSON.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Breed contains this text (any case).
    #[arg(long)]
    pub breed: Option<String>,
    /// Size; accepted but not matched yet.
    #[arg(long)]
    pub size: Option<String>,
    /// Location contains this text (any case).
    #[arg(long)]
    pub location: Option<String>,
    /// Exact urgency level: low, medium, high or critical.
    #[arg(long)]
    pub urgency: Option<UrgencyLevel>,
}

impl SearchArgs {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            breed: self.breed.clone(),
            size: self.size.clone(),
            location: self.location.clone(),
            urgency: self.urgency,
        }
    }
}

#[derive(Debug, Args)]
pub struct FavoritesArgs {
    /// Animal id to toggle; repeat for several.
    #[arg(long = "favorite", value_name = "ID")]
    pub favorites: Vec<AnimalId>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory.
    #[arg(long, default_value = "output")]
    pub out: PathBuf,
    /// File name inside the output directory.
    #[arg(long, default_value = "catalog.json")]
    pub file: String,
}
