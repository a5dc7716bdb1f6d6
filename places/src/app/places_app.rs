use super::{read_snapshot, write_snapshot, PlacesAppError, PlacesOperation, SnapshotSummary};
use clap::Parser;
use places_core::service::{RegistryConfig, RegistryService};
use std::path::Path;

/// command line tool for registering places and querying them by radius
/// search or great-circle distance
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PlacesApp {
    #[command(subcommand)]
    pub op: PlacesOperation,
    /// registry configuration (.toml or .json); defaults to the built-in categories
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// CSV snapshot with columns category,name,lat,lon, loaded before the
    /// operation and rewritten after any change
    #[arg(long, global = true)]
    pub places_file: Option<String>,
}

impl PlacesApp {
    pub fn run(&self) -> Result<serde_json::Value, PlacesAppError> {
        let config = match &self.config_file {
            None => RegistryConfig::default(),
            Some(f) => {
                log::info!("reading registry configuration from {f}");
                RegistryConfig::try_from(f)?
            }
        };
        let service = RegistryService::in_memory(config)?;

        let mut summary = SnapshotSummary::default();
        if let Some(f) = &self.places_file {
            let path = Path::new(f);
            if path.exists() {
                summary = read_snapshot(path, &service)?;
            } else {
                log::info!("places file {f} does not exist yet, starting empty");
            }
        }

        let response = self.op.run(&service)?;

        if let (true, Some(f)) = (self.op.mutates(), &self.places_file) {
            if !summary.rejected.is_empty() {
                log::warn!(
                    "{} row(s) of {f} were not loaded and are written back unchanged",
                    summary.rejected.len()
                );
            }
            write_snapshot(Path::new(f), &service.list_all()?, &summary.rejected)?;
        }
        Ok(response)
    }
}
