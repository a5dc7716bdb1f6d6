//! CSV snapshot of the registry with columns `category,name,lat,lon`.
use super::PlacesAppError;
use kdam::tqdm;
use places_core::model::RegistryListing;
use places_core::service::{RegistryError, RegistryService};
use places_core::validation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// a row of a places snapshot. coordinates are kept as text so that
/// malformed values are reported through coordinate validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotRow {
    pub category: String,
    pub name: String,
    pub lat: String,
    pub lon: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct SnapshotSummary {
    pub loaded: usize,
    pub skipped: usize,
    /// raw records that could not be loaded, kept so that rewriting the
    /// snapshot does not lose them
    #[serde(skip)]
    pub rejected: Vec<csv::ByteRecord>,
}

/// loads every row of a snapshot into the registry through
/// [`RegistryService::add_place`]. rows that cannot be decoded or are
/// rejected by validation are logged, skipped and returned in
/// [`SnapshotSummary::rejected`]; a store failure aborts the load.
pub fn read_snapshot(
    path: &Path,
    service: &RegistryService,
) -> Result<SnapshotSummary, PlacesAppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.byte_headers()?.clone();
    let records = reader
        .byte_records()
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = SnapshotSummary::default();
    let total = records.len();
    let iter = tqdm!(records.into_iter(), desc = "load places", total = total);
    for (idx, record) in iter.enumerate() {
        let row = match record.deserialize::<SnapshotRow>(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping snapshot row {}: {e}", idx + 1);
                summary.skipped += 1;
                summary.rejected.push(record);
                continue;
            }
        };
        match load_row(&row, service) {
            Ok(()) => summary.loaded += 1,
            Err(RegistryError::StoreUnavailable(msg)) => {
                eprintln!();
                return Err(RegistryError::StoreUnavailable(msg).into());
            }
            Err(e) => {
                log::warn!("skipping snapshot row {} ('{}'): {e}", idx + 1, row.name);
                summary.skipped += 1;
                summary.rejected.push(record);
            }
        }
    }
    eprintln!();
    log::info!(
        "loaded {} place(s) from {}, skipped {}",
        summary.loaded,
        path.display(),
        summary.skipped
    );
    Ok(summary)
}

fn load_row(row: &SnapshotRow, service: &RegistryService) -> Result<(), RegistryError> {
    let coordinate = validation::parse(Some(row.lat.as_str()), Some(row.lon.as_str()))?;
    service.add_place(&row.category, &row.name, coordinate.lat(), coordinate.lon())?;
    Ok(())
}

/// writes the listing to `path`, followed by any `rejected` records exactly
/// as they were read. the snapshot is written to a sibling file first and
/// renamed over `path`, so a failed write leaves the previous snapshot intact.
pub fn write_snapshot(
    path: &Path,
    listing: &RegistryListing,
    rejected: &[csv::ByteRecord],
) -> Result<(), PlacesAppError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("places.csv"));
    let tmp_path = path.with_file_name(format!(".{file_name}.tmp"));

    let result = write_rows(&tmp_path, listing, rejected)
        .and_then(|_| std::fs::rename(&tmp_path, path).map_err(PlacesAppError::from));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result?;
    log::info!(
        "wrote {} place(s) to {}, kept {} unloaded row(s)",
        listing.total,
        path.display(),
        rejected.len()
    );
    Ok(())
}

fn write_rows(
    path: &Path,
    listing: &RegistryListing,
    rejected: &[csv::ByteRecord],
) -> Result<(), PlacesAppError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(["category", "name", "lat", "lon"])?;
    for (category, entries) in listing.categories.iter() {
        for entry in entries.iter() {
            writer.write_record([
                category.as_str(),
                entry.name.as_str(),
                entry.lat.to_string().as_str(),
                entry.lon.to_string().as_str(),
            ])?;
        }
    }
    for record in rejected.iter() {
        writer.write_byte_record(record)?;
    }
    let file = writer
        .into_inner()
        .map_err(|e| PlacesAppError::IoError(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}
