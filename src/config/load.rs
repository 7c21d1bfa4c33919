// src/config/load.rs
use anyhow::Result;
use std::env;
use tracing::{error, info};

use crate::config::{
    assemble_rows, extract_sheet_id, map_columns, validate_configs, ArmyConfig, ConfigError,
    LoadSettings,
};
use crate::fetch::SheetSource;

/// Environment variable naming the master roster spreadsheet (URL or bare ID).
pub const SHEET_ENV_VAR: &str = "GOOGLE_SHEET_URL";

/// Run one full load cycle: locate the master roster, fetch it, map its
/// columns, assemble the rows, validate the result.
///
/// Any failure from any stage comes back as a single `LoadFailed` wrapping
/// the original error, so callers deal with one shape.
pub async fn load_config<S: SheetSource>(
    source: &S,
    settings: &LoadSettings,
) -> Result<Vec<ArmyConfig>, ConfigError> {
    match load_inner(source, settings).await {
        Ok(configs) => Ok(configs),
        Err(e) => {
            error!("failed to load configuration: {:#}", e);
            Err(ConfigError::LoadFailed(e))
        }
    }
}

async fn load_inner<S: SheetSource>(
    source: &S,
    settings: &LoadSettings,
) -> Result<Vec<ArmyConfig>> {
    // 1) locate the master roster
    let locator =
        env::var(SHEET_ENV_VAR).map_err(|_| ConfigError::MissingEnvVar(SHEET_ENV_VAR))?;
    let master_id = extract_sheet_id(&locator)?;
    info!(sheet_id = %master_id, worksheet = %settings.worksheet, "loading configuration");

    // 2) fetch the raw table (the only await point)
    let table = source.get_table(&master_id, &settings.worksheet).await?;
    if table.is_empty() {
        return Err(ConfigError::EmptyDataset(format!(
            "no data found in {}",
            settings.worksheet
        ))
        .into());
    }

    // 3) map columns, assemble rows, validate the batch
    let indices = map_columns(&table.rows[0], &settings.columns)?;
    let configs = assemble_rows(&table.rows[1..], &indices, &settings.cells)?;
    validate_configs(&configs)?;

    info!(count = configs.len(), "loaded army configurations");
    Ok(configs)
}
