// src/config/mod.rs
pub mod assemble;
pub mod columns;
pub mod error;
pub mod load;
pub mod settings;
pub mod sheet_id;
pub mod validate;

pub use assemble::assemble_rows;
pub use columns::{map_columns, ColumnIndices};
pub use error::ConfigError;
pub use load::{load_config, SHEET_ENV_VAR};
pub use settings::{ColumnSchema, LoadSettings, SupplyCells};
pub use sheet_id::extract_sheet_id;
pub use validate::validate_configs;

use serde::Serialize;

/// One army's resolved supply-tracking configuration.
///
/// Built only by the row assembler, which guarantees every field is populated
/// and `sheet_id` came through the extractor rather than verbatim from a URL.
/// Never mutated after construction; a fresh list is built on every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArmyConfig {
    pub name: String,
    pub sheet_id: String,
    pub webhook_url: String,
    pub current_supplies_cell: String,
    pub daily_consumption_cell: String,
}
