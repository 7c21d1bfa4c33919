// src/config/assemble.rs
use tracing::{debug, warn};

use crate::config::{
    extract_sheet_id, ArmyConfig, ColumnIndices, ConfigError, SupplyCells,
};

/// Why a single roster row was dropped instead of producing a record.
#[derive(Debug)]
enum SkipReason {
    /// One of the three required cells is absent or blank.
    MissingData,
    /// The army URL cell did not yield a sheet ID.
    BadArmyUrl { name: String, detail: String },
}

/// A cell is "missing" when the row is too short to contain it or its
/// trimmed content is empty.
fn cell<'a>(row: &'a [String], idx: usize) -> Option<&'a str> {
    row.get(idx).map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn assemble_row(
    row: &[String],
    cols: &ColumnIndices,
    cells: &SupplyCells,
) -> Result<ArmyConfig, SkipReason> {
    let (name, army_url, webhook_url) = match (
        cell(row, cols.name),
        cell(row, cols.army_url),
        cell(row, cols.webhook_url),
    ) {
        (Some(n), Some(a), Some(w)) => (n, a, w),
        _ => return Err(SkipReason::MissingData),
    };

    let sheet_id = extract_sheet_id(army_url).map_err(|e| SkipReason::BadArmyUrl {
        name: name.to_string(),
        detail: e.to_string(),
    })?;

    Ok(ArmyConfig {
        name: name.to_string(),
        sheet_id,
        webhook_url: webhook_url.to_string(),
        current_supplies_cell: cells.current_supplies.clone(),
        daily_consumption_cell: cells.daily_consumption.clone(),
    })
}

/// Turn the data rows (everything after the header) into `ArmyConfig`s,
/// preserving row order.
///
/// A malformed row is skipped with a diagnostic and never aborts the batch.
/// Zero surviving rows, however, fails the whole load.
/// Row indices in diagnostics are 1-based over the original table, where the
/// header is row 0.
pub fn assemble_rows(
    rows: &[Vec<String>],
    cols: &ColumnIndices,
    cells: &SupplyCells,
) -> Result<Vec<ArmyConfig>, ConfigError> {
    let mut configs = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let row_index = idx + 1;
        match assemble_row(row, cols, cells) {
            Ok(config) => configs.push(config),
            Err(SkipReason::MissingData) => {
                debug!(row = row_index, "skipping row - missing required data");
            }
            Err(SkipReason::BadArmyUrl { name, detail }) => {
                warn!(row = row_index, %name, "skipping row: {}", detail);
            }
        }
    }

    if configs.is_empty() {
        return Err(ConfigError::EmptyDataset(
            "no valid army configurations found in roster".into(),
        ));
    }
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: ColumnIndices = ColumnIndices {
        name: 0,
        army_url: 1,
        webhook_url: 2,
    };

    fn cells() -> SupplyCells {
        SupplyCells::default()
    }

    fn row(name: &str, army_url: &str, webhook_url: &str) -> Vec<String> {
        vec![name.to_string(), army_url.to_string(), webhook_url.to_string()]
    }

    #[test]
    fn builds_record_with_derived_sheet_id_and_stamped_cells() {
        let rows = vec![row(
            "  3rd Battalion ",
            "https://docs.google.com/spreadsheets/d/abc123/edit",
            " https://hooks.example.com/a ",
        )];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(
            configs,
            vec![ArmyConfig {
                name: "3rd Battalion".into(),
                sheet_id: "abc123".into(),
                webhook_url: "https://hooks.example.com/a".into(),
                current_supplies_cell: "C9".into(),
                daily_consumption_cell: "C11".into(),
            }]
        );
    }

    #[test]
    fn bare_id_in_army_url_column_is_accepted() {
        let rows = vec![row("7th Recon", "abc123", "https://hooks.example.com/b")];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(configs[0].sheet_id, "abc123");
    }

    #[test]
    fn empty_name_skips_only_that_row() {
        let rows = vec![
            row("", "abc123", "https://hooks.example.com/a"),
            row("7th Recon", "def456", "https://hooks.example.com/b"),
        ];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].name, "7th Recon");
    }

    #[test]
    fn short_row_counts_as_missing_data() {
        let rows = vec![
            vec!["only-a-name".to_string()],
            row("7th Recon", "def456", "https://hooks.example.com/b"),
        ];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(configs.len(), 1);
    }

    #[test]
    fn whitespace_only_cell_counts_as_missing_data() {
        let rows = vec![
            row("3rd Battalion", "   ", "https://hooks.example.com/a"),
            row("7th Recon", "def456", "https://hooks.example.com/b"),
        ];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(configs.len(), 1);
    }

    #[test]
    fn bad_army_url_skips_row_without_aborting() {
        let rows = vec![
            row(
                "3rd Battalion",
                "https://example.com/not-a-sheet",
                "https://hooks.example.com/a",
            ),
            row("7th Recon", "def456", "https://hooks.example.com/b"),
        ];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].name, "7th Recon");
    }

    #[test]
    fn output_preserves_row_order() {
        let rows = vec![
            row("Alpha", "id1", "https://hooks.example.com/1"),
            row("", "bad", ""),
            row("Bravo", "id2", "https://hooks.example.com/2"),
            row("Charlie", "id3", "https://hooks.example.com/3"),
        ];
        let configs = assemble_rows(&rows, &COLS, &cells()).unwrap();
        let names: Vec<_> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn all_rows_invalid_is_an_empty_dataset() {
        let rows = vec![
            row("", "", ""),
            row("3rd Battalion", "https://example.com/nope", "https://hooks.example.com/a"),
        ];
        let err = assemble_rows(&rows, &COLS, &cells()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDataset(_)));
    }

    #[test]
    fn no_data_rows_is_an_empty_dataset() {
        let err = assemble_rows(&[], &COLS, &cells()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDataset(_)));
    }
}
