// src/config/settings.rs

/// Required column names for the master roster worksheet.
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    pub name: String,
    pub army_url: String,
    pub webhook_url: String,
}

impl ColumnSchema {
    /// All required names, in schema order, for error reporting.
    pub fn required_names(&self) -> [&str; 3] {
        [&self.name, &self.army_url, &self.webhook_url]
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            name: "Name".into(),
            army_url: "Army URL".into(),
            webhook_url: "Webhook URL".into(),
        }
    }
}

/// Cell coordinates for supply data in each army's own spreadsheet,
/// stamped into every resolved record.
#[derive(Debug, Clone)]
pub struct SupplyCells {
    pub current_supplies: String,
    pub daily_consumption: String,
}

impl Default for SupplyCells {
    fn default() -> Self {
        Self {
            current_supplies: "C9".into(),
            daily_consumption: "C11".into(),
        }
    }
}

/// Everything the loader needs besides the spreadsheet itself. Injected so
/// tests can run against alternate schemas instead of baked-in constants.
#[derive(Debug, Clone)]
pub struct LoadSettings {
    /// Worksheet holding the roster of armies.
    pub worksheet: String,
    pub columns: ColumnSchema,
    pub cells: SupplyCells,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            worksheet: "Commander Database".into(),
            columns: ColumnSchema::default(),
            cells: SupplyCells::default(),
        }
    }
}
