// src/config/columns.rs
use crate::config::{ColumnSchema, ConfigError};

/// Zero-based positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub army_url: usize,
    pub webhook_url: usize,
}

/// Map each required column name to its first matching position in `header`.
///
/// If anything is absent the error enumerates the whole required schema, not
/// just the first missing name, so the caller sees the expected layout at once.
pub fn map_columns(header: &[String], schema: &ColumnSchema) -> Result<ColumnIndices, ConfigError> {
    let find = |wanted: &str| header.iter().position(|h| h == wanted);

    match (
        find(&schema.name),
        find(&schema.army_url),
        find(&schema.webhook_url),
    ) {
        (Some(name), Some(army_url), Some(webhook_url)) => Ok(ColumnIndices {
            name,
            army_url,
            webhook_url,
        }),
        _ => Err(ConfigError::MissingColumns(
            schema.required_names().join(", "),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_each_required_name_to_its_index() {
        let header = header(&["Webhook URL", "Name", "Notes", "Army URL"]);
        let idx = map_columns(&header, &ColumnSchema::default()).unwrap();
        assert_eq!(
            idx,
            ColumnIndices {
                name: 1,
                army_url: 3,
                webhook_url: 0,
            }
        );
    }

    #[test]
    fn duplicate_column_uses_first_position() {
        let header = header(&["Name", "Name", "Army URL", "Webhook URL"]);
        let idx = map_columns(&header, &ColumnSchema::default()).unwrap();
        assert_eq!(idx.name, 0);
    }

    #[test]
    fn missing_column_error_lists_full_schema() {
        let header = header(&["Name", "Webhook URL"]);
        let err = map_columns(&header, &ColumnSchema::default()).unwrap_err();
        match err {
            ConfigError::MissingColumns(names) => {
                assert_eq!(names, "Name, Army URL, Webhook URL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn alternate_schema_is_honored() {
        let schema = ColumnSchema {
            name: "Unit".into(),
            army_url: "Sheet".into(),
            webhook_url: "Hook".into(),
        };
        let header = header(&["Unit", "Sheet", "Hook"]);
        assert!(map_columns(&header, &schema).is_ok());
        let err = map_columns(&header, &ColumnSchema::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingColumns(_)));
    }
}
