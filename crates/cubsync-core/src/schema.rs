//! Destination table schema: fixed base columns plus one column per
//! workspace custom-field definition.
//!
//! Column types use BigQuery's legacy type names (`STRING`, `INTEGER`,
//! `FLOAT`, `TIMESTAMP`) because that is what the tables API and load jobs
//! accept in their `schema.fields` payloads.

use serde::{Deserialize, Serialize};

/// Declared kind of a ClickUp custom field.
///
/// Only `number` and `date` affect column typing; every other declared kind
/// (text, drop_down, labels, ...) collapses to [`FieldKind::Other`] and maps
/// to a string column. Absent kinds deserialize to `Other` as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Numeric field, loaded as a floating-point column.
    Number,
    /// Date field, loaded as a timestamp column.
    Date,
    /// Any other declared kind; loaded as a string column.
    #[default]
    #[serde(other)]
    Other,
}

impl FieldKind {
    /// Destination column type for a field of this kind.
    pub fn column_type(self) -> ColumnType {
        match self {
            Self::Number => ColumnType::Float,
            Self::Date => ColumnType::Timestamp,
            Self::Other => ColumnType::String,
        }
    }
}

/// Workspace-level custom-field definition, fetched fresh each sync.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldDefinition {
    /// Field identifier; also determines the column name.
    pub id: String,
    /// Display name (informational only).
    #[serde(default)]
    pub name: String,
    /// Declared kind, driving the column type.
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
}

/// BigQuery column type (legacy type names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// `STRING`
    String,
    /// `INTEGER`
    Integer,
    /// `FLOAT`
    Float,
    /// `TIMESTAMP`
    Timestamp,
}

/// One typed column declaration.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,
    /// Column type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnSpec {
    fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered column schema for the destination table.
///
/// The order is reproducible: the fixed base columns first, then one column
/// per custom-field definition in the order the API returned them.
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Ordered column declarations.
    pub columns: Vec<ColumnSpec>,
}

impl TableSchema {
    /// The fixed base schema shared by every run.
    pub fn base() -> Self {
        use ColumnType::{Integer, String, Timestamp};
        Self {
            columns: vec![
                ColumnSpec::new("id", String),
                ColumnSpec::new("name", String),
                ColumnSpec::new("description", String),
                ColumnSpec::new("status", String),
                ColumnSpec::new("priority", Integer),
                ColumnSpec::new("due_date", Timestamp),
                ColumnSpec::new("space_id", String),
                ColumnSpec::new("list_id", String),
                ColumnSpec::new("created_at", Timestamp),
                ColumnSpec::new("updated_at", Timestamp),
            ],
        }
    }

    /// Base schema extended with one column per custom-field definition.
    pub fn with_custom_fields(definitions: &[CustomFieldDefinition]) -> Self {
        let mut schema = Self::base();
        schema.columns.extend(
            definitions
                .iter()
                .map(|def| ColumnSpec::new(custom_field_column(&def.id), def.kind.column_type())),
        );
        schema
    }

    /// The schema as a BigQuery `schema` object (`{"fields": [...]}`).
    pub fn to_bigquery_fields(&self) -> serde_json::Value {
        serde_json::json!({ "fields": self.columns })
    }
}

/// Column name for a custom field.
///
/// Single source of the `custom_field_<id>` naming, used by both schema
/// building and task flattening.
pub fn custom_field_column(field_id: &str) -> String {
    format!("custom_field_{field_id}")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, kind: FieldKind) -> CustomFieldDefinition {
        CustomFieldDefinition {
            id: id.into(),
            name: String::new(),
            kind,
        }
    }

    // ── Kind → column type mapping ──────────────────────────────────────

    #[test]
    fn number_kind_maps_to_float() {
        assert_eq!(FieldKind::Number.column_type(), ColumnType::Float);
    }

    #[test]
    fn date_kind_maps_to_timestamp() {
        assert_eq!(FieldKind::Date.column_type(), ColumnType::Timestamp);
    }

    #[test]
    fn other_kind_maps_to_string() {
        assert_eq!(FieldKind::Other.column_type(), ColumnType::String);
    }

    #[test]
    fn unknown_declared_kind_deserializes_to_other() {
        let kind: FieldKind = serde_json::from_str("\"drop_down\"").unwrap();
        assert_eq!(kind, FieldKind::Other);
    }

    #[test]
    fn known_kinds_deserialize() {
        assert_eq!(
            serde_json::from_str::<FieldKind>("\"number\"").unwrap(),
            FieldKind::Number
        );
        assert_eq!(
            serde_json::from_str::<FieldKind>("\"date\"").unwrap(),
            FieldKind::Date
        );
    }

    #[test]
    fn definition_without_type_defaults_to_other() {
        let def: CustomFieldDefinition =
            serde_json::from_str(r#"{"id": "f1", "name": "Points"}"#).unwrap();
        assert_eq!(def.kind, FieldKind::Other);
    }

    // ── Base schema ─────────────────────────────────────────────────────

    #[test]
    fn base_schema_order_is_fixed() {
        let schema = TableSchema::base();
        let names: Vec<&str> = schema.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "id",
                "name",
                "description",
                "status",
                "priority",
                "due_date",
                "space_id",
                "list_id",
                "created_at",
                "updated_at",
            ]
        );
    }

    #[test]
    fn base_schema_types() {
        let schema = TableSchema::base();
        let get = |name: &str| {
            schema
                .columns
                .iter()
                .find(|c| c.name == name)
                .unwrap()
                .column_type
        };
        assert_eq!(get("id"), ColumnType::String);
        assert_eq!(get("priority"), ColumnType::Integer);
        assert_eq!(get("due_date"), ColumnType::Timestamp);
        assert_eq!(get("created_at"), ColumnType::Timestamp);
        assert_eq!(get("updated_at"), ColumnType::Timestamp);
    }

    // ── Custom-field columns ────────────────────────────────────────────

    #[test]
    fn custom_fields_appended_in_definition_order() {
        let schema = TableSchema::with_custom_fields(&[
            def("b", FieldKind::Number),
            def("a", FieldKind::Date),
            def("c", FieldKind::Other),
        ]);
        let base_len = TableSchema::base().columns.len();
        let tail: Vec<&str> = schema.columns[base_len..]
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(tail, ["custom_field_b", "custom_field_a", "custom_field_c"]);
    }

    #[test]
    fn custom_field_types_follow_kind() {
        let schema = TableSchema::with_custom_fields(&[
            def("num", FieldKind::Number),
            def("when", FieldKind::Date),
            def("label", FieldKind::Other),
        ]);
        let get = |name: &str| {
            schema
                .columns
                .iter()
                .find(|c| c.name == name)
                .unwrap()
                .column_type
        };
        assert_eq!(get("custom_field_num"), ColumnType::Float);
        assert_eq!(get("custom_field_when"), ColumnType::Timestamp);
        assert_eq!(get("custom_field_label"), ColumnType::String);
    }

    #[test]
    fn no_definitions_yields_base_schema() {
        let schema = TableSchema::with_custom_fields(&[]);
        assert_eq!(schema.columns.len(), TableSchema::base().columns.len());
    }

    // ── BigQuery serialization ──────────────────────────────────────────

    #[test]
    fn column_types_serialize_to_legacy_names() {
        assert_eq!(
            serde_json::to_value(ColumnType::String).unwrap(),
            serde_json::json!("STRING")
        );
        assert_eq!(
            serde_json::to_value(ColumnType::Integer).unwrap(),
            serde_json::json!("INTEGER")
        );
        assert_eq!(
            serde_json::to_value(ColumnType::Float).unwrap(),
            serde_json::json!("FLOAT")
        );
        assert_eq!(
            serde_json::to_value(ColumnType::Timestamp).unwrap(),
            serde_json::json!("TIMESTAMP")
        );
    }

    #[test]
    fn bigquery_fields_shape() {
        let schema = TableSchema::with_custom_fields(&[def("f1", FieldKind::Number)]);
        let fields = schema.to_bigquery_fields();
        let list = fields["fields"].as_array().unwrap();
        assert_eq!(list.len(), 11);
        assert_eq!(list[0], serde_json::json!({"name": "id", "type": "STRING"}));
        assert_eq!(
            list[10],
            serde_json::json!({"name": "custom_field_f1", "type": "FLOAT"})
        );
    }

    #[test]
    fn custom_field_column_name() {
        assert_eq!(custom_field_column("abc-123"), "custom_field_abc-123");
    }
}
