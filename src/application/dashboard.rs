// Dashboard contract - the shared fetch -> validate -> render pipeline
use crate::application::data_accessor::{DataAccessor, PlotParams};
use crate::domain::fields::{FieldDef, FieldKind, FieldSet, FieldValues};
use crate::domain::figure::PlotResult;
use polars::prelude::DataFrame;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{dashboard} is missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        dashboard: String,
        columns: Vec<String>,
    },
}

/// Fields every dashboard inherits, whatever its recipe.
pub static BASE_DASHBOARD_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::new("Dashboard")
        .field(FieldDef::new(
            "facecolor",
            "Figure background colour",
            FieldKind::Color,
            json!("#fbf9f4"),
        ))
        .field(FieldDef::new(
            "textcolor",
            "Default text colour",
            FieldKind::Color,
            json!("black"),
        ))
        .field(FieldDef::new(
            "font_size",
            "Base font size",
            FieldKind::FontSize,
            json!(12),
        ))
});

pub fn base_field_set() -> &'static FieldSet {
    LazyLock::force(&BASE_DASHBOARD_FIELDS)
}

/// One adjustable field with its currently configured value.
#[derive(Debug, Clone)]
pub struct FieldDescription {
    pub name: String,
    pub description: String,
    pub value: Value,
}

impl fmt::Display for FieldDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (current: {})",
            self.name, self.description, self.value
        )
    }
}

/// Contract every dashboard recipe implements. The recipe supplies its
/// datasource name, its column requirements and its render step; the
/// provided `plot` drives the pipeline and is not meant to be overridden.
#[async_trait::async_trait]
pub trait Dashboard: Send + Sync {
    fn data_accessor(&self) -> &Arc<dyn DataAccessor>;

    /// Stable name identifying which dataset this dashboard consumes.
    fn datasource_name(&self) -> String;

    /// Required column name -> human-readable meaning. Empty means the
    /// dashboard accepts any table.
    fn required_data_columns(&self) -> Vec<(String, String)>;

    fn field_values(&self) -> &FieldValues;

    fn field_values_mut(&mut self) -> &mut FieldValues;

    /// Build the renderable result from a validated table. By contract
    /// every required column is present by the time this runs.
    fn render(&self, data: &DataFrame) -> anyhow::Result<PlotResult>;

    /// Fetch the table, check the column requirements, delegate to
    /// `render`. Accessor failures propagate unmodified; a missing column
    /// fails the call before any render work happens.
    async fn plot(&self, params: &PlotParams) -> anyhow::Result<PlotResult> {
        let name = self.datasource_name();
        tracing::debug!("fetching data for dashboard {name}");
        let data = self.data_accessor().get_data(&name, params).await?;

        let missing = missing_columns(&data, &self.required_data_columns());
        if !missing.is_empty() {
            return Err(DashboardError::MissingColumns {
                dashboard: name,
                columns: missing,
            }
            .into());
        }

        tracing::debug!(rows = data.height(), "rendering dashboard {name}");
        self.render(&data)
    }

    /// Every adjustable field on this dashboard and its ancestors, own
    /// fields first, annotated with the currently configured value.
    fn describe_adjustable_fields(&self) -> Vec<FieldDescription> {
        let values = self.field_values();
        values
            .field_set()
            .all_fields()
            .into_iter()
            .map(|def| FieldDescription {
                name: def.name.to_string(),
                description: def.description.to_string(),
                value: values
                    .get(def.name)
                    .map(|value| value.clone())
                    .unwrap_or(Value::Null),
            })
            .collect()
    }
}

/// Required columns absent from the table, sorted for stable reporting.
fn missing_columns(data: &DataFrame, required: &[(String, String)]) -> Vec<String> {
    let present: HashSet<&str> = data
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    let mut missing: Vec<String> = required
        .iter()
        .map(|(column, _)| column)
        .filter(|column| !present.contains(column.as_str()))
        .cloned()
        .collect();
    missing.sort();
    missing
}
