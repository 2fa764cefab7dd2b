// CSV-file data accessor - sample datasource for the bundled recipes
use crate::application::data_accessor::{DataAccessor, PlotParams};
use anyhow::Context;
use async_trait::async_trait;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Serves dashboards from CSV files on disk. Each requester name maps to
/// one file under `data_dir`; parameters are ignored since a sample file
/// already holds exactly one query's worth of rows.
pub struct CsvDataAccessor {
    data_dir: PathBuf,
    sources: HashMap<String, String>,
}

impl CsvDataAccessor {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            sources: HashMap::new(),
        }
    }

    pub fn with_source(
        mut self,
        data_requester_name: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        self.sources
            .insert(data_requester_name.into(), file_name.into());
        self
    }
}

#[async_trait]
impl DataAccessor for CsvDataAccessor {
    async fn get_data(
        &self,
        data_requester_name: &str,
        _params: &PlotParams,
    ) -> anyhow::Result<DataFrame> {
        let file_name = self.sources.get(data_requester_name).with_context(|| {
            format!("no sample data registered for requester '{data_requester_name}'")
        })?;
        let path = self.data_dir.join(file_name);

        tracing::debug!("reading sample data from {}", path.display());
        let data = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))
            .with_context(|| format!("failed to open {}", path.display()))?
            .finish()
            .with_context(|| format!("failed to read {}", path.display()))?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard::Dashboard;
    use crate::application::mixins::PlayerSeasonsLeagues;
    use crate::application::pizza::PizzaDashboard;
    use std::sync::Arc;

    fn sample_accessor() -> CsvDataAccessor {
        CsvDataAccessor::new("demos/data")
            .with_source("player_season_stats", "pizza_example.csv")
    }

    #[tokio::test]
    async fn test_reads_registered_csv() {
        let accessor = sample_accessor();
        let data = accessor
            .get_data("player_season_stats", &PlotParams::new())
            .await
            .unwrap();
        assert!(data.height() > 0);
        assert!(
            data.get_column_names()
                .iter()
                .any(|name| name.as_str() == "Player")
        );
    }

    #[tokio::test]
    async fn test_unknown_requester_fails() {
        let accessor = sample_accessor();
        let err = accessor
            .get_data("no_such_dashboard", &PlotParams::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no_such_dashboard"));
    }

    #[tokio::test]
    async fn test_end_to_end_pizza_from_csv() {
        tracing_subscriber::fmt()
            .with_env_filter("footdash=debug")
            .try_init()
            .ok();

        let dashboard = PizzaDashboard::new("player_season_stats", Arc::new(sample_accessor()));
        let result = dashboard
            .plot_player_seasons_leagues("John Smith", &[2025], &["Premier League"])
            .await
            .unwrap();
        assert!(result.axes("pizza").is_some());
    }
}
