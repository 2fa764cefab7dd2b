// Data accessor trait - how dashboards obtain their tabular data
use async_trait::async_trait;
use polars::prelude::DataFrame;
use serde_json::{Map, Value};

/// Open-ended keyword parameters forwarded to the accessor
/// (player, seasons, leagues, match date, ...).
pub type PlotParams = Map<String, Value>;

#[async_trait]
pub trait DataAccessor: Send + Sync {
    /// Fetch the table for the named requester with the given parameters.
    ///
    /// How the table is produced (file, database, network) is the
    /// implementation's business; errors are surfaced to the caller as-is.
    async fn get_data(
        &self,
        data_requester_name: &str,
        params: &PlotParams,
    ) -> anyhow::Result<DataFrame>;
}
