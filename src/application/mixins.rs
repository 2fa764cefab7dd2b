// Convenience plot accessors - ergonomic wrappers that only build parameters
use crate::application::dashboard::Dashboard;
use crate::application::data_accessor::PlotParams;
use crate::domain::figure::PlotResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

/// Dashboards keyed by seasons and leagues.
#[async_trait]
pub trait SeasonsLeagues: Dashboard {
    async fn plot_seasons_leagues(
        &self,
        seasons: &[i32],
        leagues: &[&str],
    ) -> anyhow::Result<PlotResult> {
        let mut params = PlotParams::new();
        params.insert("seasons".to_string(), json!(seasons));
        params.insert("leagues".to_string(), json!(leagues));
        self.plot(&params).await
    }
}

/// Dashboards keyed by a player plus seasons and leagues.
#[async_trait]
pub trait PlayerSeasonsLeagues: Dashboard {
    async fn plot_player_seasons_leagues(
        &self,
        player: &str,
        seasons: &[i32],
        leagues: &[&str],
    ) -> anyhow::Result<PlotResult> {
        let mut params = PlotParams::new();
        params.insert("player".to_string(), json!(player));
        params.insert("seasons".to_string(), json!(seasons));
        params.insert("leagues".to_string(), json!(leagues));
        self.plot(&params).await
    }
}

/// Dashboards keyed by a single match date and team.
#[async_trait]
pub trait MatchTeam: Dashboard {
    async fn plot_match(&self, match_date: NaiveDate, team: &str) -> anyhow::Result<PlotResult> {
        let mut params = PlotParams::new();
        params.insert("match_date".to_string(), json!(match_date.to_string()));
        params.insert("team".to_string(), json!(team));
        self.plot(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard::base_field_set;
    use crate::application::data_accessor::DataAccessor;
    use crate::domain::fields::FieldValues;
    use crate::domain::figure::Figure;
    use polars::prelude::DataFrame;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    struct RecordingAccessor {
        seen: Mutex<Vec<PlotParams>>,
    }

    #[async_trait]
    impl DataAccessor for RecordingAccessor {
        async fn get_data(
            &self,
            _data_requester_name: &str,
            params: &PlotParams,
        ) -> anyhow::Result<DataFrame> {
            self.seen.lock().unwrap().push(params.clone());
            Ok(DataFrame::empty())
        }
    }

    struct AnyTable {
        accessor: Arc<dyn DataAccessor>,
        values: FieldValues,
    }

    #[async_trait]
    impl Dashboard for AnyTable {
        fn data_accessor(&self) -> &Arc<dyn DataAccessor> {
            &self.accessor
        }

        fn datasource_name(&self) -> String {
            "any_table".to_string()
        }

        fn required_data_columns(&self) -> Vec<(String, String)> {
            Vec::new()
        }

        fn field_values(&self) -> &FieldValues {
            &self.values
        }

        fn field_values_mut(&mut self) -> &mut FieldValues {
            &mut self.values
        }

        fn render(&self, _data: &DataFrame) -> anyhow::Result<PlotResult> {
            Ok(PlotResult::new(Figure::new(
                (1.0, 1.0),
                100,
                "white".to_string(),
            )))
        }
    }

    impl SeasonsLeagues for AnyTable {}
    impl MatchTeam for AnyTable {}

    fn dashboard_with_recorder() -> (AnyTable, Arc<RecordingAccessor>) {
        let recorder = Arc::new(RecordingAccessor {
            seen: Mutex::new(Vec::new()),
        });
        let dashboard = AnyTable {
            accessor: recorder.clone(),
            values: FieldValues::new(base_field_set()),
        };
        (dashboard, recorder)
    }

    #[tokio::test]
    async fn test_seasons_leagues_forwards_params() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .plot_seasons_leagues(&[2024, 2025], &["Premier League"])
            .await
            .unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].get("seasons"), Some(&json!([2024, 2025])));
        assert_eq!(seen[0].get("leagues"), Some(&json!(["Premier League"])));
    }

    #[tokio::test]
    async fn test_match_team_forwards_params() {
        let (dashboard, recorder) = dashboard_with_recorder();
        let date = NaiveDate::from_ymd_opt(2025, 8, 23).unwrap();
        dashboard.plot_match(date, "Casual FC").await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].get("match_date"), Some(&Value::from("2025-08-23")));
        assert_eq!(seen[0].get("team"), Some(&Value::from("Casual FC")));
    }
}
