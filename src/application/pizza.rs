// Pizza dashboard recipe - percentile pizza for a single player season
use crate::application::dashboard::{Dashboard, base_field_set};
use crate::application::data_accessor::DataAccessor;
use crate::application::mixins::PlayerSeasonsLeagues;
use crate::domain::fields::{FieldDef, FieldKind, FieldSet, FieldValues};
use crate::domain::figure::{AxesSpec, Figure, PlotResult};
use polars::prelude::DataFrame;
use serde_json::json;
use std::sync::{Arc, LazyLock};

static PIZZA_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::new("PizzaDashboard")
        .with_parent(base_field_set())
        .field(FieldDef::new(
            "fig_size",
            "Figure size",
            FieldKind::FigSize,
            json!([6.0, 7.5]),
        ))
        .field(FieldDef::new(
            "straight_line_color",
            "Straight line colour",
            FieldKind::Color,
            json!("#EBEBE9"),
        ))
        .field(FieldDef::new(
            "slice_colormap",
            "Slice colour map",
            FieldKind::ColorMap,
            json!("coolwarm_r"),
        ))
        .field(FieldDef::new(
            "center_logo_url",
            "URL of the centre logo",
            FieldKind::Any,
            json!(null),
        ))
        .field(FieldDef::new(
            "number_of_inner_grid_rings",
            "Number of inner grid rings",
            FieldKind::Count,
            json!(1),
        ))
});

/// A pizza chart of a player's percentile ranks. The datasource name is
/// chosen per instance so the same recipe can serve different stat packs.
pub struct PizzaDashboard {
    data_name: String,
    accessor: Arc<dyn DataAccessor>,
    values: FieldValues,
}

impl PizzaDashboard {
    pub fn new(data_name: impl Into<String>, accessor: Arc<dyn DataAccessor>) -> Self {
        Self {
            data_name: data_name.into(),
            accessor,
            values: FieldValues::new(LazyLock::force(&PIZZA_FIELDS)),
        }
    }
}

#[async_trait::async_trait]
impl Dashboard for PizzaDashboard {
    fn data_accessor(&self) -> &Arc<dyn DataAccessor> {
        &self.accessor
    }

    fn datasource_name(&self) -> String {
        self.data_name.clone()
    }

    fn required_data_columns(&self) -> Vec<(String, String)> {
        [
            ("Player", "Player name"),
            ("Team", "Team name"),
            ("Competition", "Competitions included in the data"),
            ("Minutes", "Minutes played"),
            ("Season", "Which season this data is for"),
            ("Age", "Age of the player"),
            (
                "All Competitions",
                "All competitions to which the player was compared",
            ),
        ]
        .iter()
        .map(|(column, meaning)| (column.to_string(), meaning.to_string()))
        .collect()
    }

    fn field_values(&self) -> &FieldValues {
        &self.values
    }

    fn field_values_mut(&mut self) -> &mut FieldValues {
        &mut self.values
    }

    fn render(&self, data: &DataFrame) -> anyhow::Result<PlotResult> {
        anyhow::ensure!(data.height() > 0, "no rows returned for {}", self.data_name);

        let size = self.values.get_pair("fig_size")?.unwrap_or((6.0, 7.5));
        let facecolor = self
            .values
            .get_str("facecolor")?
            .unwrap_or("#fbf9f4")
            .to_string();

        let mut result = PlotResult::new(Figure::new(size, 100, facecolor.clone()));
        result.add_axes(
            "pizza",
            AxesSpec::new([0.0, 0.02, 1.0, 0.9])
                .polar()
                .with_facecolor(facecolor.clone()),
        );
        result.add_axes(
            "title",
            AxesSpec::new([0.0, 0.92, 1.0, 0.08])
                .with_facecolor(facecolor.clone())
                .axis_off(),
        );
        result.add_axes(
            "endnote",
            AxesSpec::new([0.0, 0.0, 1.0, 0.02])
                .with_facecolor(facecolor)
                .axis_off(),
        );
        Ok(result)
    }
}

impl PlayerSeasonsLeagues for PizzaDashboard {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::data_accessor::PlotParams;
    use polars::df;
    use serde_json::Value;

    struct PizzaStub;

    #[async_trait::async_trait]
    impl DataAccessor for PizzaStub {
        async fn get_data(
            &self,
            data_requester_name: &str,
            params: &PlotParams,
        ) -> anyhow::Result<DataFrame> {
            assert_eq!(data_requester_name, "player_season_stats");
            assert_eq!(params.get("player"), Some(&Value::from("John Smith")));
            Ok(df!(
                "Player" => ["John Smith"],
                "Team" => ["Casual FC"],
                "Competition" => ["Premier League"],
                "Minutes" => [2300.0],
                "Season" => [2025],
                "Age" => [27],
                "All Competitions" => ["Premier League, FA Cup"]
            )
            .unwrap())
        }
    }

    #[tokio::test]
    async fn test_pizza_plot_layout() {
        let dashboard = PizzaDashboard::new("player_season_stats", Arc::new(PizzaStub));
        let result = dashboard
            .plot_player_seasons_leagues("John Smith", &[2025], &["Premier League"])
            .await
            .unwrap();

        assert_eq!(result.figure.size, (6.0, 7.5));
        assert!(result.axes("pizza").is_some_and(|a| a.polar));
        assert!(result.axes("title").is_some_and(|a| a.axis_off));
        assert!(result.axes("endnote").is_some());
    }

    #[tokio::test]
    async fn test_pizza_fields_configure_render() {
        let mut dashboard = PizzaDashboard::new("player_season_stats", Arc::new(PizzaStub));
        dashboard
            .field_values_mut()
            .set("fig_size", json!([4.0, 5.0]))
            .unwrap();
        dashboard
            .field_values_mut()
            .set("facecolor", json!("white"))
            .unwrap();

        let result = dashboard
            .plot_player_seasons_leagues("John Smith", &[2025], &["Premier League"])
            .await
            .unwrap();
        assert_eq!(result.figure.size, (4.0, 5.0));
        assert_eq!(result.figure.facecolor, "white");
    }

    #[test]
    fn test_pizza_describes_inherited_fields() {
        let dashboard = PizzaDashboard::new("player_season_stats", Arc::new(PizzaStub));
        let names: Vec<String> = dashboard
            .describe_adjustable_fields()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert!(names.contains(&"slice_colormap".to_string()));
        assert!(names.contains(&"facecolor".to_string()));
        let own = names.iter().position(|n| n == "fig_size").unwrap();
        let inherited = names.iter().position(|n| n == "facecolor").unwrap();
        assert!(own < inherited);
    }
}
