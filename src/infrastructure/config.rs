// Theme configuration loading
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    pub theme: ThemeSettings,
    /// League name -> (primary, secondary) colour pair, used as scatter
    /// dashboard defaults.
    #[serde(default)]
    pub league_colour_maps: HashMap<String, (String, String)>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    pub facecolor: String,
    pub textcolor: String,
}

pub fn load_theme_config() -> anyhow::Result<ThemeConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/theme"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::is_color_like;

    #[test]
    fn test_load_theme_config() {
        let theme = load_theme_config().unwrap();
        assert!(is_color_like(&theme.theme.facecolor));
        assert!(is_color_like(&theme.theme.textcolor));

        let (primary, secondary) = theme.league_colour_maps.get("Premier League").unwrap();
        assert_eq!(primary, "red");
        assert_eq!(secondary, "white");
    }
}
