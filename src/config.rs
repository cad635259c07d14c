use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    order::{ResourceOrder, SortMode},
    style::{AnsiStyler, PlainStyler, Styler},
    types::resource::{ResourceFormat, ResourceRef},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Style only when the console crate reports colors as enabled.
    #[default]
    Auto,
    Always,
    Never,
}

/// Display settings a caller picks once and passes to every sort and
/// render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct DisplayConfig {
    pub sort_mode: SortMode,
    pub resource_format: ResourceFormat,
    pub color: ColorChoice,
}

impl DisplayConfig {
    pub fn resource_order(&self) -> ResourceOrder {
        ResourceOrder::new(self.sort_mode)
    }

    pub fn styler(&self) -> Box<dyn Styler + Send + Sync> {
        let styled = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => console::colors_enabled(),
        };

        if styled {
            Box::new(AnsiStyler::default())
        } else {
            Box::new(PlainStyler)
        }
    }

    /// Sorts `resources` in place and renders each one on its own line.
    pub fn render_sorted(&self, resources: &mut [ResourceRef]) -> Vec<String> {
        self.resource_order().sort(resources);

        let styler = self.styler();
        resources
            .iter()
            .map(|r| r.render(self.resource_format, styler.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = DisplayConfig::default();

        assert_eq!(config.sort_mode, SortMode::Name);
        assert_eq!(config.resource_format, ResourceFormat::Hint);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_deserialize_partial() -> anyhow::Result<()> {
        let config: DisplayConfig = serde_json::from_str(r#"{"sort_mode":"id"}"#)?;

        assert_eq!(config.sort_mode, SortMode::Id);
        assert_eq!(config.resource_format, ResourceFormat::Hint);
        assert_eq!(config.color, ColorChoice::Auto);

        let config: DisplayConfig =
            serde_json::from_str(r#"{"resource_format":"id_and_name","color":"never"}"#)?;
        assert_eq!(config.sort_mode, SortMode::Name);
        assert_eq!(config.resource_format, ResourceFormat::IdAndName);
        assert_eq!(config.color, ColorChoice::Never);

        let empty: DisplayConfig = serde_json::from_str("{}")?;
        assert_eq!(empty, DisplayConfig::default());
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_unknown_mode() {
        assert!(serde_json::from_str::<DisplayConfig>(r#"{"sort_mode":"size"}"#).is_err());
    }

    #[test]
    fn test_builder() {
        let config = DisplayConfigBuilder::default()
            .sort_mode(SortMode::Id)
            .color(ColorChoice::Never)
            .build()
            .unwrap();

        assert_eq!(config.resource_order(), ResourceOrder::by_id());
        assert_eq!(config.resource_format, ResourceFormat::Hint);
    }

    #[test]
    fn test_render_sorted_plain() {
        let _ = env_logger::builder().is_test(true).try_init();

        let config = DisplayConfigBuilder::default()
            .resource_format(ResourceFormat::IdAndName)
            .color(ColorChoice::Never)
            .build()
            .unwrap();
        let mut resources = vec![
            ResourceRef::new("sg-3", "", 0),
            ResourceRef::new("sg-2", "web", 0),
            ResourceRef::new("sg-1", "db", 0),
        ];

        assert_eq!(
            config.render_sorted(&mut resources),
            vec!["sg-1 [db]", "sg-2 [web]", "sg-3"]
        );
    }

    #[test]
    fn test_color_always() {
        let config = DisplayConfigBuilder::default()
            .resource_format(ResourceFormat::IdAndName)
            .color(ColorChoice::Always)
            .build()
            .unwrap();
        let mut resources = vec![ResourceRef::new("sg-1", "db", 0)];

        let lines = config.render_sorted(&mut resources);
        assert!(lines[0].contains('\u{1b}'));
    }
}
