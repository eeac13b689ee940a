//! Assembly of the complete chart script.
//!
//! A [`ChartScript`] combines three sources of options:
//!
//! 1. the path-addressed [`OptionStore`], which wins on conflicts
//! 2. the checked [`SectionSet`], merged at `<section>/<option>`
//! 3. raw section lines, pasted into their section's block
//!
//! and renders them, followed by the series, as
//! `var chart<id> = new Highcharts.Chart({...});`.

use chartopts_option_store::cleanup::{clean_literal, join_present};
use chartopts_option_store::{literal, OptionPath, OptionStore, OptionValue};
use tracing::{debug, trace, warn};

use crate::catalog::{CatalogOption, SectionKey};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::id::generate_id;
use crate::section::{Section, SectionSet};
use crate::series::Series;

const ENTRY_SEPARATOR: &str = ", ";
const BLOCK_SEPARATOR: &str = ",\n";

/// A chart: its options, sections and series.
#[derive(Clone, Debug)]
pub struct ChartScript {
    id: String,
    config: ChartConfig,
    store: OptionStore,
    sections: SectionSet,
    series: Vec<Series>,
}

impl ChartScript {
    /// Create a chart from its configuration.
    ///
    /// Options preset in the configuration are applied to the store.
    pub fn new(config: ChartConfig) -> Result<Self> {
        let id = match config.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => generate_id(config.id_length),
        };
        let sections = if config.section_defaults {
            SectionSet::with_defaults()
        } else {
            SectionSet::new()
        };

        let store = OptionStore::new();
        for (path, value) in &config.options {
            store.set(path.as_str(), value.clone())?;
        }

        debug!(id = %id, presets = config.options.len(), "created chart");
        Ok(ChartScript {
            id,
            config,
            store,
            sections,
            series: Vec::new(),
        })
    }

    /// A chart with default configuration and the given id.
    pub fn with_id(id: &str) -> Self {
        let id = id.trim();
        ChartScript {
            id: if id.is_empty() {
                generate_id(ChartConfig::default().id_length)
            } else {
                id.to_string()
            },
            config: ChartConfig::default(),
            store: OptionStore::new(),
            sections: SectionSet::new(),
            series: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The JavaScript variable holding the chart.
    pub fn chart_name(&self) -> String {
        format!("chart{}", self.id)
    }

    /// The container element id: the configured one or `<chart name>-container`.
    pub fn render_to(&self) -> String {
        match self.config.render_to.as_deref().map(str::trim) {
            Some(target) if !target.is_empty() => target.to_string(),
            _ => format!("{}-container", self.chart_name()),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChartConfig {
        &mut self.config
    }

    pub fn store(&self) -> &OptionStore {
        &self.store
    }

    pub fn set_option(&self, path: impl Into<OptionPath>, value: impl Into<OptionValue>) -> Result<()> {
        Ok(self.store.set(path, value)?)
    }

    pub fn get_option(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        Ok(self.store.get(path)?)
    }

    pub fn remove_option(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        Ok(self.store.remove(path)?)
    }

    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    pub fn section_mut(&mut self, key: SectionKey) -> &mut Section {
        self.sections.section_mut(key)
    }

    /// Add a checked option to its section.
    pub fn add_section_option(
        &mut self,
        option: CatalogOption,
        value: impl Into<OptionValue>,
    ) -> Result<()> {
        self.sections.add_option(option, value)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Set the rendering type of every series.
    pub fn set_series_type(&mut self, series_type: impl ToString) {
        let series_type = series_type.to_string();
        for series in &mut self.series {
            series.set_type(&series_type);
        }
    }

    /// The store serialization alone, without sections, series or injected options.
    pub fn options_js(&self) -> Option<String> {
        self.store.serialize()
    }

    /// Render the chart script.
    ///
    /// Rendering works on a copy of the options, so it can be repeated.
    pub fn to_js(&self) -> Result<String> {
        let working = OptionStore::from(self.store.snapshot());
        self.merge_sections(&working)?;
        self.inject_chart_options(&working)?;

        let mut blocks = Vec::new();
        let root = working.snapshot();
        for (key, value) in &root {
            let raw = SectionKey::from_name(key)
                .map(|k| self.sections.section(k).raw_options())
                .unwrap_or_default();
            if let Some(block) = render_block(key, value, raw) {
                blocks.push(block);
            }
        }
        for section in self.sections.iter() {
            if !section.raw_options().is_empty() && !root.contains_key(section.name()) {
                blocks.push(format!(
                    "{}: {{{}}}",
                    section.name(),
                    join_present(section.raw_options(), ENTRY_SEPARATOR)
                ));
            }
        }
        if !self.series.is_empty() {
            blocks.push(format!(
                "series: [\n{}\n]",
                join_present(self.series.iter().map(Series::to_js), BLOCK_SEPARATOR)
            ));
        }

        let script = format!(
            "var {} = new {}({{\n{}\n}});",
            self.chart_name(),
            self.config.constructor,
            join_present(&blocks, BLOCK_SEPARATOR)
        );
        trace!(chart = %self.chart_name(), blocks = blocks.len(), "rendered chart");

        if self.config.clean_output {
            Ok(clean_literal(&script))
        } else {
            Ok(script)
        }
    }

    /// Copy section options into `working` where the store has none.
    fn merge_sections(&self, working: &OptionStore) -> Result<()> {
        for section in self.sections.iter() {
            for (option, value) in section.options() {
                let path = OptionPath::from_segments([section.name(), option.name()]);
                if working.contains(&path)? {
                    debug!(option = %option, "store overrides section option");
                    continue;
                }
                working.set(&path, value.clone())?;
            }
        }
        Ok(())
    }

    fn inject_chart_options(&self, working: &OptionStore) -> Result<()> {
        working.set("/chart/renderTo", self.render_to())?;

        let callback = self
            .config
            .register_callback
            .as_deref()
            .map(str::trim)
            .filter(|cb| !cb.is_empty());
        if let Some(callback) = callback {
            working.set(
                "/chart/events/load",
                OptionValue::raw(format!(
                    "function(event) {{ this.id = {}; {}(this, true); }}",
                    literal::quote(&self.chart_name()),
                    callback
                )),
            )?;
        }
        Ok(())
    }
}

/// One top-level `key: value` block, with raw section lines appended.
fn render_block(key: &str, value: &OptionValue, raw: &[String]) -> Option<String> {
    let key_text = match literal::encode_key(key) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "dropping chart block");
            return None;
        }
    };

    let value_text = match (value, raw.is_empty()) {
        (_, true) => literal::encode_value(value),
        (OptionValue::Map(map), false) => {
            let entries = literal::encode_entries(map).unwrap_or_default();
            format!(
                "{{{}}}",
                join_present(
                    std::iter::once(entries.as_str()).chain(raw.iter().map(String::as_str)),
                    ENTRY_SEPARATOR
                )
            )
        }
        (_, false) => {
            warn!(section = key, "section is not a mapping, dropping its raw options");
            literal::encode_value(value)
        }
    };

    (!value_text.is_empty()).then(|| format!("{}: {}", key_text, value_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartopts_option_store::ZoomType;

    fn quiet(id: &str) -> ChartScript {
        let mut chart = ChartScript::with_id(id);
        chart.config_mut().register_callback = None;
        chart.config_mut().render_to = Some("box".to_string());
        chart
    }

    #[test]
    fn chart_name_uses_id() {
        let chart = ChartScript::with_id(" 42 ");
        assert_eq!(chart.id(), "42");
        assert_eq!(chart.chart_name(), "chart42");
        assert_eq!(chart.render_to(), "chart42-container");
    }

    #[test]
    fn generated_id_has_configured_length() {
        let chart = ChartScript::new(ChartConfig {
            id_length: 12,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(chart.id().len(), 12);
    }

    #[test]
    fn minimal_script() {
        let chart = quiet("1");
        assert_eq!(
            chart.to_js().unwrap(),
            "var chart1 = new Highcharts.Chart({\nchart: {renderTo: 'box'}\n});"
        );
    }

    #[test]
    fn load_handler_registers_chart() {
        let chart = ChartScript::with_id("7");
        let js = chart.to_js().unwrap();
        assert!(js.contains("renderTo: 'chart7-container'"));
        assert!(js.contains(
            "events: {load: function(event) { this.id = 'chart7'; registerChart(this, true); }}"
        ));
    }

    #[test]
    fn store_wins_over_section() {
        let mut chart = quiet("1");
        chart
            .add_section_option(CatalogOption::ChartZoomType, ZoomType::X)
            .unwrap();
        chart
            .add_section_option(CatalogOption::ChartInverted, true)
            .unwrap();
        chart.set_option("/chart/zoomType", ZoomType::XY).unwrap();
        let js = chart.to_js().unwrap();
        assert!(js.contains("chart: {zoomType: 'xy', inverted: true, renderTo: 'box'}"));
    }

    #[test]
    fn raw_lines_join_store_block() {
        let mut chart = quiet("1");
        chart.set_option("/plotOptions/series/stacking", "normal").unwrap();
        chart
            .section_mut(SectionKey::PlotOptions)
            .add_raw_option("line: {lineWidth: 3},");
        chart.section_mut(SectionKey::Legend).add_raw_option("enabled: false");
        let js = chart.to_js().unwrap();
        assert!(js.contains("plotOptions: {series: {stacking: 'normal'}, line: {lineWidth: 3}}"));
        assert!(js.contains("legend: {enabled: false}"));
        assert!(!js.contains(", }"));
    }

    #[test]
    fn raw_trailing_separator_survives_without_cleanup() {
        let mut chart = quiet("1");
        chart.config_mut().clean_output = false;
        chart.section_mut(SectionKey::Legend).add_raw_option("enabled: false,");
        assert!(chart.to_js().unwrap().contains("legend: {enabled: false,}"));
    }

    #[test]
    fn series_type_applies_to_all() {
        let mut chart = quiet("1");
        chart.add_series(Series::new("a"));
        chart.add_series(Series::new("b"));
        chart.set_series_type("bar");
        assert!(chart.series().iter().all(|s| s.series_type() == Some("bar")));
        let js = chart.to_js().unwrap();
        assert!(js.contains(
            "series: [\n{name: 'a', data: [], type: 'bar'},\n{name: 'b', data: [], type: 'bar'}\n]"
        ));
    }

    #[test]
    fn rendering_is_repeatable() {
        let chart = ChartScript::with_id("9");
        chart.set_option("/title/text", "t").unwrap();
        assert_eq!(chart.to_js().unwrap(), chart.to_js().unwrap());
        assert_eq!(chart.options_js().unwrap(), "title: {text: 't'}");
    }

    #[test]
    fn section_conflicting_with_store_leaf_fails() {
        let mut chart = quiet("1");
        chart.set_option("/title", "flat").unwrap();
        chart.add_section_option(CatalogOption::TitleText, "x").unwrap();
        assert!(chart.to_js().is_err());
    }
}
