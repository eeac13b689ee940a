//! The section model: checked catalog options plus raw option lines.
//!
//! A section is a named top-level block of the chart (`title`, `legend`,
//! ...). Options can be added in two ways:
//!
//! ```rust
//! use chartopts_chart::{CatalogOption, Section, SectionKey};
//!
//! let mut title = Section::new(SectionKey::Title);
//! title.add_option(CatalogOption::TitleText, "My first chart").unwrap();
//! // or, unchecked:
//! title.add_raw_option("margin: 20");
//!
//! assert_eq!(title.to_js().unwrap(), "title: {text: 'My first chart', margin: 20}");
//! ```
//!
//! Catalog options are checked against the section and their value kind;
//! raw lines are pasted verbatim and are the only way to fill `plotOptions`.

use chartopts_option_store::cleanup::join_present;
use chartopts_option_store::{literal, OptionValue};
use tracing::trace;

use crate::catalog::{CatalogOption, SectionKey};
use crate::error::{ChartError, Result};

const ENTRY_SEPARATOR: &str = ", ";

/// One top-level block of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    key: SectionKey,
    options: Vec<(CatalogOption, OptionValue)>,
    raw_options: Vec<String>,
}

impl Section {
    /// An empty section.
    pub fn new(key: SectionKey) -> Self {
        Section {
            key,
            options: Vec::new(),
            raw_options: Vec::new(),
        }
    }

    /// A section pre-filled with every catalog default it declares.
    pub fn with_defaults(key: SectionKey) -> Self {
        let mut section = Section::new(key);
        for option in CatalogOption::for_section(key) {
            if let Some(value) = option.default_value() {
                section.options.push((option, value));
            }
        }
        section
    }

    pub fn key(&self) -> SectionKey {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Add (or replace) a catalog option.
    ///
    /// # Errors
    ///
    /// - [`ChartError::WrongSection`] when the option belongs elsewhere
    /// - [`ChartError::InvalidValue`] when `value` is null
    /// - [`ChartError::KindMismatch`] when the value has the wrong kind
    pub fn add_option(
        &mut self,
        option: CatalogOption,
        value: impl Into<OptionValue>,
    ) -> Result<()> {
        let value = value.into();
        if option.section() != self.key || !self.key.accepts_catalog_options() {
            return Err(ChartError::WrongSection {
                option: option.to_string(),
                section: self.name().to_string(),
            });
        }
        if value.is_null() {
            return Err(ChartError::InvalidValue {
                option: option.to_string(),
            });
        }
        if !option.kind().accepts(&value) {
            return Err(ChartError::KindMismatch {
                option: option.to_string(),
                expected: option.kind().as_str(),
                found: value.kind_name(),
            });
        }

        trace!(option = %option, "add section option");
        match self.options.iter_mut().find(|(existing, _)| *existing == option) {
            Some(slot) => slot.1 = value,
            None => self.options.push((option, value)),
        }
        Ok(())
    }

    /// Remove a catalog option, returning its value.
    pub fn remove_option(&mut self, option: CatalogOption) -> Option<OptionValue> {
        let index = self
            .options
            .iter()
            .position(|(existing, _)| *existing == option)?;
        Some(self.options.remove(index).1)
    }

    pub fn option(&self, option: CatalogOption) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(existing, _)| *existing == option)
            .map(|(_, value)| value)
    }

    /// Add an unchecked `name: value` line. Blank lines are ignored.
    pub fn add_raw_option(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.raw_options.push(line.to_string());
        }
    }

    pub fn options(&self) -> &[(CatalogOption, OptionValue)] {
        &self.options
    }

    pub fn raw_options(&self) -> &[String] {
        &self.raw_options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.raw_options.is_empty()
    }

    /// Add the axis title block. Only meaningful on axis sections.
    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        self.add_raw_option(&format!(
            "title: {{rotation: 0, text: {}, align: 'middle'}}",
            literal::quote(title)
        ));
    }

    /// The `key: value` text of every catalog option, in insertion order.
    pub fn option_entries(&self) -> Vec<String> {
        self.options
            .iter()
            .filter_map(|(option, value)| {
                let text = literal::encode_value(value);
                (!text.is_empty()).then(|| format!("{}: {}", option.name(), text))
            })
            .collect()
    }

    /// `name: {options, raw options}`, or `None` for an empty section.
    pub fn to_js(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let body = join_present(
            self.option_entries().iter().chain(self.raw_options.iter()),
            ENTRY_SEPARATOR,
        );
        Some(format!("{}: {{{}}}", self.name(), body))
    }
}

/// One section per [`SectionKey`], in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSet {
    sections: Vec<Section>,
}

impl SectionSet {
    /// Empty sections for every key.
    pub fn new() -> Self {
        SectionSet {
            sections: SectionKey::ALL.into_iter().map(Section::new).collect(),
        }
    }

    /// Every section pre-filled with its catalog defaults.
    pub fn with_defaults() -> Self {
        SectionSet {
            sections: SectionKey::ALL
                .into_iter()
                .map(Section::with_defaults)
                .collect(),
        }
    }

    pub fn section(&self, key: SectionKey) -> &Section {
        &self.sections[Self::index(key)]
    }

    pub fn section_mut(&mut self, key: SectionKey) -> &mut Section {
        &mut self.sections[Self::index(key)]
    }

    /// Add a catalog option to the section it belongs to.
    pub fn add_option(&mut self, option: CatalogOption, value: impl Into<OptionValue>) -> Result<()> {
        self.section_mut(option.section()).add_option(option, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// The text of every non-empty section.
    pub fn to_js_entries(&self) -> Vec<String> {
        self.sections.iter().filter_map(Section::to_js).collect()
    }

    fn index(key: SectionKey) -> usize {
        SectionKey::ALL
            .iter()
            .position(|k| *k == key)
            .unwrap_or_default()
    }
}

impl Default for SectionSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartopts_option_store::{ChartType, ZoomType};

    #[test]
    fn empty_section_has_no_js() {
        assert_eq!(Section::new(SectionKey::Legend).to_js(), None);
    }

    #[test]
    fn options_then_raw_lines() {
        let mut chart = Section::new(SectionKey::Chart);
        chart.add_option(CatalogOption::ChartType, ChartType::Line).unwrap();
        chart.add_option(CatalogOption::ChartZoomType, ZoomType::XY).unwrap();
        chart.add_raw_option("  spacingTop: 4  ");
        chart.add_raw_option("   ");
        assert_eq!(
            chart.to_js().unwrap(),
            "chart: {type: 'line', zoomType: 'xy', spacingTop: 4}"
        );
    }

    #[test]
    fn raw_only_section() {
        let mut plot = Section::new(SectionKey::PlotOptions);
        plot.add_raw_option(
            "spline: {marker: {enabled: true, radius: 4, lineColor: '#666666', lineWidth: 1}}",
        );
        assert_eq!(
            plot.to_js().unwrap(),
            "plotOptions: {spline: {marker: {enabled: true, radius: 4, lineColor: '#666666', lineWidth: 1}}}"
        );
    }

    #[test]
    fn option_from_other_section_is_rejected() {
        let mut chart = Section::new(SectionKey::Chart);
        let err = chart
            .add_option(CatalogOption::TitleText, "My first chart")
            .unwrap_err();
        assert!(matches!(err, ChartError::WrongSection { .. }));
        assert!(err.to_string().contains("chart"));
        assert!(chart.is_empty());
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut y = Section::new(SectionKey::YAxis);
        let err = y.add_option(CatalogOption::YAxisMin, "zero").unwrap_err();
        assert!(matches!(
            err,
            ChartError::KindMismatch {
                expected: "number",
                found: "string",
                ..
            }
        ));
    }

    #[test]
    fn null_is_rejected() {
        let mut credits = Section::new(SectionKey::Credits);
        let err = credits
            .add_option(CatalogOption::CreditsText, OptionValue::Null)
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidValue { .. }));
    }

    #[test]
    fn re_adding_replaces_value() {
        let mut title = Section::new(SectionKey::Title);
        title.add_option(CatalogOption::TitleText, "first").unwrap();
        title.add_option(CatalogOption::TitleX, 3).unwrap();
        title.add_option(CatalogOption::TitleText, "second").unwrap();
        assert_eq!(title.to_js().unwrap(), "title: {text: 'second', x: 3}");
        assert_eq!(
            title.remove_option(CatalogOption::TitleX),
            Some(OptionValue::Integer(3))
        );
        assert_eq!(title.option(CatalogOption::TitleX), None);
    }

    #[test]
    fn defaults_are_inserted() {
        let title = Section::with_defaults(SectionKey::Title);
        assert_eq!(
            title.option(CatalogOption::TitleText),
            Some(&OptionValue::from("Chart title"))
        );
        let js = title.to_js().unwrap();
        assert!(js.starts_with("title: {align: 'center'"));
        assert!(js.contains("y: 25"));
    }

    #[test]
    fn axis_title() {
        let mut x = Section::new(SectionKey::XAxis);
        x.set_title("  Month ");
        x.set_title("");
        assert_eq!(
            x.to_js().unwrap(),
            "xAxis: {title: {rotation: 0, text: 'Month', align: 'middle'}}"
        );
    }

    #[test]
    fn set_routes_options() {
        let mut set = SectionSet::new();
        set.add_option(CatalogOption::SubtitleText, "the subtitle").unwrap();
        set.add_option(CatalogOption::CreditsEnabled, false).unwrap();
        set.add_option(CatalogOption::XAxisAllowDecimals, false).unwrap();
        assert_eq!(
            set.to_js_entries(),
            vec![
                "credits: {enabled: false}".to_string(),
                "subtitle: {text: 'the subtitle'}".to_string(),
                "xAxis: {allowDecimals: false}".to_string(),
            ]
        );
        assert_eq!(set.section(SectionKey::Chart).key(), SectionKey::Chart);
    }

    #[test]
    fn defaults_for_whole_set() {
        let set = SectionSet::with_defaults();
        assert!(set.section(SectionKey::PlotOptions).is_empty());
        assert!(!set.section(SectionKey::Tooltip).is_empty());
        assert!(set
            .section(SectionKey::Tooltip)
            .to_js()
            .unwrap()
            .contains("crosshairs: [true, true]"));
    }
}
