//! Chart series and their data points.

use chartopts_option_store::cleanup::join_present;
use chartopts_option_store::{json_to_value, literal, OptionMap, OptionPath, OptionStore, OptionValue};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::error::Result;

const ENTRY_SEPARATOR: &str = ", ";

/// One entry of a series' `data` list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "PointSpec")]
pub struct DataPoint {
    name: Option<String>,
    x: Option<OptionValue>,
    y: Option<OptionValue>,
    options: OptionMap,
}

impl DataPoint {
    /// A point with only a `y` value. A null `y` renders as `null`.
    pub fn new(y: impl Into<OptionValue>) -> Self {
        DataPoint {
            y: present(y.into()),
            ..Default::default()
        }
    }

    pub fn xy(x: impl Into<OptionValue>, y: impl Into<OptionValue>) -> Self {
        DataPoint {
            x: present(x.into()),
            ..DataPoint::new(y)
        }
    }

    /// A point labelled with a category name.
    pub fn named(name: &str, y: impl Into<OptionValue>) -> Self {
        DataPoint::new(y).with_name(name)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        let name = name.trim();
        self.name = (!name.is_empty()).then(|| name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn x(&self) -> Option<&OptionValue> {
        self.x.as_ref()
    }

    pub fn y(&self) -> Option<&OptionValue> {
        self.y.as_ref()
    }

    /// Set an extra point option such as `color` or `marker`.
    ///
    /// Blank keys are ignored and a null value removes the option.
    pub fn set_option(&mut self, key: &str, value: impl Into<OptionValue>) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        match value.into() {
            OptionValue::Null => {
                self.options.shift_remove(key);
            }
            value => {
                self.options.insert(key.to_string(), value);
            }
        }
    }

    pub fn remove_option(&mut self, key: &str) -> Option<OptionValue> {
        self.options.shift_remove(key.trim())
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// `{name: 'n', x: 1, y: 2, ...}`.
    pub fn to_js(&self) -> String {
        let name = self
            .name
            .as_deref()
            .map(|name| format!("name: {}", literal::quote(name)))
            .unwrap_or_default();
        let x = self
            .x
            .as_ref()
            .map(literal::encode_value)
            .filter(|text| !text.is_empty())
            .map(|text| format!("x: {text}"))
            .unwrap_or_default();
        let y = match self.y.as_ref().map(literal::encode_value) {
            Some(text) if !text.is_empty() => format!("y: {text}"),
            _ => "y: null".to_string(),
        };
        let extra = literal::encode_entries(&self.options).unwrap_or_default();

        format!(
            "{{{}}}",
            join_present([name, x, y, extra], ENTRY_SEPARATOR)
        )
    }
}

fn present(value: OptionValue) -> Option<OptionValue> {
    (!value.is_null()).then_some(value)
}

/// A named list of points with its own per-series options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "SeriesSpec")]
pub struct Series {
    name: String,
    points: Vec<DataPoint>,
    series_type: Option<String>,
    options: OptionStore,
}

impl Series {
    pub fn new(name: &str) -> Self {
        Series {
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn with_points(name: &str, points: impl IntoIterator<Item = DataPoint>) -> Self {
        let mut series = Series::new(name);
        series.points.extend(points);
        series
    }

    /// Parse one series from JSON.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a JSON array of series, or a single series object.
    pub fn list_from_json_str(json: &str) -> std::result::Result<Vec<Self>, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<Series>),
            One(Series),
        }

        Ok(match serde_json::from_str(json)? {
            OneOrMany::Many(list) => list,
            OneOrMany::One(series) => vec![series],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Set the rendering type (`line`, `column`, ...). Blank types are ignored.
    pub fn set_type(&mut self, series_type: impl ToString) {
        let series_type = series_type.to_string();
        let series_type = series_type.trim();
        if !series_type.is_empty() {
            self.series_type = Some(series_type.to_string());
        }
    }

    pub fn series_type(&self) -> Option<&str> {
        self.series_type.as_deref()
    }

    pub fn set_option(&self, path: impl Into<OptionPath>, value: impl Into<OptionValue>) -> Result<()> {
        Ok(self.options.set(path, value)?)
    }

    pub fn get_option(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        Ok(self.options.get(path)?)
    }

    pub fn remove_option(&self, path: impl Into<OptionPath>) -> Result<Option<OptionValue>> {
        Ok(self.options.remove(path)?)
    }

    pub fn options(&self) -> &OptionStore {
        &self.options
    }

    /// `{name: 'n', data: [...], type: 't', ...}`.
    pub fn to_js(&self) -> String {
        let name = if self.name.is_empty() {
            String::new()
        } else {
            format!("name: {}", literal::quote(&self.name))
        };
        let data = format!(
            "data: [{}]",
            join_present(self.points.iter().map(DataPoint::to_js), ENTRY_SEPARATOR)
        );
        let series_type = self
            .series_type
            .as_deref()
            .map(|t| format!("type: {}", literal::quote(t)))
            .unwrap_or_default();
        let options = self.options.serialize().unwrap_or_default();

        format!(
            "{{{}}}",
            join_present([name, data, series_type, options], ENTRY_SEPARATOR)
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointSpec {
    Empty,
    Y(serde_json::Number),
    Pair([serde_json::Value; 2]),
    Full {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        x: Option<serde_json::Value>,
        #[serde(default)]
        y: Option<serde_json::Value>,
        #[serde(flatten)]
        options: IndexMap<String, serde_json::Value>,
    },
}

impl From<PointSpec> for DataPoint {
    fn from(spec: PointSpec) -> Self {
        match spec {
            PointSpec::Empty => DataPoint::default(),
            PointSpec::Y(y) => DataPoint::new(json_to_value(serde_json::Value::Number(y))),
            PointSpec::Pair([x, y]) => DataPoint::xy(json_to_value(x), json_to_value(y)),
            PointSpec::Full {
                name,
                x,
                y,
                options,
            } => {
                let mut point = DataPoint {
                    x: x.map(json_to_value).and_then(present),
                    y: y.map(json_to_value).and_then(present),
                    ..Default::default()
                };
                if let Some(name) = name {
                    point = point.with_name(&name);
                }
                for (key, value) in options {
                    point.set_option(&key, json_to_value(value));
                }
                point
            }
        }
    }
}

#[derive(Deserialize)]
struct SeriesSpec {
    #[serde(default)]
    name: String,
    #[serde(default)]
    data: Vec<DataPoint>,
    #[serde(default, rename = "type")]
    series_type: Option<String>,
    /// Per-series options keyed by path.
    #[serde(default)]
    options: IndexMap<String, serde_json::Value>,
}

impl From<SeriesSpec> for Series {
    fn from(spec: SeriesSpec) -> Self {
        let mut series = Series::with_points(&spec.name, spec.data);
        if let Some(series_type) = spec.series_type {
            series.set_type(series_type);
        }
        for (path, value) in spec.options {
            if let Err(err) = series.set_option(path.as_str(), json_to_value(value)) {
                warn!(series = %series.name, path = %path, error = %err, "skipping series option");
            }
        }
        series
    }
}
