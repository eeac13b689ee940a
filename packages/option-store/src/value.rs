//! The OptionValue type - every kind of value an option can hold.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// A mapping level of the option tree. Iteration follows insertion order.
pub type OptionMap = IndexMap<String, OptionValue>;

/// A value stored in the option tree.
///
/// The encoder matches on this exhaustively; there is no catch-all kind.
/// Text that should reach the chart unquoted must be wrapped in
/// [`RawCode`], and enumerated labels in [`Label`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OptionValue {
    /// No value. Encodes as nothing and cannot be stored.
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Plain text, emitted single-quoted.
    String(String),
    /// Inline code such as an event handler, emitted verbatim.
    Raw(RawCode),
    /// An enumerated chart or zoom type, emitted as its quoted label.
    Label(Label),
    /// Ordered sequence of values.
    List(Vec<OptionValue>),
    /// Nested mapping of the same option kind.
    Map(OptionMap),
}

impl OptionValue {
    /// Create an empty mapping.
    pub fn map() -> Self {
        OptionValue::Map(OptionMap::new())
    }

    /// Create an empty list.
    pub fn list() -> Self {
        OptionValue::List(Vec::new())
    }

    /// Wrap inline code.
    pub fn raw(code: impl Into<String>) -> Self {
        OptionValue::Raw(RawCode::new(code))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, OptionValue::Map(_))
    }

    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Integer(i) => Some(*i as f64),
            OptionValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// A short name for the kind of value, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            OptionValue::Null => "null",
            OptionValue::Bool(_) => "bool",
            OptionValue::Integer(_) => "integer",
            OptionValue::Float(_) => "float",
            OptionValue::String(_) => "string",
            OptionValue::Raw(_) => "raw",
            OptionValue::Label(_) => "label",
            OptionValue::List(_) => "list",
            OptionValue::Map(_) => "map",
        }
    }
}

/// Code emitted into the chart literal without quoting.
///
/// Useful for handlers and formatters:
///
/// ```rust
/// use chartopts_option_store::{literal, OptionValue};
///
/// let handler = OptionValue::raw("function() { return this.y; }");
/// assert_eq!(literal::encode_value(&handler), "function() { return this.y; }");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        RawCode(code.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for labels that name no known chart or zoom type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label '{label}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Series/chart drawing types understood by Highcharts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Line,
    Spline,
    Area,
    AreaSpline,
    Column,
    Bar,
    Pie,
    Scatter,
}

impl ChartType {
    pub const ALL: [ChartType; 8] = [
        ChartType::Line,
        ChartType::Spline,
        ChartType::Area,
        ChartType::AreaSpline,
        ChartType::Column,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Scatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Spline => "spline",
            ChartType::Area => "area",
            ChartType::AreaSpline => "areaspline",
            ChartType::Column => "column",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
        }
    }
}

impl FromStr for ChartType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel {
                kind: "chart type",
                label: s.to_string(),
            })
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axes along which the user may zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomType {
    X,
    Y,
    XY,
    /// Zooming disabled; the label is empty.
    None,
}

impl ZoomType {
    pub const ALL: [ZoomType; 4] = [ZoomType::X, ZoomType::Y, ZoomType::XY, ZoomType::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoomType::X => "x",
            ZoomType::Y => "y",
            ZoomType::XY => "xy",
            ZoomType::None => "",
        }
    }
}

impl FromStr for ZoomType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(ZoomType::None);
        }
        ZoomType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel {
                kind: "zoom type",
                label: s.to_string(),
            })
    }
}

impl fmt::Display for ZoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enumerated label recognized by the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Chart(ChartType),
    Zoom(ZoomType),
}

impl Label {
    /// The canonical label text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Chart(t) => t.as_str(),
            Label::Zoom(z) => z.as_str(),
        }
    }
}

impl FromStr for Label {
    type Err = UnknownLabel;

    /// Chart types are tried first, then zoom types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ChartType>()
            .map(Label::Chart)
            .or_else(|_| s.parse::<ZoomType>().map(Label::Zoom))
            .map_err(|_| UnknownLabel {
                kind: "chart or zoom type",
                label: s.trim().to_string(),
            })
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Conversion from common types

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OptionValue {
                fn from(v: $t) -> Self {
                    OptionValue::Integer(i64::from(v))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for OptionValue {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(OptionValue::Integer)
            .unwrap_or(OptionValue::Float(v as f64))
    }
}

impl From<usize> for OptionValue {
    fn from(v: usize) -> Self {
        OptionValue::from(v as u64)
    }
}

impl From<f32> for OptionValue {
    fn from(v: f32) -> Self {
        OptionValue::Float(f64::from(v))
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<char> for OptionValue {
    fn from(v: char) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<RawCode> for OptionValue {
    fn from(v: RawCode) -> Self {
        OptionValue::Raw(v)
    }
}

impl From<Label> for OptionValue {
    fn from(v: Label) -> Self {
        OptionValue::Label(v)
    }
}

impl From<ChartType> for OptionValue {
    fn from(v: ChartType) -> Self {
        OptionValue::Label(Label::Chart(v))
    }
}

impl From<ZoomType> for OptionValue {
    fn from(v: ZoomType) -> Self {
        OptionValue::Label(Label::Zoom(v))
    }
}

impl From<OptionMap> for OptionValue {
    fn from(v: OptionMap) -> Self {
        OptionValue::Map(v)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(OptionValue::Null, Into::into)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(v: Vec<T>) -> Self {
        OptionValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue> + Clone> From<&[T]> for OptionValue {
    fn from(v: &[T]) -> Self {
        OptionValue::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>, const N: usize> From<[T; N]> for OptionValue {
    fn from(v: [T; N]) -> Self {
        OptionValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<OptionValue>> FromIterator<(String, V)> for OptionValue {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        OptionValue::Map(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
