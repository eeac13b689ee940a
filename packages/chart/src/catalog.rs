//! Declared section options.
//!
//! Every option a [`Section`](crate::Section) accepts through its checked
//! interface is listed here with its section, its Highcharts name, the kind
//! of value it takes and its default.

use std::collections::HashMap;
use std::fmt;

use chartopts_option_store::{ChartType, Label, OptionValue};
use lazy_static::lazy_static;

/// Top-level blocks of a chart configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Chart,
    Credits,
    Legend,
    Loading,
    Subtitle,
    Title,
    Tooltip,
    XAxis,
    YAxis,
    /// Accepts raw options only.
    PlotOptions,
}

impl SectionKey {
    pub const ALL: [SectionKey; 10] = [
        SectionKey::Chart,
        SectionKey::Credits,
        SectionKey::Legend,
        SectionKey::Loading,
        SectionKey::Subtitle,
        SectionKey::Title,
        SectionKey::Tooltip,
        SectionKey::XAxis,
        SectionKey::YAxis,
        SectionKey::PlotOptions,
    ];

    /// The block name in the chart literal.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKey::Chart => "chart",
            SectionKey::Credits => "credits",
            SectionKey::Legend => "legend",
            SectionKey::Loading => "loading",
            SectionKey::Subtitle => "subtitle",
            SectionKey::Title => "title",
            SectionKey::Tooltip => "tooltip",
            SectionKey::XAxis => "xAxis",
            SectionKey::YAxis => "yAxis",
            SectionKey::PlotOptions => "plotOptions",
        }
    }

    pub fn from_name(name: &str) -> Option<SectionKey> {
        SectionKey::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Whether catalog options may be added to this section.
    pub fn accepts_catalog_options(&self) -> bool {
        !matches!(self, SectionKey::PlotOptions)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of value a catalog option takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Integer,
    /// Integer or floating point.
    Number,
    /// Plain text or raw code.
    Text,
    /// A CSS-like style block: mapping, text or raw code.
    Style,
    ChartType,
    ZoomType,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Style => "style",
            ValueKind::ChartType => "chart type",
            ValueKind::ZoomType => "zoom type",
            ValueKind::List => "list",
        }
    }

    /// Whether `value` is an acceptable value of this kind.
    pub fn accepts(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (ValueKind::Bool, OptionValue::Bool(_)) => true,
            (ValueKind::Integer, OptionValue::Integer(_)) => true,
            (ValueKind::Number, OptionValue::Integer(_) | OptionValue::Float(_)) => true,
            (ValueKind::Text, OptionValue::String(_) | OptionValue::Raw(_)) => true,
            (
                ValueKind::Style,
                OptionValue::Map(_) | OptionValue::String(_) | OptionValue::Raw(_),
            ) => true,
            (ValueKind::ChartType, OptionValue::Label(Label::Chart(_))) => true,
            (ValueKind::ZoomType, OptionValue::Label(Label::Zoom(_))) => true,
            (ValueKind::List, OptionValue::List(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn d(value: impl Into<OptionValue>) -> Option<OptionValue> {
    Some(value.into())
}

macro_rules! catalog {
    ($( $variant:ident => ($section:ident, $name:literal, $kind:ident, $default:expr) ),* $(,)?) => {
        /// Every option declared for the checked section interface.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum CatalogOption {
            $($variant),*
        }

        impl CatalogOption {
            /// All options in declaration order.
            pub const ALL: &'static [CatalogOption] = &[$(CatalogOption::$variant),*];

            /// The section this option belongs to.
            pub fn section(&self) -> SectionKey {
                match self {
                    $(CatalogOption::$variant => SectionKey::$section),*
                }
            }

            /// The Highcharts option name inside its section.
            pub fn name(&self) -> &'static str {
                match self {
                    $(CatalogOption::$variant => $name),*
                }
            }

            pub fn kind(&self) -> ValueKind {
                match self {
                    $(CatalogOption::$variant => ValueKind::$kind),*
                }
            }

            /// The value inserted by `Section::with_defaults`, if any.
            pub fn default_value(&self) -> Option<OptionValue> {
                match self {
                    $(CatalogOption::$variant => $default),*
                }
            }
        }
    };
}

catalog! {
    // chart
    ChartAlignTicks => (Chart, "alignTicks", Bool, d(true)),
    ChartAnimation => (Chart, "animation", Bool, d(true)),
    ChartBackgroundColor => (Chart, "backgroundColor", Text, None),
    ChartBorderColor => (Chart, "borderColor", Text, d("#4572A7")),
    ChartBorderRadius => (Chart, "borderRadius", Integer, d(5)),
    ChartBorderWidth => (Chart, "borderWidth", Integer, d(0)),
    ChartClassName => (Chart, "className", Text, None),
    ChartDefaultSeriesType => (Chart, "defaultSeriesType", ChartType, d(ChartType::Spline)),
    ChartHeight => (Chart, "height", Number, None),
    ChartIgnoreHiddenSeries => (Chart, "ignoreHiddenSeries", Bool, d(true)),
    ChartInverted => (Chart, "inverted", Bool, d(false)),
    ChartMarginTop => (Chart, "marginTop", Integer, d(0)),
    ChartMarginRight => (Chart, "marginRight", Integer, d(50)),
    ChartMarginBottom => (Chart, "marginBottom", Integer, d(70)),
    ChartPlotBackgroundColor => (Chart, "plotBackgroundColor", Text, None),
    ChartPlotBackgroundImage => (Chart, "plotBackgroundImage", Text, None),
    ChartPlotBorderColor => (Chart, "plotBorderColor", Text, d("#C0C0C0")),
    ChartPlotBorderWidth => (Chart, "plotBorderWidth", Integer, d(0)),
    ChartPlotShadow => (Chart, "plotShadow", Bool, d(false)),
    ChartReflow => (Chart, "reflow", Bool, d(true)),
    ChartShadow => (Chart, "shadow", Bool, d(false)),
    ChartShowAxes => (Chart, "showAxes", Bool, d(false)),
    ChartSpacingTop => (Chart, "spacingTop", Integer, d(10)),
    ChartSpacingRight => (Chart, "spacingRight", Integer, d(10)),
    ChartSpacingBottom => (Chart, "spacingBottom", Integer, d(15)),
    ChartSpacingLeft => (Chart, "spacingLeft", Integer, d(10)),
    ChartStyle => (Chart, "style", Style, None),
    ChartType => (Chart, "type", ChartType, None),
    ChartZoomType => (Chart, "zoomType", ZoomType, None),

    // credits
    CreditsEnabled => (Credits, "enabled", Bool, d(false)),
    CreditsHref => (Credits, "href", Text, None),
    CreditsText => (Credits, "text", Text, None),

    // legend
    LegendAlign => (Legend, "align", Text, d("center")),
    LegendBackgroundColor => (Legend, "backgroundColor", Text, None),
    LegendBorderColor => (Legend, "borderColor", Text, d("#909090")),
    LegendBorderRadius => (Legend, "borderRadius", Integer, d(5)),
    LegendBorderWidth => (Legend, "borderWidth", Integer, d(1)),
    LegendEnabled => (Legend, "enabled", Bool, d(true)),
    LegendFloating => (Legend, "floating", Bool, d(false)),
    LegendStyle => (Legend, "style", Style, None),
    LegendItemHiddenStyle => (Legend, "itemHiddenStyle", Style, None),
    LegendItemHoverStyle => (Legend, "itemHoverStyle", Style, None),
    LegendItemStyle => (Legend, "itemStyle", Style, None),
    LegendItemWidth => (Legend, "itemWidth", Number, None),
    LegendLayout => (Legend, "layout", Text, d("horizontal")),
    LegendLineHeight => (Legend, "lineHeight", Integer, d(16)),
    LegendMargin => (Legend, "margin", Integer, d(15)),
    LegendReversed => (Legend, "reversed", Bool, d(false)),
    LegendShadow => (Legend, "shadow", Bool, d(false)),
    LegendX => (Legend, "x", Integer, d(15)),
    LegendY => (Legend, "y", Integer, d(0)),
    LegendSymbolPadding => (Legend, "symbolPadding", Integer, d(5)),
    LegendSymbolWidth => (Legend, "symbolWidth", Integer, d(30)),
    LegendVerticalAlign => (Legend, "verticalAlign", Text, d("bottom")),
    LegendWidth => (Legend, "width", Number, None),

    // loading
    LoadingHideDuration => (Loading, "hideDuration", Integer, d(100)),
    LoadingLabelStyle => (Loading, "labelStyle", Style, None),
    LoadingShowDuration => (Loading, "showDuration", Integer, d(100)),
    LoadingStyle => (Loading, "style", Style, None),

    // tooltip
    TooltipBackgroundColor => (Tooltip, "backgroundColor", Text, d("rgba(255, 255, 255, .85)")),
    TooltipBorderColor => (Tooltip, "borderColor", Text, d("auto")),
    TooltipBorderRadius => (Tooltip, "borderRadius", Integer, d(5)),
    TooltipBorderWidth => (Tooltip, "borderWidth", Integer, d(2)),
    TooltipCrosshairs => (Tooltip, "crosshairs", List, d([true, true])),
    TooltipEnabled => (Tooltip, "enabled", Bool, d(true)),
    TooltipFormatter => (Tooltip, "formatter", Text, None),
    TooltipShadow => (Tooltip, "shadow", Bool, d(true)),
    TooltipShared => (Tooltip, "shared", Bool, d(false)),
    TooltipSnap => (Tooltip, "snap", Integer, d(10)),
    TooltipStyle => (Tooltip, "style", Style, None),

    // title
    TitleAlign => (Title, "align", Text, d("center")),
    TitleFloating => (Title, "floating", Bool, d(false)),
    TitleMargin => (Title, "margin", Integer, d(15)),
    TitleText => (Title, "text", Text, d("Chart title")),
    TitleStyle => (Title, "style", Style, None),
    TitleVerticalAlign => (Title, "verticalAlign", Text, d("top")),
    TitleX => (Title, "x", Integer, d(0)),
    TitleY => (Title, "y", Integer, d(25)),

    // subtitle
    SubtitleAlign => (Subtitle, "align", Text, d("center")),
    SubtitleFloating => (Subtitle, "floating", Bool, d(false)),
    SubtitleText => (Subtitle, "text", Text, None),
    SubtitleStyle => (Subtitle, "style", Style, None),
    SubtitleVerticalAlign => (Subtitle, "verticalAlign", Text, d("top")),
    SubtitleX => (Subtitle, "x", Integer, d(0)),
    SubtitleY => (Subtitle, "y", Integer, d(40)),

    // xAxis
    XAxisAllowDecimals => (XAxis, "allowDecimals", Bool, d(false)),
    XAxisCategories => (XAxis, "categories", List, None),
    XAxisEndOnTick => (XAxis, "endOnTick", Bool, d(false)),
    XAxisMin => (XAxis, "min", Number, None),
    XAxisMax => (XAxis, "max", Number, None),
    XAxisReversed => (XAxis, "reversed", Bool, d(false)),
    XAxisTickInterval => (XAxis, "tickInterval", Number, None),

    // yAxis
    YAxisEndOnTick => (YAxis, "endOnTick", Bool, d(true)),
    YAxisGridLineWidth => (YAxis, "gridLineWidth", Integer, d(1)),
    YAxisLineWidth => (YAxis, "lineWidth", Integer, d(0)),
    YAxisStartOnTick => (YAxis, "startOnTick", Bool, d(true)),
    YAxisAllowDecimals => (YAxis, "allowDecimals", Bool, d(true)),
    YAxisMin => (YAxis, "min", Number, None),
    YAxisMax => (YAxis, "max", Number, None),
    YAxisOpposite => (YAxis, "opposite", Bool, d(false)),
    YAxisReversed => (YAxis, "reversed", Bool, d(false)),
}

lazy_static! {
    static ref BY_NAME: HashMap<SectionKey, HashMap<&'static str, CatalogOption>> = {
        let mut sections: HashMap<SectionKey, HashMap<&'static str, CatalogOption>> = HashMap::new();
        for option in CatalogOption::ALL {
            sections
                .entry(option.section())
                .or_default()
                .insert(option.name(), *option);
        }
        sections
    };
}

impl CatalogOption {
    pub fn all() -> &'static [CatalogOption] {
        CatalogOption::ALL
    }

    /// Look up an option by section and Highcharts name.
    pub fn find(section: SectionKey, name: &str) -> Option<CatalogOption> {
        BY_NAME
            .get(&section)
            .and_then(|options| options.get(name))
            .copied()
    }

    /// Options declared for `section`, in declaration order.
    pub fn for_section(section: SectionKey) -> impl Iterator<Item = CatalogOption> {
        CatalogOption::ALL
            .iter()
            .copied()
            .filter(move |option| option.section() == section)
    }
}

impl fmt::Display for CatalogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.name())
    }
}
