//! Highcharts chart script assembly
//!
//! Builds the `var chart<id> = new Highcharts.Chart({...});` script around
//! a [`chartopts_option_store::OptionStore`]:
//! - `Section` / `SectionSet`: checked catalog options and raw lines per block
//! - `CatalogOption`: the declared options with their kinds and defaults
//! - `Series` / `DataPoint`: the `series` list, loadable from JSON
//! - `ChartConfig`: naming, constructor and post-processing settings
//! - `ChartScript`: merges everything and renders the script
//!
//! # Example
//!
//! ```rust
//! use chartopts_chart::{ChartConfig, ChartScript, DataPoint, Series};
//!
//! let mut chart = ChartScript::new(ChartConfig {
//!     id: Some("1".into()),
//!     render_to: Some("container".into()),
//!     register_callback: None,
//!     ..Default::default()
//! })
//! .unwrap();
//! chart.set_option("/title/text", "Monthly").unwrap();
//! chart.add_series(Series::with_points("Tokyo", [DataPoint::new(7)]));
//!
//! assert_eq!(
//!     chart.to_js().unwrap(),
//!     "var chart1 = new Highcharts.Chart({\n\
//!      title: {text: 'Monthly'},\n\
//!      chart: {renderTo: 'container'},\n\
//!      series: [\n{name: 'Tokyo', data: [{y: 7}]}\n]\n\
//!      });"
//! );
//! ```

mod catalog;
mod config;
mod error;
mod id;
mod script;
mod section;
mod series;

pub use catalog::{CatalogOption, SectionKey, ValueKind};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use id::generate_id;
pub use script::ChartScript;
pub use section::{Section, SectionSet};
pub use series::{DataPoint, Series};
