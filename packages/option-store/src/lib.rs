//! Chart option tree for Highcharts
//!
//! Options are addressed by slash-delimited paths and kept in a sparse tree
//! that serializes to the JavaScript object literal Highcharts expects:
//! - `OptionPath`: lenient path parsing (`/chart/type`)
//! - `OptionValue`: closed set of value kinds (numbers, text, raw code, labels, lists, maps)
//! - `OptionStore`: the locked tree with `set`, `get`, `remove`, `contains`, `serialize`
//! - `literal`: type-dispatched JavaScript literal encoding
//! - `cleanup`: best-effort removal of dangling separators in generated text
//!
//! # Example
//!
//! ```rust
//! use chartopts_option_store::{OptionStore, OptionValue};
//!
//! let store = OptionStore::new();
//! store.set("/chart/events/load", OptionValue::raw("function(){return 1;}")).unwrap();
//! assert_eq!(
//!     store.serialize().unwrap(),
//!     "chart: {events: {load: function(){return 1;}}}"
//! );
//! ```

pub mod cleanup;
mod convert;
mod error;
pub mod literal;
mod path;
mod store;
mod value;

pub use convert::{json_to_value, value_to_json};
pub use error::{EncodeError, Error, Result};
pub use path::OptionPath;
pub use store::OptionStore;
pub use value::{ChartType, Label, OptionMap, OptionValue, RawCode, UnknownLabel, ZoomType};
