//! Implements readers and writers for parameter tables, experimental datasets, and model curves
//!
//! Also converts raw machine exports into calibration datasets.

mod csv_fields;
mod curve_table;
mod dataset;
mod johnson_cook_table;
mod keyed_table;
mod processing;
mod props_table;
pub(crate) use crate::data::csv_fields::*;
pub use crate::data::curve_table::*;
pub use crate::data::dataset::*;
pub use crate::data::johnson_cook_table::*;
pub(crate) use crate::data::keyed_table::*;
pub use crate::data::processing::*;
pub use crate::data::props_table::*;
pub use crate::data::raw_test::*;
