//! In-memory checks and rewrites between loading and emitting.
//!
//! - [`validate()`]: required-column presence and column-name uniqueness
//! - [`normalize()`]: timestamps to `YYYY-MM-DDTHH:MM:SSZ` text, NaN to null
//!
//! ```rust
//! use tabular_publish::processing::{normalize, validate};
//! use tabular_publish::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let ds = DataSet::new(
//!     Schema::new(vec![
//!         Field::new("id", DataType::Int64),
//!         Field::new("score", DataType::Float64),
//!     ]),
//!     vec![vec![Value::Int64(1), Value::Float64(f64::NAN)]],
//! );
//!
//! let ds = validate(ds, &["id"]).unwrap();
//! let normalized = normalize(ds);
//! assert_eq!(normalized.dataset.rows[0][1], Value::Null);
//! ```

pub mod normalize;
pub mod validate;

pub use normalize::{format_timestamp, normalize, NormalizedDataSet, TIMESTAMP_FORMAT};
pub use validate::{find_duplicate_columns, find_missing_columns, validate};
