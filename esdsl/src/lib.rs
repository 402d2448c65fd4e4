//! Fluent builders for Elasticsearch aggregation request bodies
//!
//! Each builder corresponds to one aggregation type and accumulates a
//! definition record through chainable setters, serialized with
//! [`Aggregation::to_definition`] into the nested JSON the engine expects:
//! `{"<name>": {"<type>": {...}, "aggs": {...}}}`. Transport is out of
//! scope; the output plugs into whatever HTTP client carries the search
//! request.
//!
//! Parameters the engine rejects for a given type (e.g. `field` on
//! `sampler`) fail immediately with [`Error::UnsupportedOperation`] and
//! never reach the record, so a malformed body cannot be produced by this
//! surface.
//!
//! # Example
//!
//! ```
//! use esdsl::{Aggregation, AvgAggregation, DateHistogramAggregation};
//!
//! # fn main() -> esdsl::Result<()> {
//! let avg = AvgAggregation::new("avg_price", "price")?;
//! let def = DateHistogramAggregation::new("per_day")?
//!     .field("@timestamp")?
//!     .interval("day")
//!     .time_zone("+05:30")
//!     .agg(&avg)
//!     .to_definition();
//!
//! assert_eq!(
//!     def["per_day"]["aggs"]["avg_price"],
//!     serde_json::json!({"avg": {"field": "price"}})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Supported aggregations:
//! - Bucket: `terms`, `histogram`, `date_histogram`, `sampler`
//! - Metrics: `avg` / `min` / `max` / `sum` / `value_count`, `stats`,
//!   `cardinality`, `percentiles`, `percentile_ranks`

pub mod aggregations;
pub mod error;
pub mod script;

pub use aggregations::{
    Aggregation, AvgAggregation, CardinalityAggregation, DateHistogramAggregation,
    HistogramAggregation, MaxAggregation, MinAggregation, Order, PercentileRanksAggregation,
    PercentilesAggregation, SamplerAggregation, StatsAggregation, SumAggregation,
    TermsAggregation, ValueCountAggregation,
};
pub use error::{Error, Result};
pub use script::Script;
