mod cardinality;
mod percentile_ranks;
mod percentiles;
mod single;
mod stats;

pub use cardinality::CardinalityAggregation;
pub use percentile_ranks::PercentileRanksAggregation;
pub use percentiles::PercentilesAggregation;
pub use single::{
    AvgAggregation, MaxAggregation, MinAggregation, SumAggregation, ValueCountAggregation,
};
pub use stats::StatsAggregation;

use crate::aggregations::core::CommonOp;

/// Capability set shared by the plain single-value metrics and stats.
pub(crate) const METRIC_CAPS: &[CommonOp] = &[
    CommonOp::Field,
    CommonOp::Script,
    CommonOp::Format,
    CommonOp::Missing,
];
