mod bucket;
pub(crate) mod core;
mod metric;

pub use bucket::{
    DateHistogramAggregation, HistogramAggregation, SamplerAggregation, TermsAggregation,
};
pub use core::{Aggregation, Order};
pub use metric::{
    AvgAggregation, CardinalityAggregation, MaxAggregation, MinAggregation,
    PercentileRanksAggregation, PercentilesAggregation, StatsAggregation, SumAggregation,
    ValueCountAggregation,
};
