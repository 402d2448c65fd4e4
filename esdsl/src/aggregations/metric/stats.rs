//! Stats aggregation builder

use serde_json::Value;

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::aggregations::metric::METRIC_CAPS;
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-stats-aggregation.html";

/// Multi-value metrics aggregation computing min, max, sum, count and avg
/// over numeric values extracted from the aggregated documents.
#[derive(Debug, Clone)]
pub struct StatsAggregation {
    base: AggBase,
}

impl StatsAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Result<Self> {
        let mut base = AggBase::new(name, "stats", ES_REF_URL, METRIC_CAPS)?;
        base.set_common(CommonOp::Field, Value::String(field.into()))?;
        Ok(StatsAggregation { base })
    }
}

impl_aggregation!(StatsAggregation);
