//! Single-value metrics aggregations: avg, min, max, sum, value_count
//!
//! These types have no parameters beyond the shared metrics surface, so
//! they are generated from one macro.

use serde_json::Value;

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::aggregations::metric::METRIC_CAPS;
use crate::error::Result;

macro_rules! single_value_metric {
    ($(#[$meta:meta])* $builder:ident, $tag:literal, $url:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $builder {
            base: AggBase,
        }

        impl $builder {
            pub fn new(name: impl Into<String>, field: impl Into<String>) -> Result<Self> {
                let mut base = AggBase::new(name, $tag, $url, METRIC_CAPS)?;
                base.set_common(CommonOp::Field, Value::String(field.into()))?;
                Ok($builder { base })
            }
        }

        impl_aggregation!($builder);
    };
}

single_value_metric!(
    /// Average of numeric values extracted from the aggregated documents.
    AvgAggregation,
    "avg",
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-avg-aggregation.html"
);

single_value_metric!(
    /// Minimum of numeric values extracted from the aggregated documents.
    MinAggregation,
    "min",
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-min-aggregation.html"
);

single_value_metric!(
    /// Maximum of numeric values extracted from the aggregated documents.
    MaxAggregation,
    "max",
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-max-aggregation.html"
);

single_value_metric!(
    /// Sum of numeric values extracted from the aggregated documents.
    SumAggregation,
    "sum",
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-sum-aggregation.html"
);

single_value_metric!(
    /// Count of values extracted from the aggregated documents.
    ValueCountAggregation,
    "value_count",
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-valuecount-aggregation.html"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::Aggregation;
    use serde_json::json;

    #[test]
    fn test_avg() {
        let def = AvgAggregation::new("avg_price", "price")
            .unwrap()
            .to_definition();
        assert_eq!(def, json!({"avg_price": {"avg": {"field": "price"}}}));
    }

    #[test]
    fn test_sum_with_missing() {
        let def = SumAggregation::new("total", "amount")
            .unwrap()
            .missing(0)
            .unwrap()
            .to_definition();
        assert_eq!(
            def,
            json!({"total": {"sum": {"field": "amount", "missing": 0}}})
        );
    }

    #[test]
    fn test_value_count_tag() {
        let agg = ValueCountAggregation::new("n", "sku").unwrap();
        assert_eq!(agg.agg_type(), "value_count");
    }
}
