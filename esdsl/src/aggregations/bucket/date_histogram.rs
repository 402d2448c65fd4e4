//! Date histogram aggregation builder

use serde_json::{json, Map, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp, Order};
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-datehistogram-aggregation.html";

const CAPS: &[CommonOp] = &[
    CommonOp::Field,
    CommonOp::Script,
    CommonOp::Format,
    CommonOp::Missing,
];

/// Multi-bucket aggregation over date values, like `histogram` but with
/// calendar-aware intervals expressed as date/time expressions
/// (`year`, `quarter`, `month`, `week`, `day`, `hour`, `minute`, `second`).
#[derive(Debug, Clone)]
pub struct DateHistogramAggregation {
    base: AggBase,
}

impl DateHistogramAggregation {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(DateHistogramAggregation {
            base: AggBase::new(name, "date_histogram", ES_REF_URL, CAPS)?,
        })
    }

    /// Interval to generate the histogram over, as a calendar expression.
    pub fn interval(&mut self, interval: impl Into<String>) -> &mut Self {
        self.base.set("interval", Value::String(interval.into()));
        self
    }

    /// Date-times are stored and bucketed in UTC by default. `time_zone`
    /// switches bucketing to another zone, given either as an ISO 8601 UTC
    /// offset (`+01:00`, `-08:00`) or a TZ database identifier
    /// (`America/Los_Angeles`).
    pub fn time_zone(&mut self, tz: impl Into<String>) -> &mut Self {
        self.base.set("time_zone", Value::String(tz.into()));
        self
    }

    /// Shift bucket boundaries by a positive or negative duration
    /// expression, e.g. `+6h`.
    pub fn offset(&mut self, offset: impl Into<String>) -> &mut Self {
        self.base.set("offset", Value::String(offset.into()));
        self
    }

    /// Only return buckets matching at least this many documents.
    pub fn min_doc_count(&mut self, count: u64) -> &mut Self {
        self.base.set("min_doc_count", json!(count));
        self
    }

    /// Force bucket generation over the given range even where no
    /// documents fall.
    pub fn extended_bounds(
        &mut self,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> &mut Self {
        let (min, max): (Value, Value) = (min.into(), max.into());
        self.base.set("extended_bounds", json!({"min": min, "max": max}));
        self
    }

    /// Return buckets as a keyed object instead of an array.
    pub fn keyed(&mut self, keyed: bool) -> &mut Self {
        self.base.set("keyed", Value::Bool(keyed));
        self
    }

    /// Bucket sort order, e.g. `order("_count", Order::Desc)`.
    pub fn order(&mut self, key: impl Into<String>, direction: Order) -> &mut Self {
        let mut order = Map::new();
        order.insert(key.into(), Value::String(direction.as_str().to_owned()));
        self.base.set("order", Value::Object(order));
        self
    }
}

impl_aggregation!(DateHistogramAggregation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::Aggregation;

    #[test]
    fn test_calendar_interval_with_time_zone() {
        let def = DateHistogramAggregation::new("a")
            .unwrap()
            .field("f")
            .unwrap()
            .interval("day")
            .time_zone("+05:30")
            .to_definition();
        assert_eq!(
            def,
            json!({"a": {"date_histogram": {"field": "f", "interval": "day", "time_zone": "+05:30"}}})
        );
    }

    #[test]
    fn test_offset_and_bounds() {
        let def = DateHistogramAggregation::new("by_day")
            .unwrap()
            .field("@timestamp")
            .unwrap()
            .interval("day")
            .offset("+6h")
            .extended_bounds("2023-01-01", "2023-12-31")
            .to_definition();
        assert_eq!(
            def["by_day"]["date_histogram"]["extended_bounds"],
            json!({"min": "2023-01-01", "max": "2023-12-31"})
        );
        assert_eq!(def["by_day"]["date_histogram"]["offset"], "+6h");
    }

    #[test]
    fn test_order_and_keyed() {
        let def = DateHistogramAggregation::new("a")
            .unwrap()
            .interval("month")
            .order("_count", Order::Desc)
            .keyed(true)
            .to_definition();
        assert_eq!(
            def["a"]["date_histogram"]["order"],
            json!({"_count": "desc"})
        );
        assert_eq!(def["a"]["date_histogram"]["keyed"], json!(true));
    }
}
