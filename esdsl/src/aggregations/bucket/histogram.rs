//! Numeric histogram aggregation builder

use serde_json::{json, Map, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp, Order};
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-histogram-aggregation.html";

const CAPS: &[CommonOp] = &[
    CommonOp::Field,
    CommonOp::Script,
    CommonOp::Format,
    CommonOp::Missing,
];

/// Multi-bucket aggregation that buckets numeric values into fixed-size
/// intervals.
#[derive(Debug, Clone)]
pub struct HistogramAggregation {
    base: AggBase,
}

impl HistogramAggregation {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(HistogramAggregation {
            base: AggBase::new(name, "histogram", ES_REF_URL, CAPS)?,
        })
    }

    /// Bucket width.
    pub fn interval(&mut self, interval: f64) -> &mut Self {
        self.base.set("interval", json!(interval));
        self
    }

    /// Only return buckets matching at least this many documents.
    pub fn min_doc_count(&mut self, count: u64) -> &mut Self {
        self.base.set("min_doc_count", json!(count));
        self
    }

    /// Force bucket generation over the given range even where no
    /// documents fall.
    pub fn extended_bounds(&mut self, min: f64, max: f64) -> &mut Self {
        self.base
            .set("extended_bounds", json!({"min": min, "max": max}));
        self
    }

    /// Return buckets as a keyed object instead of an array.
    pub fn keyed(&mut self, keyed: bool) -> &mut Self {
        self.base.set("keyed", Value::Bool(keyed));
        self
    }

    /// Bucket sort order, e.g. `order("_key", Order::Asc)`.
    pub fn order(&mut self, key: impl Into<String>, direction: Order) -> &mut Self {
        let mut order = Map::new();
        order.insert(key.into(), Value::String(direction.as_str().to_owned()));
        self.base.set("order", Value::Object(order));
        self
    }
}

impl_aggregation!(HistogramAggregation);
