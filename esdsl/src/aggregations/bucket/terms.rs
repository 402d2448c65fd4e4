//! Terms aggregation builder

use serde_json::{json, Map, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp, Order};
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-terms-aggregation.html";

const CAPS: &[CommonOp] = &[
    CommonOp::Field,
    CommonOp::Script,
    CommonOp::Format,
    CommonOp::Missing,
];

/// Multi-bucket aggregation producing one bucket per unique value of the
/// target field.
#[derive(Debug, Clone)]
pub struct TermsAggregation {
    base: AggBase,
}

impl TermsAggregation {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(TermsAggregation {
            base: AggBase::new(name, "terms", ES_REF_URL, CAPS)?,
        })
    }

    /// Number of term buckets to return (server default 10).
    pub fn size(&mut self, size: u64) -> &mut Self {
        self.base.set("size", json!(size));
        self
    }

    /// Number of term buckets each shard considers.
    pub fn shard_size(&mut self, size: u64) -> &mut Self {
        self.base.set("shard_size", json!(size));
        self
    }

    /// Only return buckets matching at least this many documents.
    pub fn min_doc_count(&mut self, count: u64) -> &mut Self {
        self.base.set("min_doc_count", json!(count));
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

impl_aggregation!(TermsAggregation);
