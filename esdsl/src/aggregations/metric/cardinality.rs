//! Cardinality aggregation builder

use serde_json::{json, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-cardinality-aggregation.html";

// Approximate counts have no printable value format; the engine rejects
// `format` for this type.
const CAPS: &[CommonOp] = &[CommonOp::Field, CommonOp::Script, CommonOp::Missing];

/// Single-value metrics aggregation computing an approximate count of
/// distinct values.
#[derive(Debug, Clone)]
pub struct CardinalityAggregation {
    base: AggBase,
}

impl CardinalityAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Result<Self> {
        let mut base = AggBase::new(name, "cardinality", ES_REF_URL, CAPS)?;
        base.set_common(CommonOp::Field, Value::String(field.into()))?;
        Ok(CardinalityAggregation { base })
    }

    /// Count threshold below which counts are expected to be close to
    /// accurate (server maximum 40000).
    pub fn precision_threshold(&mut self, threshold: u64) -> &mut Self {
        self.base.set("precision_threshold", json!(threshold));
        self
    }
}

impl_aggregation!(CardinalityAggregation);
