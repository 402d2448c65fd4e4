//! Sampler aggregation builder

use serde_json::json;

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::error::Result;

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-sampler-aggregation.html";

// The engine rejects every document-value parameter on sampler; it only
// limits which documents the sub-aggregations see.
const CAPS: &[CommonOp] = &[];

/// A filtering aggregation that limits sub-aggregation processing to a
/// sample of the top-scoring documents. `field` and `script` are not
/// accepted by the engine for this type and fail with
/// [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).
#[derive(Debug, Clone)]
pub struct SamplerAggregation {
    base: AggBase,
}

impl SamplerAggregation {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(SamplerAggregation {
            base: AggBase::new(name, "sampler", ES_REF_URL, CAPS)?,
        })
    }

    /// Maximum number of top-scoring documents collected per shard
    /// (server default 100).
    pub fn shard_size(&mut self, size: u64) -> &mut Self {
        self.base.set("shard_size", json!(size));
        self
    }
}

impl_aggregation!(SamplerAggregation);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregations::Aggregation;
    use crate::error::Error;
    use crate::script::Script;

    #[test]
    fn test_shard_size() {
        let def = SamplerAggregation::new("s")
            .unwrap()
            .shard_size(50)
            .to_definition();
        assert_eq!(def, json!({"s": {"sampler": {"shard_size": 50}}}));
    }

    #[test]
    fn test_field_not_supported() {
        let mut agg = SamplerAggregation::new("s").unwrap();
        let err = agg.field("x").unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOperation {
                operation: "field",
                agg_type: "sampler",
                ..
            }
        ));
    }

    #[test]
    fn test_script_not_supported() {
        let mut agg = SamplerAggregation::new("s").unwrap();
        let err = agg.script(Script::source("doc['a'].value")).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOperation {
                operation: "script",
                ..
            }
        ));
    }

    #[test]
    fn test_rejected_call_leaves_record_intact() {
        let mut agg = SamplerAggregation::new("s").unwrap();
        agg.shard_size(200);
        let before = agg.to_definition();
        agg.field("x").unwrap_err();
        assert_eq!(agg.to_definition(), before);
    }
}
