//! Percentiles aggregation builder

use serde_json::{json, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::aggregations::metric::METRIC_CAPS;
use crate::error::{Error, Result};

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-percentile-aggregation.html";

/// Multi-value metrics aggregation calculating one or more percentiles
/// over numeric values extracted from the aggregated documents.
#[derive(Debug, Clone)]
pub struct PercentilesAggregation {
    base: AggBase,
}

impl PercentilesAggregation {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Result<Self> {
        let mut base = AggBase::new(name, "percentiles", ES_REF_URL, METRIC_CAPS)?;
        base.set_common(CommonOp::Field, Value::String(field.into()))?;
        Ok(PercentilesAggregation { base })
    }

    /// Percentiles to calculate instead of the server default set.
    pub fn percents(&mut self, percents: Vec<f64>) -> Result<&mut Self> {
        if percents.is_empty() {
            return Err(Error::Validation(
                "percents must contain at least one value".to_owned(),
            ));
        }
        self.base.set("percents", json!(percents));
        Ok(self)
    }

    /// Return percentiles as a keyed object instead of an array.
    pub fn keyed(&mut self, keyed: bool) -> &mut Self {
        self.base.set("keyed", Value::Bool(keyed));
        self
    }

    /// t-digest compression: bounds memory use and approximation error.
    /// The node count is limited to `100 * compression` (server default
    /// 100).
    pub fn compression(&mut self, compression: f64) -> &mut Self {
        self.base
            .set("tdigest", json!({"compression": compression}));
        self
    }

    /// Use an HDR histogram instead of t-digest, with the given number of
    /// significant value digits.
    pub fn hdr(&mut self, number_of_sig_digits: u64) -> &mut Self {
        self.base.set(
            "hdr",
            json!({"number_of_significant_value_digits": number_of_sig_digits}),
        );
        self
    }
}

impl_aggregation!(PercentilesAggregation);
