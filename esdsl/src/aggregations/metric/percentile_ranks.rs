//! Percentile ranks aggregation builder

use serde_json::{json, Value};

use crate::aggregations::core::{impl_aggregation, AggBase, CommonOp};
use crate::error::{Error, Result};

const ES_REF_URL: &str =
    "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-metrics-percentile-rank-aggregation.html";

// Ranks are percentages; the engine rejects `format` for this type.
const CAPS: &[CommonOp] = &[CommonOp::Field, CommonOp::Script, CommonOp::Missing];

/// Multi-value metrics aggregation calculating, for each of the given
/// values, the percentage of observed values at or below it.
///
/// `compression` and `hdr` select competing estimation methods, but both
/// keys may be set at once; this layer does no cross-field validation and
/// leaves the choice to the engine.
#[derive(Debug, Clone)]
pub struct PercentileRanksAggregation {
    base: AggBase,
}

impl PercentileRanksAggregation {
    /// `values` are the values to compute ranks for; an empty list fails
    /// with [`Error::Validation`] before any field is set.
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self> {
        Self::check_values(&values)?;
        let mut base = AggBase::new(name, "percentile_ranks", ES_REF_URL, CAPS)?;
        base.set_common(CommonOp::Field, Value::String(field.into()))?;
        base.set("values", json!(values));
        Ok(PercentileRanksAggregation { base })
    }

    fn check_values(values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::Validation(
                "values must contain at least one value".to_owned(),
            ));
        }
        Ok(())
    }

    /// Replace the values to compute ranks for.
    pub fn values(&mut self, values: Vec<f64>) -> Result<&mut Self> {
        Self::check_values(&values)?;
        self.base.set("values", json!(values));
        Ok(self)
    }

    /// Return ranks as a keyed object instead of an array.
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

impl_aggregation!(PercentileRanksAggregation);
