//! Shared builder core for all aggregation types
//!
//! Every leaf builder wraps an [`AggBase`]: the aggregation name, a fixed
//! type tag, the accumulated definition record, and any nested
//! sub-aggregations. The setters shared across aggregation families
//! (`field`, `script`, `format`, `missing`) are provided once by the
//! [`Aggregation`] trait and gated per type by a capability table, so a
//! parameter the engine rejects for a given type fails up front instead of
//! surfacing as a server error at query time.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::script::Script;

/// The setters shared across aggregation families. Each leaf type declares
/// the subset its engine-side counterpart accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonOp {
    Field,
    Script,
    Format,
    Missing,
}

impl CommonOp {
    /// Wire name of the parameter this operation sets.
    pub fn key(self) -> &'static str {
        match self {
            CommonOp::Field => "field",
            CommonOp::Script => "script",
            CommonOp::Format => "format",
            CommonOp::Missing => "missing",
        }
    }
}

/// Sort direction for bucket ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// The definition record behind every aggregation builder.
///
/// Fields are kept in a `serde_json::Map` keyed by engine wire names;
/// children are stored already flattened (keyed by child name) so
/// serialization is a pure read.
#[derive(Debug, Clone)]
pub struct AggBase {
    name: String,
    agg_type: &'static str,
    reference: &'static str,
    caps: &'static [CommonOp],
    fields: Map<String, Value>,
    children: Map<String, Value>,
}

impl AggBase {
    pub(crate) fn new(
        name: impl Into<String>,
        agg_type: &'static str,
        reference: &'static str,
        caps: &'static [CommonOp],
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Validation(
                "aggregation name must be a non-empty string".to_owned(),
            ));
        }
        Ok(AggBase {
            name,
            agg_type,
            reference,
            caps,
            fields: Map::new(),
            children: Map::new(),
        })
    }

    /// Unconditional field assignment, used by type-specific setters.
    pub(crate) fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_owned(), value);
    }

    /// Capability-checked assignment for the shared setters. Fails before
    /// touching the record when the operation is not in this type's
    /// capability set.
    pub(crate) fn set_common(&mut self, op: CommonOp, value: Value) -> Result<()> {
        if !self.caps.contains(&op) {
            tracing::debug!(
                agg_type = self.agg_type,
                operation = op.key(),
                reference = self.reference,
                "rejected unsupported aggregation parameter"
            );
            return Err(Error::UnsupportedOperation {
                operation: op.key(),
                agg_type: self.agg_type,
                reference: self.reference,
            });
        }
        self.set(op.key(), value);
        Ok(())
    }

    /// Install a child definition under `aggs`. A repeated name replaces
    /// the prior child; sibling collisions are left to the engine.
    pub(crate) fn add_child(&mut self, name: String, body: Value) {
        self.children.insert(name, body);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agg_type(&self) -> &'static str {
        self.agg_type
    }

    /// The node body: `{ <type>: {fields...}, "aggs"?: {children...} }`.
    /// This is what a parent stores under the child's name.
    pub(crate) fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(self.agg_type.to_owned(), Value::Object(self.fields.clone()));
        if !self.children.is_empty() {
            body.insert("aggs".to_owned(), Value::Object(self.children.clone()));
        }
        Value::Object(body)
    }

    /// The full definition keyed by the aggregation name. Pure; calling it
    /// repeatedly without mutation yields identical output.
    pub fn to_definition(&self) -> Value {
        let mut root = Map::new();
        root.insert(self.name.clone(), self.body());
        Value::Object(root)
    }
}

/// Fluent surface shared by every aggregation builder.
///
/// Setters take `&mut self` and return `&mut Self` so a chain can be built
/// in one expression while a failed call leaves the builder usable; the
/// record stays in its last valid state and the caller may resume with a
/// different setter.
pub trait Aggregation {
    fn base(&self) -> &AggBase;
    fn base_mut(&mut self) -> &mut AggBase;

    /// The document field to aggregate on.
    fn field(&mut self, field: impl Into<String>) -> Result<&mut Self> {
        self.base_mut()
            .set_common(CommonOp::Field, Value::String(field.into()))?;
        Ok(self)
    }

    /// Compute the aggregated values with a script instead of a field.
    fn script(&mut self, script: Script) -> Result<&mut Self> {
        let value = serde_json::to_value(&script)?;
        self.base_mut().set_common(CommonOp::Script, value)?;
        Ok(self)
    }

    /// Output format pattern for bucket keys or metric values.
    fn format(&mut self, format: impl Into<String>) -> Result<&mut Self> {
        self.base_mut()
            .set_common(CommonOp::Format, Value::String(format.into()))?;
        Ok(self)
    }

    /// Value to use for documents missing the target field.
    fn missing(&mut self, missing: impl Into<Value>) -> Result<&mut Self> {
        self.base_mut()
            .set_common(CommonOp::Missing, missing.into())?;
        Ok(self)
    }

    /// Attach a sub-aggregation, nested under this node's `aggs` key.
    fn agg(&mut self, child: &impl Aggregation) -> &mut Self {
        let name = child.base().name().to_owned();
        let body = child.base().body();
        self.base_mut().add_child(name, body);
        self
    }

    /// Serialize the accumulated definition:
    /// `{ <name>: { <type>: {...}, "aggs"?: {...} } }`.
    fn to_definition(&self) -> Value {
        self.base().to_definition()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn agg_type(&self) -> &'static str {
        self.base().agg_type()
    }
}

/// Wires a leaf builder struct (with a `base: AggBase` member) into the
/// [`Aggregation`] trait.
macro_rules! impl_aggregation {
    ($t:ty) => {
        impl crate::aggregations::Aggregation for $t {
            fn base(&self) -> &crate::aggregations::core::AggBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut crate::aggregations::core::AggBase {
                &mut self.base
            }
        }
    };
}

pub(crate) use impl_aggregation;
