//! The argument transformer: turns a record schema plus a sequence of
//! testcases into the positional field names, value tuples and display
//! labels the host engine's parametrize call expects.

use std::{any::Any, collections::BTreeMap};

use itertools::Itertools;
use tracing::*;

use crate::{
    case::{FieldList, TestCase, Value},
    error::{Error, Result},
    hook::Parametrizer,
    FieldName,
};

/// Execution-scope hint forwarded to the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Scope {
    Function,
    Module,
    Session,
}

/// Options forwarded untouched to the host engine's parametrize call.
///
/// Recognized options are enumerated; anything else travels in `extras`,
/// which the transformer never interprets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOptions {
    /// Execution-scope hint understood by the host engine.
    pub scope: Option<Scope>,
    /// Caller-defined options forwarded verbatim.
    pub extras: BTreeMap<String, String>,
}

impl EngineOptions {
    pub fn scope(mut self, scope: Scope) -> EngineOptions {
        self.scope = Some(scope);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> EngineOptions {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// One test case ready for the host engine: the forwarded values in field
/// order plus the display label identifying the case in test output.
#[derive(Debug, Clone)]
pub struct ParamSet {
    pub values: Vec<Value>,
    pub id: String,
}

/// The transformer's output.
///
/// `fields` preserves the schema's declared order minus reserved fields and
/// positionally aligns with the values of every [`ParamSet`] in `params`.
#[derive(Debug, Clone)]
pub struct Transform {
    pub fields: Vec<FieldName>,
    pub params: Vec<ParamSet>,
    pub options: EngineOptions,
}

/// Unpacks testcases into positional parameter sets for the host engine.
///
/// `schema` must be the [`FieldList`] of the record type the testcases
/// conform to; any other value fails with [`Error::Schema`]. The field named
/// `id` and every field named in `ignore` are reserved: they are stripped
/// from the forwarded fields and never appear in synthesized labels. An
/// empty `cases` sequence is legal and produces zero parameter sets.
pub fn transform(
    schema: &(dyn Any + Send + Sync),
    cases: &[Box<dyn TestCase>],
    ignore: &[String],
    options: EngineOptions,
) -> Result<Transform> {
    let Some(FieldList(declared)) = schema.downcast_ref::<FieldList>() else {
        return Err(Error::Schema);
    };

    let fields = declared
        .iter()
        .copied()
        .filter(|field| *field != "id" && !ignore.iter().any(|ignored| ignored == field))
        .collect::<Vec<_>>();

    let params = cases
        .iter()
        .enumerate()
        .map(|(case, testcase)| to_param_set(testcase.as_ref(), &fields, case))
        .collect::<Result<Vec<_>>>()?;

    debug!(?fields, cases = params.len(), "transformed testcases");

    Ok(Transform {
        fields,
        params,
        options,
    })
}

fn to_param_set(testcase: &dyn TestCase, fields: &[FieldName], case: usize) -> Result<ParamSet> {
    let values = fields
        .iter()
        .map(|field| {
            testcase.value(field).ok_or_else(|| Error::FieldMissing {
                case,
                field: field.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let id = match testcase.id().filter(|id| !id.is_empty()) {
        Some(id) => id,
        // Synthesized from the forwarded fields only, so ignored fields
        // never leak into the label.
        None => fields
            .iter()
            .zip(&values)
            .map(|(field, value)| format!("{field}={value:?}"))
            .join(","),
    };

    Ok(ParamSet { values, id })
}

/// A ready-made parametrization that can be applied directly to a test
/// function, without going through marker discovery.
#[derive(Debug, Clone)]
pub struct Parametrize {
    transform: Transform,
}

impl Parametrize {
    /// Register the precomputed axis with the host engine.
    pub fn apply(&self, metafunc: &mut dyn Parametrizer) {
        metafunc.parametrize(
            &self.transform.fields,
            self.transform.params.clone(),
            &self.transform.options,
        );
    }
}

/// Direct-decoration entry point.
///
/// Computes the transform immediately and returns a [`Parametrize`] the
/// caller applies to a test definition. Semantically identical to attaching
/// the `better_parametrize` marker, minus the marker bookkeeping; useful
/// when only one axis of parametrization is needed.
pub fn better_parametrize(
    schema: &(dyn Any + Send + Sync),
    cases: &[Box<dyn TestCase>],
    ignore: &[String],
    options: EngineOptions,
) -> Result<Parametrize> {
    Ok(Parametrize {
        transform: transform(schema, cases, ignore, options)?,
    })
}
