//! The record model: schemas, testcases and type-erased field values.

use std::{any::Any, fmt, sync::Arc};

use crate::FieldName;

/// The ordered field list a record schema exposes.
///
/// Deriving [`TestCase`] emits a `FIELDS` constant of this type. Passing it
/// to the transformer is the structural proof that the schema argument is a
/// record type and not a plain value; any other value is rejected with
/// [`Error::Schema`](crate::Error::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldList(pub &'static [FieldName]);

impl FieldList {
    /// Declared field names in order, reserved fields included.
    pub fn names(&self) -> &'static [FieldName] {
        self.0
    }
}

/// A type-erased testcase field value.
///
/// `Debug` supplies the textual form used in synthesized labels, and `Any`
/// lets the host engine recover the concrete type when binding the value to
/// a test function parameter.
pub trait CaseValue: fmt::Debug + Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T> CaseValue for T
where
    T: fmt::Debug + Any + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Type alias for a shared, type-erased field value.
pub type Value = Arc<dyn CaseValue>;

/// One concrete test case conforming to a record schema.
///
/// Usually implemented via `#[derive(TestCase)]` on a named-field struct.
pub trait TestCase: Send + Sync {
    /// Declared field names in order, reserved fields included.
    fn field_names(&self) -> FieldList;

    /// The value of one declared field, or `None` if this testcase does not
    /// carry it.
    fn value(&self, field: &str) -> Option<Value>;

    /// The explicit display label, when the record declares an `id` field
    /// and it is set.
    fn id(&self) -> Option<String> {
        None
    }
}

/// "Set" semantics for explicit testcase ids.
///
/// An empty id counts as unset, so the testcase falls back to the
/// synthesized `field=value` label.
pub trait CaseId {
    fn case_id(&self) -> Option<String>;
}

impl CaseId for str {
    fn case_id(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_owned())
        }
    }
}

impl CaseId for &str {
    fn case_id(&self) -> Option<String> {
        (**self).case_id()
    }
}

impl CaseId for String {
    fn case_id(&self) -> Option<String> {
        self.as_str().case_id()
    }
}

impl<T> CaseId for Option<T>
where
    T: CaseId,
{
    fn case_id(&self) -> Option<String> {
        self.as_ref().and_then(CaseId::case_id)
    }
}
