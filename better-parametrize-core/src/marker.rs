//! The marker model and the typed registration table the collection hook
//! dispatches through.

use std::{any::Any, collections::HashMap};

use crate::{
    case::TestCase,
    error::Result,
    hook::Parametrizer,
    transform::{EngineOptions, Scope},
};

/// The marker identifier declared with the host framework.
pub const MARKER_NAME: &str = "better_parametrize";

/// Arguments carried by one applied marker.
///
/// `schema` is type-erased on purpose: the host hands marker arguments over
/// without interpreting them, and the transformer performs the structural
/// schema check itself.
pub struct MarkerArgs {
    pub schema: Box<dyn Any + Send + Sync>,
    pub cases: Vec<Box<dyn TestCase>>,
    pub ignore: Vec<String>,
    pub options: EngineOptions,
}

/// One marker applied to a test function.
pub struct Marker {
    pub name: &'static str,
    pub args: MarkerArgs,
}

impl Marker {
    pub fn new(name: &'static str, args: MarkerArgs) -> Marker {
        Marker { name, args }
    }

    /// A `better_parametrize(schema, cases)` marker value.
    pub fn better_parametrize(
        schema: impl Any + Send + Sync,
        cases: Vec<Box<dyn TestCase>>,
    ) -> Marker {
        Marker::new(
            MARKER_NAME,
            MarkerArgs {
                schema: Box::new(schema),
                cases,
                ignore: Vec::new(),
                options: EngineOptions::default(),
            },
        )
    }

    /// Exclude a field from forwarding and from synthesized labels.
    pub fn ignore(mut self, field: impl Into<String>) -> Marker {
        self.args.ignore.push(field.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Marker {
        self.args.options.scope = Some(scope);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Marker {
        self.args.options.extras.insert(key.into(), value.into());
        self
    }
}

/// Handler invoked when the collection hook finds a marker it recognizes.
pub type MarkerHandler = fn(&Marker, &mut dyn Parametrizer) -> Result<()>;

/// Typed registration table mapping marker names to handlers.
///
/// Populated once at plugin configuration time, so the collection hook
/// dispatches through a single table lookup instead of comparing marker
/// names inline at every call site.
#[derive(Default)]
pub struct MarkerRegistry {
    handlers: HashMap<&'static str, MarkerHandler>,
}

impl MarkerRegistry {
    pub fn new() -> MarkerRegistry {
        MarkerRegistry::default()
    }

    pub fn register(&mut self, name: &'static str, handler: MarkerHandler) {
        self.handlers.insert(name, handler);
    }

    pub fn handler(&self, name: &str) -> Option<MarkerHandler> {
        self.handlers.get(name).copied()
    }
}
