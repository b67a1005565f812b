//! # Better Parametrize
//!
//! Describe parametrized test cases as structured records instead of
//! positional argument lists, and get human-readable test case labels for
//! free. The crate preprocesses the inputs of a host test framework's own
//! parametrization engine; it does not discover, schedule, execute or
//! report tests itself.
//!
//! ## Quick Start
//!
//! Declare a record type per test case group and attach the
//! `better_parametrize` marker to the test definition. During collection the
//! hook transforms the records into positional parameter sets and pipes them
//! into the host's parametrize call:
//!
//! ```rust
//! use better_parametrize::{generate_tests, plugin, Marker, TestCase, TestDefinition};
//!
//! #[derive(Clone, TestCase)]
//! struct Case {
//!     route: &'static str,
//!     status: u16,
//!     id: Option<&'static str>,
//! }
//!
//! let cases: Vec<Box<dyn TestCase>> = vec![
//!     Box::new(Case { route: "/users", status: 200, id: Some("happy path") }),
//!     Box::new(Case { route: "/missing", status: 404, id: None }),
//! ];
//!
//! let def = TestDefinition::new("test_routes")
//!     .mark(Marker::better_parametrize(Case::FIELDS, cases));
//!
//! # struct Engine;
//! # impl better_parametrize::Parametrizer for Engine {
//! #     fn parametrize(
//! #         &mut self,
//! #         _fields: &[better_parametrize::FieldName],
//! #         _params: Vec<better_parametrize::ParamSet>,
//! #         _options: &better_parametrize::EngineOptions,
//! #     ) {
//! #     }
//! # }
//! # let mut engine = Engine;
//! generate_tests(&def, plugin::registry(), &mut engine)?;
//! # Ok::<(), better_parametrize::Error>(())
//! ```
//!
//! The first case is labeled `happy path`; the second gets the synthesized
//! label `route="/missing",status=404`. The `id` field and any field named
//! in `ignore` are reserved: they are never forwarded to the test function
//! and never appear in synthesized labels.
//!
//! ## Direct decoration
//!
//! When only one axis of parametrization is needed, skip the marker
//! bookkeeping and compute the parametrization up front:
//!
//! ```rust,ignore
//! let decorator = better_parametrize(&Case::FIELDS, &cases, &[], EngineOptions::default())?;
//! decorator.apply(&mut engine);
//! ```
//!
//! ## Key Features
//!
//! - **Records over positions**: one struct per test case group, constructed
//!   by name, kept positionally aligned with the test function for you
//! - **Readable labels**: explicit per-case `id`, or a synthesized
//!   `field=value` label built from the forwarded fields only
//! - **Documentation fields**: `ignore` keeps free-text rationale fields out
//!   of the test function's parameter list
//! - **Stacked markers**: each marker contributes one independent axis; the
//!   host engine combines stacked axes multiplicatively

// Re-export the derive macro
pub use better_parametrize_derive::TestCase;

// Re-export core functionality
pub use better_parametrize_core::{
    better_parametrize, case, configure, error, generate_tests, hook, marker, plugin, registry,
    transform, CaseId, CaseValue, EngineOptions, Error, FieldList, FieldName, Marker, MarkerArgs,
    MarkerHandler, MarkerRegistry, ParamSet, Parametrize, Parametrizer, PluginConfig, Result,
    Scope, TestCase, TestDefinition, Transform, Value, MARKER_NAME,
};
