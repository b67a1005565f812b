//! # Better Parametrize Core
//!
//! Core functionality for the better-parametrize test extension, including:
//! - The record model (schemas, testcases, type-erased field values)
//! - The argument transformer turning testcase records into positional
//!   parameter sets with display labels
//! - The marker model and typed marker registry
//! - The collection hook and plugin registration seams
//!
//! ## Architecture (block diagram)
//!
//! ```text
//! +---------------------+      +---------------------+      +---------------------+
//! | testcase records    | ---> | argument transformer| ---> | host parametrize    |
//! | #[derive(TestCase)] |      | fields/values/labels|      | engine (external)   |
//! +---------------------+      +---------------------+      +---------------------+
//!            |                         ^                               ^
//!            v                         |                               |
//! +---------------------+      +---------------------+                |
//! | marker arguments    | ---> | collection hook     | ---------------+
//! | better_parametrize  |      | + marker registry   |
//! +---------------------+      +---------------------+
//! ```
//!
//! Most users should use the main `better-parametrize` crate rather than
//! importing `better-parametrize-core` directly.

pub mod case;
pub mod error;
pub mod hook;
pub mod marker;
pub mod plugin;
pub mod transform;

/// Type alias for declared record field names.
///
/// Field names are declared once per record type and live for the whole
/// process, so they are borrowed rather than owned throughout.
pub type FieldName = &'static str;

// Re-export key functionality
pub use case::{CaseId, CaseValue, FieldList, TestCase, Value};
pub use error::{Error, Result};
pub use hook::{generate_tests, Parametrizer, TestDefinition};
pub use marker::{Marker, MarkerArgs, MarkerHandler, MarkerRegistry, MARKER_NAME};
pub use plugin::{configure, registry, PluginConfig};
pub use transform::{
    better_parametrize, transform, EngineOptions, ParamSet, Parametrize, Scope, Transform,
};
