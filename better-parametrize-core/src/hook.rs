//! The collection-time hook wiring markers into the host engine.

use tracing::*;

use crate::{
    error::Result,
    marker::{Marker, MarkerRegistry},
    transform::{EngineOptions, ParamSet},
    FieldName,
};

/// The host engine's mutation interface for registering one axis of
/// parametrization on the test under collection.
///
/// Stacked axes are combined multiplicatively by the engine itself; this
/// crate only feeds them in the order the host reports the markers.
pub trait Parametrizer {
    fn parametrize(&mut self, fields: &[FieldName], params: Vec<ParamSet>, options: &EngineOptions);
}

/// The hook's read view of one candidate test function: its name plus the
/// markers applied to it, in declaration order.
pub struct TestDefinition {
    name: String,
    markers: Vec<Marker>,
}

impl TestDefinition {
    pub fn new(name: impl Into<String>) -> TestDefinition {
        TestDefinition {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a marker. Declaration order is preserved.
    pub fn mark(mut self, marker: Marker) -> TestDefinition {
        self.markers.push(marker);
        self
    }

    pub fn own_markers(&self) -> &[Marker] {
        &self.markers
    }
}

/// Collection-time hook, invoked once per candidate test function.
///
/// Scans the function's own markers in the order the host reports them and
/// dispatches each recognized one through the registry; every matching
/// marker contributes one independent axis of parametrization. Marker names
/// with no registered handler belong to other plugins and are skipped.
/// Transformer errors propagate untranslated and abort collection of this
/// test item; the host reports them as collection errors.
pub fn generate_tests(
    def: &TestDefinition,
    registry: &MarkerRegistry,
    metafunc: &mut dyn Parametrizer,
) -> Result<()> {
    for marker in def.own_markers() {
        let Some(handler) = registry.handler(marker.name) else {
            trace!(marker = marker.name, test = def.name(), "unrecognized marker, skipping");
            continue;
        };

        debug!(marker = marker.name, test = def.name(), "parametrizing");
        handler(marker, metafunc)?;
    }

    Ok(())
}
