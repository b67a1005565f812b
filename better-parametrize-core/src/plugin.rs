//! Plugin registration boilerplate: declaring the marker with the host
//! framework and building the marker table the collection hook uses.

use once_cell::sync::Lazy;

use crate::{
    error::Result,
    hook::Parametrizer,
    marker::{Marker, MarkerRegistry, MARKER_NAME},
    transform::transform,
};

/// Host surface for declaring recognized markers at startup.
pub trait PluginConfig {
    fn declare_marker(&mut self, name: &'static str);
}

/// Declares the `better_parametrize` marker with the host framework.
///
/// Invoked once at host startup; the programmatic equivalent of listing the
/// marker in the host's configuration file, and what keeps applying the
/// marker from triggering unknown-marker warnings.
pub fn configure(config: &mut dyn PluginConfig) {
    config.declare_marker(MARKER_NAME);
}

static REGISTRY: Lazy<MarkerRegistry> = Lazy::new(|| {
    let mut registry = MarkerRegistry::new();
    registry.register(MARKER_NAME, parametrize_marker);
    registry
});

/// The marker table, built once per process.
pub fn registry() -> &'static MarkerRegistry {
    &REGISTRY
}

/// Handler for one `better_parametrize` marker: transform its arguments and
/// pipe the result into the host's own parametrize call.
fn parametrize_marker(marker: &Marker, metafunc: &mut dyn Parametrizer) -> Result<()> {
    let args = &marker.args;
    let t = transform(
        args.schema.as_ref(),
        &args.cases,
        &args.ignore,
        args.options.clone(),
    )?;
    metafunc.parametrize(&t.fields, t.params, &t.options);
    Ok(())
}
