//! End-to-end collection tests: derive a record type, attach markers, run
//! the collection hook against a stand-in host engine and inspect what the
//! engine would execute.

use better_parametrize::{
    better_parametrize, configure, generate_tests, plugin, EngineOptions, FieldName, Marker,
    ParamSet, Parametrizer, PluginConfig, Scope, TestCase, TestDefinition,
};
use pretty_assertions::assert_eq;

/// Minimal stand-in for the host engine. It records each registered axis
/// and combines stacked axes multiplicatively, the way the real engine
/// composes stacked parametrize calls.
#[derive(Default)]
struct FakeEngine {
    axes: Vec<(Vec<FieldName>, Vec<ParamSet>, EngineOptions)>,
}

impl Parametrizer for FakeEngine {
    fn parametrize(&mut self, fields: &[FieldName], params: Vec<ParamSet>, options: &EngineOptions) {
        self.axes.push((fields.to_vec(), params, options.clone()));
    }
}

impl FakeEngine {
    /// Labels of the cartesian product over all registered axes.
    fn combined_labels(&self) -> Vec<String> {
        let mut labels = vec![String::new()];
        for (_, params, _) in &self.axes {
            labels = labels
                .iter()
                .flat_map(|prefix| {
                    params.iter().map(move |param| {
                        if prefix.is_empty() {
                            param.id.clone()
                        } else {
                            format!("{prefix}-{}", param.id)
                        }
                    })
                })
                .collect();
        }
        labels
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Clone, TestCase)]
struct HttpCase {
    route: &'static str,
    status: u16,
    description: &'static str,
    id: Option<&'static str>,
}

fn http_cases() -> Vec<Box<dyn TestCase>> {
    vec![
        Box::new(HttpCase {
            route: "/users",
            status: 200,
            description: "existing collection responds",
            id: Some("happy path"),
        }),
        Box::new(HttpCase {
            route: "/missing",
            status: 404,
            description: "unknown routes must not 500",
            id: None,
        }),
    ]
}

#[derive(Clone, TestCase)]
struct RetryCase {
    retries: u8,
}

fn retry_cases() -> Vec<Box<dyn TestCase>> {
    vec![
        Box::new(RetryCase { retries: 0 }),
        Box::new(RetryCase { retries: 1 }),
        Box::new(RetryCase { retries: 3 }),
    ]
}

#[test]
fn marker_collection_end_to_end() -> eyre::Result<()> {
    init_tracing();

    let def = TestDefinition::new("test_http_routes").mark(
        Marker::better_parametrize(HttpCase::FIELDS, http_cases()).ignore("description"),
    );
    let mut engine = FakeEngine::default();

    generate_tests(&def, plugin::registry(), &mut engine)?;

    let (fields, params, _) = &engine.axes[0];
    assert_eq!(&vec!["route", "status"], fields);
    assert_eq!("happy path", params[0].id);
    assert_eq!("route=\"/missing\",status=404", params[1].id);

    // Values stay positionally aligned with the forwarded fields.
    assert_eq!(
        Some(&"/users"),
        params[0].values[0].as_any().downcast_ref::<&str>()
    );
    assert_eq!(
        Some(&200u16),
        params[0].values[1].as_any().downcast_ref::<u16>()
    );
    Ok(())
}

#[test]
fn ignored_documentation_field_never_reaches_the_engine() -> eyre::Result<()> {
    let def = TestDefinition::new("test_http_routes").mark(
        Marker::better_parametrize(HttpCase::FIELDS, http_cases()).ignore("description"),
    );
    let mut engine = FakeEngine::default();

    generate_tests(&def, plugin::registry(), &mut engine)?;

    let (fields, params, _) = &engine.axes[0];
    assert!(!fields.contains(&"description"));
    for param in params {
        assert!(!param.id.contains("description"));
        assert_eq!(fields.len(), param.values.len());
    }
    Ok(())
}

#[test]
fn stacked_markers_multiply_in_the_engine() -> eyre::Result<()> {
    let def = TestDefinition::new("test_http_routes_with_retries")
        .mark(Marker::better_parametrize(HttpCase::FIELDS, http_cases()).ignore("description"))
        .mark(Marker::better_parametrize(RetryCase::FIELDS, retry_cases()));
    let mut engine = FakeEngine::default();

    generate_tests(&def, plugin::registry(), &mut engine)?;

    // 2 http cases x 3 retry cases.
    let labels = engine.combined_labels();
    assert_eq!(6, labels.len());
    assert_eq!("happy path-retries=0", labels[0]);
    assert_eq!("route=\"/missing\",status=404-retries=3", labels[5]);
    Ok(())
}

#[test]
fn engine_options_arrive_verbatim() -> eyre::Result<()> {
    let def = TestDefinition::new("test_http_routes").mark(
        Marker::better_parametrize(HttpCase::FIELDS, http_cases())
            .ignore("description")
            .scope(Scope::Module)
            .extra("indirect", "true"),
    );
    let mut engine = FakeEngine::default();

    generate_tests(&def, plugin::registry(), &mut engine)?;

    let (_, _, options) = &engine.axes[0];
    assert_eq!(Some(Scope::Module), options.scope);
    assert_eq!(Some(&"true".to_string()), options.extras.get("indirect"));
    Ok(())
}

#[test]
fn direct_decoration_matches_the_marker_path() -> eyre::Result<()> {
    let ignore = vec!["description".to_string()];
    let decorator = better_parametrize(
        &HttpCase::FIELDS,
        &http_cases(),
        &ignore,
        EngineOptions::default(),
    )?;

    let mut direct = FakeEngine::default();
    decorator.apply(&mut direct);

    let def = TestDefinition::new("test_http_routes").mark(
        Marker::better_parametrize(HttpCase::FIELDS, http_cases()).ignore("description"),
    );
    let mut marked = FakeEngine::default();
    generate_tests(&def, plugin::registry(), &mut marked)?;

    assert_eq!(direct.axes[0].0, marked.axes[0].0);
    assert_eq!(direct.combined_labels(), marked.combined_labels());
    Ok(())
}

#[test]
fn configure_declares_the_marker_once() {
    #[derive(Default)]
    struct Ini {
        markers: Vec<&'static str>,
    }

    impl PluginConfig for Ini {
        fn declare_marker(&mut self, name: &'static str) {
            self.markers.push(name);
        }
    }

    let mut ini = Ini::default();
    configure(&mut ini);

    assert_eq!(vec!["better_parametrize"], ini.markers);
}
