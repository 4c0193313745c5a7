//! End-to-end resolution over published metadata fixtures
//!
//! Exercises the complete flow: session setup with the JVM ecosystem and a
//! schema config file -> metadata parsing -> variant selection per edge.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use variant_core::{Error, JvmEcosystem, ModuleMetadata, ResolutionSession};
use variant_model::{AttributeContainer, AttributeValue, Component, ComponentId, Variant};
use variant_schema::SchemaConfig;

const USAGE: &str = "org.gradle.usage";
const JVM_VERSION: &str = "org.gradle.jvm.version";

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn jvm_session() -> ResolutionSession {
    let mut builder = ResolutionSession::builder();
    builder.ecosystem(&JvmEcosystem::new()).unwrap();
    builder.build().expect("session builds")
}

fn load_module(session: &ResolutionSession, name: &str) -> Component {
    let path = fixtures_dir().join("modules").join(format!("{name}.module"));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture at {}: {}", path.display(), e));
    ModuleMetadata::from_json(&content)
        .and_then(|metadata| metadata.into_component(session.schema()))
        .unwrap_or_else(|e| panic!("Invalid module fixture {}: {}", path.display(), e))
}

fn compile_classpath(jvm: i64) -> AttributeContainer {
    AttributeContainer::new()
        .with(USAGE, "java-api")
        .with(JVM_VERSION, jvm)
}

fn runtime_classpath(jvm: i64) -> AttributeContainer {
    AttributeContainer::new()
        .with(USAGE, "java-runtime")
        .with(JVM_VERSION, jvm)
}

#[rstest]
#[case("jackson-databind", 3)]
#[case("spring-core", 2)]
#[case("cli-tool", 2)]
fn test_module_fixtures_parse(#[case] name: &str, #[case] variants: usize) {
    let session = jvm_session();
    let component = load_module(&session, name);
    assert_eq!(component.variants().len(), variants);
}

#[test]
fn test_compile_classpath_on_java_11() {
    let session = jvm_session();
    let jackson = load_module(&session, "jackson-databind");
    let spring = load_module(&session, "spring-core");
    let commons = Component::legacy(
        ComponentId::new("commons-lang", "commons-lang", "2.6"),
        Some("jar"),
        vec![],
    );
    let request = compile_classpath(11);

    let results = session.select_all([
        (&jackson, &request),
        (&spring, &request),
        (&commons, &request),
    ]);

    assert_eq!(results[0].as_ref().unwrap().name(), "apiElements");
    match &results[1] {
        Err(Error::Select(variant_select::Error::NoCompatibleVariant { rejected, .. })) => {
            assert_eq!(rejected.len(), 2);
            assert!(
                rejected
                    .iter()
                    .all(|r| r.mismatches.iter().any(|m| m.attribute.as_str() == JVM_VERSION))
            );
        }
        other => panic!("expected NoCompatibleVariant, got {other:?}"),
    }
    assert_eq!(results[2].as_ref().unwrap().name(), "default");
    assert_eq!(session.derived_components(), 1);
}

#[test]
fn test_runtime_classpath_on_java_21() {
    let session = jvm_session();
    let request = runtime_classpath(21);

    let selected: Vec<(String, String)> = ["jackson-databind", "spring-core", "cli-tool"]
        .into_iter()
        .map(|name| {
            let component = load_module(&session, name);
            let variant = session.select(&component, &request).unwrap();
            (name.to_string(), variant.name().to_string())
        })
        .collect();

    assert_eq!(
        selected,
        vec![
            ("jackson-databind".to_string(), "runtimeElements".to_string()),
            ("spring-core".to_string(), "runtimeElements".to_string()),
            ("cli-tool".to_string(), "runtimeElements".to_string()),
        ]
    );
}

#[test]
fn test_javadoc_request_selects_documentation() {
    let session = jvm_session();
    let jackson = load_module(&session, "jackson-databind");
    let request = AttributeContainer::new()
        .with("org.gradle.category", "documentation")
        .with("org.gradle.docstype", "javadoc");

    let selected = session.select(&jackson, &request).unwrap();

    assert_eq!(selected.name(), "javadocElements");
    assert_eq!(
        selected.artifacts()[0].name,
        "jackson-databind-2.17.0-javadoc.jar"
    );
}

#[test]
fn test_shadowed_request_selects_fat_jar() {
    let session = jvm_session();
    let tool = load_module(&session, "cli-tool");
    let request = runtime_classpath(17).with("org.gradle.dependency.bundling", "shadowed");

    let selected = session.select(&tool, &request).unwrap();

    assert_eq!(selected.name(), "shadowRuntimeElements");
}

#[test]
fn test_repeated_resolution_is_deterministic() {
    let session = jvm_session();
    let jackson = load_module(&session, "jackson-databind");
    let request = AttributeContainer::new();

    let first = session.select(&jackson, &request).unwrap();
    for _ in 0..10 {
        assert_eq!(session.select(&jackson, &request).unwrap(), first);
    }
    assert_eq!(first.name(), "runtimeElements");
}

mod native_config {
    use super::*;
    use pretty_assertions::assert_eq;

    const OS: &str = "org.example.native.os";
    const ABI: &str = "org.example.native.abi";
    const DEBUG: &str = "org.example.native.debug";

    fn native_session() -> ResolutionSession {
        let config = SchemaConfig::load(fixtures_dir().join("schema/native.toml")).unwrap();
        let mut builder = ResolutionSession::builder();
        builder.ecosystem(&JvmEcosystem::new()).unwrap();
        builder.config(&config).unwrap();
        builder.build().expect("session builds")
    }

    fn native_library() -> Component {
        let variant = |name: &str, os: &str, abi: &str| {
            Variant::new(
                name,
                AttributeContainer::new()
                    .with(OS, os)
                    .with(ABI, abi)
                    .with(DEBUG, false),
            )
        };
        Component::with_variants(
            ComponentId::new("org.example", "zstd-native", "1.5.6"),
            vec![
                variant("linux-musl", "linux", "musl"),
                variant("linux-gnu", "linux", "gnu"),
                variant("windows-msvc", "windows", "msvc"),
            ],
        )
    }

    #[rstest]
    #[case(&[(OS, "linux"), (ABI, "gnu")], "linux-gnu")]
    #[case(&[(OS, "linux"), (ABI, "musl")], "linux-musl")]
    #[case(&[(OS, "windows")], "windows-msvc")]
    #[case(&[(OS, "linux")], "linux-gnu")]
    #[case(&[], "linux-gnu")]
    fn test_native_selection(#[case] request: &[(&str, &str)], #[case] expected: &str) {
        let session = native_session();
        let request: AttributeContainer = request.iter().copied().collect();

        let selected = session.select(&native_library(), &request).unwrap();

        assert_eq!(selected.name(), expected);
    }

    #[test]
    fn test_boolean_request_is_retyped() {
        let session = native_session();
        let request = AttributeContainer::new().with(DEBUG, "true");

        let err = session.select(&native_library(), &request).unwrap_err();
        assert!(matches!(
            err,
            Error::Select(variant_select::Error::NoCompatibleVariant { .. })
        ));
    }

    #[test]
    fn test_config_artifact_type_derivation() {
        let session = native_session();
        let legacy = Component::legacy(
            ComponentId::new("org.example", "libfoo", "0.3"),
            Some("so"),
            vec![],
        );

        let variants = session.variants_of(&legacy);

        assert_eq!(variants[0].attribute(DEBUG), Some(&AttributeValue::Boolean(false)));
        assert_eq!(variants[0].attribute(ABI), Some(&AttributeValue::named("gnu")));
    }
}
