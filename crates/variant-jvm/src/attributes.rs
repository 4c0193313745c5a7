//! Names and well-known values of the JVM attributes.

pub const USAGE: &str = "org.gradle.usage";
pub const LIBRARY_ELEMENTS: &str = "org.gradle.libraryelements";
pub const CATEGORY: &str = "org.gradle.category";
pub const BUNDLING: &str = "org.gradle.dependency.bundling";
pub const TARGET_JVM_VERSION: &str = "org.gradle.jvm.version";
pub const TARGET_JVM_ENVIRONMENT: &str = "org.gradle.jvm.environment";
pub const DOCS_TYPE: &str = "org.gradle.docstype";

/// Disambiguation precedence of the JVM attributes.
pub const PRECEDENCE: [&str; 6] = [
    CATEGORY,
    USAGE,
    BUNDLING,
    TARGET_JVM_VERSION,
    LIBRARY_ELEMENTS,
    TARGET_JVM_ENVIRONMENT,
];

pub mod usage {
    use variant_model::AttributeValue;

    pub const JAVA_API: &str = "java-api";
    pub const JAVA_RUNTIME: &str = "java-runtime";

    // Published by older metadata.
    pub const JAVA_API_JARS: &str = "java-api-jars";
    pub const JAVA_RUNTIME_JARS: &str = "java-runtime-jars";

    /// Map legacy usage values onto their current spelling.
    pub fn canonical(value: &AttributeValue) -> AttributeValue {
        match value.as_named() {
            Some(JAVA_API_JARS) => AttributeValue::named(JAVA_API),
            Some(JAVA_RUNTIME_JARS) => AttributeValue::named(JAVA_RUNTIME),
            _ => value.clone(),
        }
    }
}

pub mod library_elements {
    pub const JAR: &str = "jar";
    pub const CLASSES: &str = "classes";
    pub const RESOURCES: &str = "resources";
    pub const CLASSES_AND_RESOURCES: &str = "classes+resources";
}

pub mod category {
    pub const LIBRARY: &str = "library";
    pub const PLATFORM: &str = "platform";
    pub const ENFORCED_PLATFORM: &str = "enforced-platform";
    pub const DOCUMENTATION: &str = "documentation";
}

pub mod bundling {
    pub const EXTERNAL: &str = "external";
    pub const EMBEDDED: &str = "embedded";
    pub const SHADOWED: &str = "shadowed";
}

pub mod environment {
    pub const STANDARD_JVM: &str = "standard-jvm";
    pub const ANDROID: &str = "android";
}

/// Artifact type tags of legacy JVM components.
pub mod artifact_type {
    pub const JAR: &str = "jar";
    pub const JAVA_CLASSES_DIRECTORY: &str = "java-classes-directory";
    pub const JAVA_RESOURCES_DIRECTORY: &str = "java-resources-directory";
}
