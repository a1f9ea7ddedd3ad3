//! Central schema registry for the persisted narration-qa shapes.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Schema of a voice's `manifest.json`.
pub const MANIFEST: &str = "manifest";
/// Schema of a structured narration script record.
pub const SCRIPT: &str = "script";
/// Schema of a check report as emitted by `--format json`.
pub const REPORT: &str = "report";

/// Named JSON Schemas built from `nqa-core` types.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();
        register!(schemas, MANIFEST, nqa_core::Manifest);
        register!(schemas, SCRIPT, nqa_core::NarrationScript);
        register!(schemas, REPORT, nqa_core::Report);
        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` carrying every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn manifest_json() -> serde_json::Value {
        json!({
            "script_id": "demo",
            "voice": "zh-CN-XiaoxiaoNeural",
            "voice_key": "xiaoxiao",
            "files": [{
                "script_id": "demo",
                "section_id": "intro",
                "line_id": "l1",
                "filename": "intro-l1.mp3",
                "path": "audio/narrations/demo/intro-l1.mp3",
                "duration": 1.5,
                "size": 24000,
                "text": "你好"
            }],
            "total_duration": 1.5,
            "total_size": 24000
        })
    }

    #[test]
    fn lists_registered_names() {
        assert_eq!(SchemaRegistry::new().list(), vec![MANIFEST, REPORT, SCRIPT]);
    }

    #[test]
    fn every_schema_compiles() {
        let registry = SchemaRegistry::new();
        for name in registry.list() {
            let schema = registry.get(name).unwrap();
            assert!(
                jsonschema::validator_for(schema).is_ok(),
                "schema '{name}' should compile"
            );
        }
    }

    #[test]
    fn valid_manifest_passes() {
        SchemaRegistry::new()
            .validate(MANIFEST, &manifest_json())
            .unwrap();
    }

    #[test]
    fn manifest_violations_are_all_reported() {
        let mut instance = manifest_json();
        instance["files"][0]["size"] = json!("big");
        instance.as_object_mut().unwrap().remove("voice_key");

        let err = SchemaRegistry::new()
            .validate(MANIFEST, &instance)
            .unwrap_err();
        match err {
            SchemaError::ValidationFailed { errors } => assert!(errors.len() >= 2, "{errors:?}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_size_is_rejected() {
        let mut instance = manifest_json();
        instance["files"][0]["size"] = json!(-5);
        assert!(SchemaRegistry::new().validate(MANIFEST, &instance).is_err());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = SchemaRegistry::new()
            .validate("trail", &json!({}))
            .unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(name) if name == "trail"));
    }
}
