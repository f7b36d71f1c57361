use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use toolbelt_core::cbor;
use toolbelt_core::config::ConfigLoader;
use toolbelt_core::documents::{format_document, format_document_with, PlaceholderOptions};
use toolbelt_core::objects::{get_key_value, set_key_value};
use toolbelt_core::options::{hydrate_options, resolve_options};
use toolbelt_core::{enumeration, Enumeration, ToolbeltError};

enumeration! {
    pub enum Stage {
        Dev = "dev",
        Prod = "prod",
    }
}

#[test]
fn test_configured_delimiters_drive_document_formatting() -> Result<(), ToolbeltError> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[documents]\nprefix = \"${\"\nsuffix = \"}\"\nseparator = \"/\"\nkeep_missing = true\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&config_path)?;
    let options = PlaceholderOptions::from(&config.documents);

    let doc = json!({
        "stage": "prod",
        "hosts": {"dev": "localhost", "prod": "example.org"},
        "service": {
            "url": "https://${hosts/${stage}}:${port}/v1",
            "tags": ["${stage}", 7, null]
        }
    });
    let formatted = format_document(&doc, &options)?;

    assert_eq!(
        formatted["service"],
        json!({"url": "https://example.org:${port}/v1", "tags": ["prod", 7, null]})
    );
    Ok(())
}

#[test]
fn test_formatted_document_survives_cbor_transport() -> Result<(), ToolbeltError> {
    let mut source = json!({"region": "eu-west"});
    set_key_value(&mut source, "endpoints.eu-west.api", json!("https://eu.example.org"), ".")?;

    let template = json!({"api": "{{endpoints.{{region}}.api}}/status", "retries": 3});
    let formatted = format_document_with(&template, &source, &PlaceholderOptions::default())?;

    let payload = cbor::encode_base64url(&formatted)?;
    let restored: serde_json::Value = cbor::decode_base64url(&payload)?;
    assert_eq!(restored, formatted);
    assert_eq!(
        get_key_value(&restored, "api", ".").and_then(|v| v.as_str()),
        Some("https://eu.example.org/status")
    );

    let bytes = cbor::json_to_cbor(&restored)?;
    assert_eq!(cbor::cbor_to_json(&bytes)?, formatted);
    Ok(())
}

#[test]
fn test_options_hydrate_enumeration_values() -> Result<(), ToolbeltError> {
    #[derive(Debug, serde::Deserialize)]
    struct DeployOptions {
        stage: Stage,
        replicas: u32,
    }

    let defaults = json!({"stage": "dev", "replicas": 1});
    let given = json!({"stage": "{{target}}"});
    let merged = resolve_options(defaults.as_object().unwrap(), given.as_object().unwrap(), true)?;

    let context = json!({"target": Stage::Prod.value()});
    let resolved = format_document_with(&serde_json::Value::Object(merged), &context, &PlaceholderOptions::default())?;
    let options: DeployOptions = hydrate_options(&resolved)?;

    assert_eq!(options.stage, Stage::Prod);
    assert_eq!(options.replicas, 1);
    Ok(())
}
