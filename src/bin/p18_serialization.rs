//! Serialization: JSON, YAML, TOML, and binary with serde
//!
//! Run with: cargo run --bin p18_serialization

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Language {
    name: String,
    version: f64,
    #[serde(default)]
    features: Vec<String>,
}

fn json_basics() -> anyhow::Result<()> {
    println!("=== JSON ===\n");

    let lang = Language {
        name: "Rust".to_string(),
        version: 1.0,
        features: vec!["ownership".to_string(), "traits".to_string()],
    };

    let compact = serde_json::to_string(&lang)?;
    let pretty = serde_json::to_string_pretty(&lang)?;
    println!("compact: {}", compact);
    println!("pretty:\n{}", pretty);

    let parsed: Language = serde_json::from_str(&compact)?;
    println!("round-tripped: {:?}", parsed);

    // Missing optional fields fall back to their defaults.
    let minimal: Language = serde_json::from_str(r#"{"name": "Zig", "version": 0.13}"#)?;
    println!("defaulted features: {:?}", minimal.features);

    // Wrong types are an error, not a coercion.
    let bad: Result<Language, _> = serde_json::from_str(r#"{"name": 42, "version": 3.0}"#);
    println!("type mismatch: {}", bad.unwrap_err());
    Ok(())
}

fn json_untyped() -> anyhow::Result<()> {
    println!("\n=== Untyped JSON Values ===\n");

    let value: serde_json::Value =
        serde_json::from_str(r#"{"user": {"name": "Alice", "tags": ["admin", "ops"]}}"#)?;

    println!("name via pointer: {:?}", value.pointer("/user/name"));
    println!("first tag:        {:?}", value["user"]["tags"][0]);
    println!("absent key:       {:?}", value.get("missing"));

    let built = serde_json::json!({
        "name": "built in place",
        "count": 3,
    });
    println!("json! macro:      {}", built);
    Ok(())
}

fn yaml() -> anyhow::Result<()> {
    println!("\n=== YAML ===\n");

    let document = "\
name: Rust
version: 1.0
features:
  - ownership
  - zero-cost abstractions
";

    let parsed: Language = serde_yaml::from_str(document)?;
    println!("parsed: {:?}", parsed);

    let emitted = serde_yaml::to_string(&parsed)?;
    println!("emitted:\n{}", emitted);
    Ok(())
}

// Plain values come before the nested table so TOML emission stays valid.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct AppConfig {
    title: String,
    #[serde(default)]
    debug: bool,
    owner: Owner,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Owner {
    name: String,
}

fn toml_config() -> anyhow::Result<()> {
    println!("\n=== TOML ===\n");

    let document = "\
title = \"demo\"
debug = true

[owner]
name = \"Alice\"
";

    let config: AppConfig = toml::from_str(document)?;
    println!("parsed: {:?}", config);
    println!("emitted:\n{}", toml::to_string(&config)?);
    Ok(())
}

fn binary_marshal() -> anyhow::Result<()> {
    println!("\n=== Binary (bincode) ===\n");

    let lang = Language {
        name: "Rust".to_string(),
        version: 1.0,
        features: vec!["speed".to_string()],
    };

    let bytes = bincode::serialize(&lang)?;
    println!("encoded {} bytes: {:?}...", bytes.len(), &bytes[..bytes.len().min(16)]);

    let decoded: Language = bincode::deserialize(&bytes)?;
    println!("decoded: {:?}", decoded);
    Ok(())
}

fn format_comparison() -> anyhow::Result<()> {
    println!("\n=== Format Size Comparison ===\n");

    let lang = Language {
        name: "Rust".to_string(),
        version: 1.0,
        features: vec!["ownership".to_string(), "traits".to_string()],
    };

    let json = serde_json::to_string(&lang)?;
    let yaml = serde_yaml::to_string(&lang)?;
    let binary = bincode::serialize(&lang)?;

    println!("json:    {:>4} bytes", json.len());
    println!("yaml:    {:>4} bytes", yaml.len());
    println!("bincode: {:>4} bytes", binary.len());
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
enum Event {
    UserCreated { name: String },
    UserDeleted { id: u64 },
}

fn enum_tagging() -> anyhow::Result<()> {
    println!("\n=== Enum Tagging ===\n");

    let events = vec![
        Event::UserCreated { name: "Alice".to_string() },
        Event::UserDeleted { id: 42 },
    ];

    let encoded = serde_json::to_string(&events)?;
    println!("tagged: {}", encoded);

    let decoded: Vec<Event> = serde_json::from_str(&encoded)?;
    println!("decoded {} events", decoded.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    println!("=== Serialization Demo ===\n");

    json_basics()?;
    json_untyped()?;
    yaml()?;
    toml_config()?;
    binary_marshal()?;
    format_comparison()?;
    enum_tagging()?;

    println!("\n=== Key Points ===");
    println!("1. One derive serves every format serde speaks");
    println!("2. serde validates types on the way in");
    println!("3. Value/pointer navigate JSON without a schema");
    println!("4. bincode is the compact native binary round-trip");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Language {
        Language {
            name: "Rust".to_string(),
            version: 1.0,
            features: vec!["traits".to_string()],
        }
    }

    #[test]
    fn json_round_trip_preserves_value() {
        let original = sample();
        let encoded = serde_json::to_string(&original).expect("encode");
        let decoded: Language = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, original);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let decoded: Language =
            serde_json::from_str(r#"{"name": "X", "version": 0.1}"#).expect("decode");
        assert!(decoded.features.is_empty());
    }

    #[test]
    fn yaml_parses_lists() {
        let decoded: Language =
            serde_yaml::from_str("name: X\nversion: 0.5\nfeatures: [a, b]").expect("decode");
        assert_eq!(decoded.features, vec!["a", "b"]);
    }

    #[test]
    fn toml_nested_tables() {
        let config: AppConfig =
            toml::from_str("title = \"t\"\n[owner]\nname = \"n\"").expect("decode");
        assert_eq!(config.owner.name, "n");
        assert!(!config.debug);
    }

    #[test]
    fn bincode_round_trip_and_size() {
        let original = sample();
        let bytes = bincode::serialize(&original).expect("encode");
        let decoded: Language = bincode::deserialize(&bytes).expect("decode");
        assert_eq!(decoded, original);

        let json_len = serde_json::to_string(&original).expect("encode").len();
        assert!(bytes.len() < json_len, "binary should beat text for this record");
    }

    #[test]
    fn tagged_enum_round_trip() {
        let event = Event::UserCreated { name: "A".into() };
        let text = serde_json::to_string(&event).expect("encode");
        assert!(text.contains("\"kind\":\"user_created\""));
        let back: Event = serde_json::from_str(&text).expect("decode");
        assert_eq!(back, event);
    }
}
