use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct Environment<I = ()> {
    input_json: serde_json::Map<String, Value>,
    pub input: Option<I>,
    output: Value,
}

impl Environment {
    pub fn from_json(data: Value) -> Self {
        let input_json = data
            .get("input")
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default();

        let output = data.get("output").cloned().unwrap_or(Value::Null);

        Self {
            input_json,
            input: None,
            output,
        }
    }

    pub fn from_stdin() -> Self {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .expect("failed to read stdin");
        if raw.trim().is_empty() {
            // No run description: every input falls back to its default
            return Self::from_json(Value::Null);
        }
        let data: Value = serde_json::from_str(&raw).expect("failed to parse JSON from stdin");
        Self::from_json(data)
    }

    pub fn with_input_type<I: DeserializeOwned>(self) -> Environment<I> {
        let input_value = Value::Object(self.input_json.clone());
        let input = serde_json::from_value(input_value).expect("failed to deserialize input");
        Environment {
            input_json: self.input_json,
            input: Some(input),
            output: self.output,
        }
    }
}

impl<I: DeserializeOwned> Environment<I> {
    pub fn load() -> Self {
        Environment::from_stdin().with_input_type::<I>()
    }
}

impl<I> Environment<I> {
    pub fn input_json(&self) -> &serde_json::Map<String, Value> {
        &self.input_json
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        // Flat output section, or the default profile of a profiled one
        let section = self
            .output
            .get("profile")
            .and_then(|v| v.as_object())
            .and_then(|profiles| {
                profiles
                    .get("default")
                    .or_else(|| profiles.values().next())
            })
            .unwrap_or(&self.output);

        if section.get("spec").and_then(|v| v.as_str()) != Some("filesystem") {
            return None;
        }
        section
            .get("dir")
            .and_then(|v| v.as_str())
            .map(PathBuf::from)
    }

    pub fn artifact_path(&self, filename: &str) -> PathBuf {
        match self.output_dir() {
            Some(dir) => {
                fs::create_dir_all(&dir).expect("failed to create output directory");
                dir.join(filename)
            }
            None => PathBuf::from(filename),
        }
    }
}
