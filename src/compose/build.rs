// ABOUTME: Compose `build` section parsing.
// ABOUTME: Accepts a bare context string or a mapping with args as map or list.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Build argument naming the base image of a locally built service.
pub const BASE_IMAGE_ARG: &str = "BASE";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BuildSpec {
    /// `build: ./dir`
    Context(String),
    /// `build: { context: ., args: ... }`
    Detailed(BuildConfig),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub args: Option<BuildArgs>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BuildArgs {
    /// `args: { BASE: python:3.9 }`
    Map(BTreeMap<String, Value>),
    /// `args: ["BASE=python:3.9"]`
    List(Vec<String>),
}

impl BuildSpec {
    /// Value of a build argument, if set to something non-null.
    pub fn arg(&self, name: &str) -> Option<String> {
        match self {
            BuildSpec::Context(_) => None,
            BuildSpec::Detailed(config) => config.args.as_ref()?.get(name),
        }
    }
}

impl BuildArgs {
    pub fn get(&self, name: &str) -> Option<String> {
        match self {
            BuildArgs::Map(map) => scalar_to_string(map.get(name)?),
            BuildArgs::List(entries) => entries.iter().find_map(|entry| {
                let (key, value) = entry.split_once('=')?;
                (key == name).then(|| value.to_string())
            }),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
