//! Build environment record and per-platform customization.
//!
//! A [`BuildEnv`] is the host build system's mutable bag of toolchain
//! settings: compiler executables, flag lists and boolean switches, keyed by
//! upper-case names such as `CC` or `LINKFLAGS`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Language, PlatformKind};

/// Environment key for the C compiler executable.
pub const CC: &str = "CC";
/// Environment key for the C++ compiler executable.
pub const CXX: &str = "CXX";
/// Environment key for the linker flag list.
pub const LINKFLAGS: &str = "LINKFLAGS";
/// Environment key requesting the linker embed a manifest resource.
pub const WINDOWS_EMBED_MANIFEST: &str = "WINDOWS_EMBED_MANIFEST";

/// Linker flag that makes MSVC generate a manifest.
pub const MANIFEST_FLAG: &str = "/MANIFEST";

/// A single environment value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        EnvValue::Bool(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Str(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::Str(value)
    }
}

impl From<Vec<String>> for EnvValue {
    fn from(value: Vec<String>) -> Self {
        EnvValue::List(value)
    }
}

/// Mutable build environment owned by the host build system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildEnv {
    values: BTreeMap<String, EnvValue>,
}

impl BuildEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.values.get(key)
    }

    /// Get a string value. Lists and booleans are not coerced.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(EnvValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Get a list value. A string value is treated as a one-element list.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.values.get(key) {
            Some(EnvValue::List(list)) => list.clone(),
            Some(EnvValue::Str(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    /// Get a boolean value; missing or non-boolean keys read as `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(EnvValue::Bool(true)))
    }

    /// Set a value, replacing whatever was there.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<EnvValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Append values to a list.
    pub fn append_value(&mut self, key: &str, values: impl IntoIterator<Item = impl Into<String>>) {
        let mut list = self.take_list(key);
        list.extend(values.into_iter().map(Into::into));
        self.values.insert(key.to_string(), EnvValue::List(list));
    }

    /// Append values to a list, skipping those already present.
    pub fn append_unique(&mut self, key: &str, values: impl IntoIterator<Item = impl Into<String>>) {
        let mut list = self.take_list(key);
        for value in values {
            let value = value.into();
            if !list.contains(&value) {
                list.push(value);
            }
        }
        self.values.insert(key.to_string(), EnvValue::List(list));
    }

    /// Check if a key is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get the number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the environment has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    // A string value becomes a one-element list; a boolean cannot be kept.
    fn take_list(&mut self, key: &str) -> Vec<String> {
        match self.values.remove(key) {
            None => Vec::new(),
            Some(EnvValue::List(list)) => list,
            Some(EnvValue::Str(s)) => vec![s],
            Some(EnvValue::Bool(b)) => {
                tracing::warn!("replacing boolean `{}` = {} with a list", key, b);
                Vec::new()
            }
        }
    }
}

/// Use clang and clang++ as the compiler executables.
pub fn set_clang_compiler(env: &mut BuildEnv) {
    env.set(Language::C.compiler_key(), "clang");
    env.set(Language::Cxx.compiler_key(), "clang++");
}

/// Ask the MSVC linker to generate and embed a manifest.
pub fn embed_msvc_manifest(env: &mut BuildEnv) {
    env.append_unique(LINKFLAGS, [MANIFEST_FLAG]);
    env.set(WINDOWS_EMBED_MANIFEST, true);
}

/// Apply the toolchain tweaks for `platform` to `env`.
///
/// macOS switches to clang, Windows embeds a linker manifest, everything
/// else is left untouched.
pub fn customize_environment(env: &mut BuildEnv, platform: PlatformKind) {
    match platform {
        PlatformKind::MacOs => {
            tracing::debug!("using clang toolchain");
            set_clang_compiler(env);
        }
        PlatformKind::Windows => {
            tracing::debug!("embedding MSVC manifest");
            embed_msvc_manifest(env);
        }
        PlatformKind::OtherUnix => {}
    }
}

/// Apply the toolchain tweaks for the host platform.
///
/// The host is queried on every call.
pub fn customize_host_environment(env: &mut BuildEnv) {
    customize_environment(env, PlatformKind::host());
}
