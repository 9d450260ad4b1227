//! Source extension dispatch.
//!
//! The host build system decides how to compile a source file by looking up
//! its extension here. Each rule names the compiler front end whose
//! compiled-task constructor handles the file.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::Language;

/// Extension of Objective-C sources.
pub const OBJC_EXTENSION: &str = ".m";

/// A compile step produced for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTask {
    /// Front end that compiles the source
    pub language: Language,
    /// Source file
    pub source: PathBuf,
    /// Object file (`<source>.o`)
    pub object: PathBuf,
}

impl CompiledTask {
    /// Create the compile step for `source` using front end `language`.
    pub fn new(language: Language, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let mut object = OsString::from(source.as_os_str());
        object.push(".o");
        CompiledTask {
            language,
            source,
            object: PathBuf::from(object),
        }
    }
}

/// Registry mapping file extensions to compiler front ends.
///
/// Extensions are stored with their leading dot (`.c`). Registering an
/// extension again replaces its rule, so repeated registration of the same
/// rule is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRegistry {
    rules: BTreeMap<String, Language>,
}

impl ExtensionRegistry {
    /// Create a registry with the built-in C and C++ rules.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(".c", Language::C);
        for ext in [".cpp", ".cc", ".cxx"] {
            registry.register(ext, Language::Cxx);
        }

        registry
    }

    /// Create a registry with no rules.
    pub fn empty() -> Self {
        ExtensionRegistry {
            rules: BTreeMap::new(),
        }
    }

    /// Register a rule. Returns the rule it replaced, if any.
    pub fn register(&mut self, extension: &str, language: Language) -> Option<Language> {
        let extension = normalize(extension);
        tracing::trace!("registering {} -> {}", extension, language);
        self.rules.insert(extension, language)
    }

    /// Front end registered for an extension.
    pub fn front_end(&self, extension: &str) -> Option<Language> {
        self.rules.get(&normalize(extension)).copied()
    }

    /// Build the compile step for a source file, if a rule matches it.
    pub fn task_for(&self, source: &Path) -> Option<CompiledTask> {
        let ext = source.extension()?.to_str()?;
        let language = self.front_end(ext)?;
        Some(CompiledTask::new(language, source))
    }

    /// Check if an extension has a rule.
    pub fn contains(&self, extension: &str) -> bool {
        self.rules.contains_key(&normalize(extension))
    }

    /// Get all registered extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// Compile Objective-C (`.m`) sources with the C front end.
///
/// The compiler driver picks the Objective-C language mode from the
/// extension on its own.
pub fn register_objc_rule(registry: &mut ExtensionRegistry) {
    registry.register(OBJC_EXTENSION, Language::C);
}
