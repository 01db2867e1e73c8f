//! Core types for the function help registry

use serde::Serialize;

/// Category a registered function belongs to, for grouping in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionCategory {
    /// Log-sink configuration helpers
    Logging,
    /// Wall-clock timing helpers
    Timing,
}

impl FunctionCategory {
    /// Display name used in listings and matched by search.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionCategory::Logging => "Logging",
            FunctionCategory::Timing => "Timing",
        }
    }
}

impl std::fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hand-authored metadata for one registered function.
///
/// There is no runtime reflection here: signature, documentation, and
/// source location are all written down at registration time. Location
/// comes from `file!()`/`line!()` next to the described function.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    /// Unique registry key (e.g. "set_debug")
    pub name: &'static str,
    /// Module the function lives in (e.g. "logging")
    pub module: &'static str,
    /// Category for grouping and search
    pub category: FunctionCategory,
    /// One-line description shown in listings and search results
    pub description: &'static str,
    /// Parameter list as a string (e.g. "(debug_mode: bool)")
    pub signature: &'static str,
    /// Long-form documentation text; empty means undocumented
    pub docs: &'static str,
    /// Source location, when captured at the definition site
    pub location: Option<(&'static str, u32)>,
}

impl FunctionDescriptor {
    /// Create a descriptor with the required fields; signature, docs, and
    /// location are filled in via the builder methods.
    pub fn new(
        name: &'static str,
        module: &'static str,
        category: FunctionCategory,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            module,
            category,
            description,
            signature: "",
            docs: "",
            location: None,
        }
    }

    /// Set the signature string.
    pub fn with_signature(mut self, signature: &'static str) -> Self {
        self.signature = signature;
        self
    }

    /// Set the long-form documentation text.
    pub fn with_docs(mut self, docs: &'static str) -> Self {
        self.docs = docs;
        self
    }

    /// Set the source location captured with `file!()` and `line!()`.
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.location = Some((file, line));
        self
    }
}

/// Serializable detail record derived from a [`FunctionDescriptor`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub module: String,
    pub category: FunctionCategory,
    pub description: String,
    pub signature: String,
    pub docstring: String,
    pub source_file: String,
    pub line_number: Option<u32>,
}

impl From<&FunctionDescriptor> for FunctionInfo {
    fn from(desc: &FunctionDescriptor) -> Self {
        let docstring = if desc.docs.is_empty() {
            "No documentation available.".to_string()
        } else {
            desc.docs.to_string()
        };
        let (source_file, line_number) = match desc.location {
            Some((file, line)) => (file.to_string(), Some(line)),
            None => ("Unknown".to_string(), None),
        };
        Self {
            name: desc.name.to_string(),
            module: desc.module.to_string(),
            category: desc.category,
            description: desc.description.to_string(),
            signature: desc.signature.to_string(),
            docstring,
            source_file,
            line_number,
        }
    }
}

impl FunctionInfo {
    /// "file:line" string for display; "Unknown:Unknown" when the
    /// descriptor carried no location.
    pub fn location_string(&self) -> String {
        match self.line_number {
            Some(line) => format!("{}:{}", self.source_file, line),
            None => format!("{}:Unknown", self.source_file),
        }
    }
}
