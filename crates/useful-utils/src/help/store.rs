//! Help registry storage and text rendering

use std::collections::{BTreeMap, HashMap};

use super::{FunctionDescriptor, FunctionInfo};

/// Registry of function descriptors.
///
/// Built once by hand-written registration, read-only afterwards. Queries
/// never mutate the registry, and every render method returns a string
/// rather than failing; unknown names produce not-found text.
pub struct HelpRegistry {
    functions: HashMap<&'static str, FunctionDescriptor>,
}

impl HelpRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in functions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for desc in super::builtins::builtin_descriptors() {
            registry.register(desc);
        }
        registry
    }

    /// Register a descriptor. Registering a name twice overwrites the
    /// earlier entry rather than surfacing an error.
    pub fn register(&mut self, desc: FunctionDescriptor) {
        self.functions.insert(desc.name, desc);
    }

    /// Check if a function is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get the number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// List all registered function names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get the detail record for a function, if registered.
    pub fn info(&self, name: &str) -> Option<FunctionInfo> {
        self.functions.get(name).map(FunctionInfo::from)
    }

    /// Search by case-insensitive substring over name, description, and
    /// category. A match in any one field includes the entry.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        let mut names: Vec<_> = self
            .functions
            .values()
            .filter(|desc| {
                desc.name.to_lowercase().contains(&query)
                    || desc.description.to_lowercase().contains(&query)
                    || desc.category.name().to_lowercase().contains(&query)
            })
            .map(|desc| desc.name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Render the full function listing, grouped by category.
    pub fn render_list(&self) -> String {
        if self.functions.is_empty() {
            return "No functions available.".to_string();
        }

        let mut output = vec!["Available Functions:".to_string(), "=".repeat(50)];

        // Categories sorted by display name, names sorted within.
        let mut by_category: BTreeMap<&str, Vec<&FunctionDescriptor>> = BTreeMap::new();
        for desc in self.functions.values() {
            by_category.entry(desc.category.name()).or_default().push(desc);
        }

        for (category, mut descs) in by_category {
            descs.sort_unstable_by_key(|d| d.name);
            output.push(format!("\n{}:", category));
            for desc in descs {
                output.push(format!("  \u{2022} {} - {}", desc.name, desc.description));
            }
        }

        output.push(format!("\nTotal: {} functions", self.functions.len()));
        output.push("\nUse help('detail', 'function_name') for detailed information.".to_string());

        output.join("\n")
    }

    /// Render the detail block for one function.
    pub fn render_detail(&self, name: &str) -> String {
        let Some(info) = self.info(name) else {
            return format!(
                "Function '{}' not found. Use help('list') to see available functions.",
                name
            );
        };

        let mut output = Vec::new();
        output.push(format!("Function: {}", info.name));
        output.push(format!("Category: {}", info.category));
        output.push(format!("Module: {}", info.module));
        output.push(format!("Location: {}", info.location_string()));
        output.push(String::new());
        output.push(format!("Signature: {}", info.signature));
        output.push(String::new());
        output.push("Description:".to_string());
        output.push(info.description);
        output.push(String::new());
        output.push("Documentation:".to_string());
        output.push(info.docstring);

        output.join("\n")
    }

    /// Render search results for a query.
    pub fn render_search(&self, query: &str) -> String {
        let results = self.search(query);
        if results.is_empty() {
            return format!("No functions found matching '{}'", query);
        }

        let mut output = vec![format!("Search results for '{}':", query), "=".repeat(40)];
        for name in results {
            if let Some(desc) = self.functions.get(name) {
                output.push(format!("\u{2022} {} - {}", desc.name, desc.description));
            }
        }

        output.join("\n")
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::FunctionCategory;
    use pretty_assertions::assert_eq;

    fn make_desc(
        name: &'static str,
        category: FunctionCategory,
        description: &'static str,
    ) -> FunctionDescriptor {
        FunctionDescriptor::new(name, "logging", category, description)
            .with_signature("(debug_mode: bool)")
    }

    fn single_entry_registry() -> HelpRegistry {
        let mut registry = HelpRegistry::new();
        registry.register(make_desc(
            "set_debug",
            FunctionCategory::Logging,
            "Configure logger level",
        ));
        registry
    }

    #[test]
    fn empty_registry() {
        let registry = HelpRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.render_list(), "No functions available.");
    }

    #[test]
    fn register_and_query() {
        let registry = single_entry_registry();
        assert!(registry.contains("set_debug"));
        assert!(!registry.contains("unknown"));
        assert_eq!(registry.list(), vec!["set_debug"]);
    }

    #[test]
    fn duplicate_registration_overwrites() {
        let mut registry = single_entry_registry();
        registry.register(make_desc(
            "set_debug",
            FunctionCategory::Logging,
            "Updated description",
        ));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.info("set_debug").unwrap().description,
            "Updated description"
        );
    }

    #[test]
    fn list_is_sorted() {
        let mut registry = HelpRegistry::new();
        registry.register(make_desc("time_it", FunctionCategory::Timing, "t"));
        registry.register(make_desc("log_time", FunctionCategory::Timing, "l"));
        registry.register(make_desc("set_debug", FunctionCategory::Logging, "s"));
        assert_eq!(registry.list(), vec!["log_time", "set_debug", "time_it"]);
    }

    #[test]
    fn render_list_groups_by_category() {
        let registry = single_entry_registry();
        let listing = registry.render_list();
        assert!(listing.contains("Available Functions:"));
        assert!(listing.contains("Logging:"));
        assert!(listing.contains("set_debug - Configure logger level"));
        assert!(listing.contains("Total: 1 functions"));
        assert!(listing.contains("Use help('detail', 'function_name')"));
    }

    #[test]
    fn render_detail_contains_description_verbatim() {
        let registry = single_entry_registry();
        let detail = registry.render_detail("set_debug");
        assert!(detail.contains("Function: set_debug"));
        assert!(detail.contains("Category: Logging"));
        assert!(detail.contains("Module: logging"));
        assert!(detail.contains("Signature: (debug_mode: bool)"));
        assert!(detail.contains("Configure logger level"));
        assert!(detail.contains("No documentation available."));
    }

    #[test]
    fn render_detail_unknown_name() {
        let registry = single_entry_registry();
        let detail = registry.render_detail("nope");
        assert_eq!(
            detail,
            "Function 'nope' not found. Use help('list') to see available functions."
        );
    }

    #[test]
    fn render_detail_missing_location_degrades() {
        let registry = single_entry_registry();
        let detail = registry.render_detail("set_debug");
        assert!(detail.contains("Location: Unknown:Unknown"));
    }

    #[test]
    fn search_matches_name_description_and_category() {
        let registry = single_entry_registry();
        // name
        assert_eq!(registry.search("set_"), vec!["set_debug"]);
        // description
        assert_eq!(registry.search("logger level"), vec!["set_debug"]);
        // category
        assert_eq!(registry.search("logging"), vec!["set_debug"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let registry = single_entry_registry();
        assert_eq!(registry.search("DEBUG"), registry.search("debug"));
    }

    #[test]
    fn search_results_are_sorted_subset_of_list() {
        let mut registry = HelpRegistry::new();
        registry.register(make_desc("time_it", FunctionCategory::Timing, "Time a call"));
        registry.register(make_desc("log_time", FunctionCategory::Timing, "Time a block"));
        registry.register(make_desc("set_debug", FunctionCategory::Logging, "s"));

        let all = registry.list();
        let results = registry.search("time");
        assert_eq!(results, vec!["log_time", "time_it"]);
        assert!(results.iter().all(|name| all.contains(name)));
    }

    #[test]
    fn render_search_no_match_literal() {
        let registry = single_entry_registry();
        assert_eq!(
            registry.render_search("zzz"),
            "No functions found matching 'zzz'"
        );
    }

    #[test]
    fn render_search_lists_matches() {
        let registry = single_entry_registry();
        let results = registry.render_search("logging");
        assert!(results.contains("Search results for 'logging':"));
        assert!(results.contains("set_debug - Configure logger level"));
    }
}
