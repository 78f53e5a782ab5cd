//! Name registry adapters.
//!
//! The original environment answers "is this top-level name taken?"
//! against a live namespace. Outside that environment the best
//! equivalent is the fixed set of names the target toolchain reserves;
//! [`ElixirRegistry`] carries that set, and [`MemoryRegistry`] lets
//! tests register arbitrary collisions.

use std::collections::BTreeSet;
use std::sync::Mutex;

use exforge_core::application::ports::NameRegistry;

/// Top-level names reserved by Elixir, OTP, and Mix. A module whose
/// first segment lands here would shadow the standard library.
static RESERVED: &[&str] = &[
    "Access", "Agent", "Application", "Atom", "Base", "Behaviour", "Bitwise", "Code",
    "Dict", "Enum", "Exception", "File", "Float", "GenEvent", "GenServer", "HashDict",
    "HashSet", "IO", "Integer", "Kernel", "Keyword", "List", "Logger", "Macro", "Map",
    "MapSet", "Mix", "Module", "Node", "OptionParser", "Path", "Port", "Process",
    "Protocol", "Range", "Record", "Regex", "Registry", "Set", "Stream", "String",
    "StringIO", "Supervisor", "System", "Task", "Tuple", "URI", "Version",
];

/// Production registry over the reserved-name table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElixirRegistry;

impl ElixirRegistry {
    pub fn new() -> Self {
        Self
    }
}

impl NameRegistry for ElixirRegistry {
    fn exists(&self, name: &str) -> bool {
        RESERVED.binary_search(&name).is_ok()
    }
}

/// Registry fake whose contents tests control.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    names: Mutex<BTreeSet<String>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn register(&self, name: impl Into<String>) {
        self.names
            .lock()
            .expect("memory registry lock")
            .insert(name.into());
    }
}

impl NameRegistry for MemoryRegistry {
    fn exists(&self, name: &str) -> bool {
        self.names
            .lock()
            .expect("memory registry lock")
            .contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_table_is_sorted_for_binary_search() {
        let mut sorted = RESERVED.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED);
    }

    #[test]
    fn stdlib_names_are_taken() {
        let registry = ElixirRegistry::new();
        assert!(registry.exists("Supervisor"));
        assert!(registry.exists("Mix"));
        assert!(registry.exists("String"));
    }

    #[test]
    fn ordinary_project_names_are_free() {
        let registry = ElixirRegistry::new();
        assert!(!registry.exists("HelloWorld"));
        assert!(!registry.exists("Acme"));
    }

    #[test]
    fn memory_registry_reflects_registered_names() {
        let registry = MemoryRegistry::with_names(["Existing"]);
        assert!(registry.exists("Existing"));
        assert!(!registry.exists("Fresh"));

        registry.register("Fresh");
        assert!(registry.exists("Fresh"));
    }
}
