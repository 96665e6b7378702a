//! Name claiming for one GraphQL scope.

use std::collections::HashSet;

/// Names already emitted in one scope: the type list of a schema, or the
/// fields of one type. First claim wins.
#[derive(Debug, Default)]
pub struct NameSet {
    taken: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name`. Returns false if it was already taken.
    pub fn claim(&mut self, name: &str) -> bool {
        if self.taken.contains(name) {
            return false;
        }
        self.taken.insert(name.to_string());
        true
    }

    /// Claim `base`, or the first free `base_2`, `base_3`, ... starting at
    /// `base_<first_suffix>`, and return the claimed name.
    pub fn claim_numbered(&mut self, base: &str, first_suffix: usize) -> String {
        if first_suffix <= 1 && self.claim(base) {
            return base.to_string();
        }
        let mut suffix = first_suffix.max(2);
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if self.claim(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
