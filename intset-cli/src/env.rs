use std::collections::HashMap;

use intset::IntSet;

use crate::error::CommandErrorKind;

#[derive(Debug, Clone)]
pub struct Environment {
    sets: HashMap<String, IntSet>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            sets: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: &str, set: IntSet) {
        self.sets.insert(name.to_string(), set);
    }

    pub fn get(&self, name: &str) -> Result<&IntSet, CommandErrorKind> {
        self.sets
            .get(name)
            .ok_or_else(|| CommandErrorKind::UndefinedSet(name.to_string()))
    }

    /// Returns the named set, creating it empty on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut IntSet {
        self.sets.entry(name.to_string()).or_default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
