//! Build options - the immutable input to source resolution and planning.

use serde::{Deserialize, Serialize};

/// Option set for one formula invocation.
///
/// Fixed once when the runtime hands over the flags; both
/// [`crate::source::resolve_source`] and [`crate::plan::build_install_plan`]
/// take it by reference and never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Vestigial: the python variant is the default, so this never branches.
    pub python: bool,
    /// Legacy bash implementation from its frozen branch.
    pub bash: bool,
    /// Track the master branch instead of a tagged release.
    pub head: bool,
    /// Install bash/zsh completion scripts.
    pub completions: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            python: false,
            bash: false,
            head: false,
            completions: true,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named formula option is in effect.
    ///
    /// `without-completions` is the inverse of the stored `completions` flag,
    /// matching how the runtime spells it.
    pub fn is_set(&self, name: &str) -> bool {
        match name {
            "python" => self.python,
            "bash" => self.bash,
            "head" => self.head,
            "without-completions" => !self.completions,
            _ => false,
        }
    }

    /// Options in effect, receipt style (`--name` spelling).
    pub fn used_options(&self) -> Vec<String> {
        crate::formula::OPTIONS
            .iter()
            .filter(|o| self.is_set(o.name))
            .map(|o| format!("--{}", o.name))
            .collect()
    }

    /// Declared options not in effect.
    pub fn unused_options(&self) -> Vec<String> {
        crate::formula::OPTIONS
            .iter()
            .filter(|o| !self.is_set(o.name))
            .map(|o| format!("--{}", o.name))
            .collect()
    }
}
