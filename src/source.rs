//! Source resolution - which upstream reference a given option set fetches.

use crate::formula;
use crate::options::BuildOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable pointer into the upstream repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceRef {
    /// Fixed release tag, pinned to a commit the runtime verifies.
    Tag { name: String, revision: String },
    /// Moving branch head, no content verification.
    Branch { name: String },
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Tag { name, revision } => {
                write!(f, "tag {} ({})", name, &revision[..revision.len().min(12)])
            }
            SourceRef::Branch { name } => write!(f, "branch {}", name),
        }
    }
}

/// Fetch instructions for the external runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub repository: String,
    pub reference: SourceRef,
    pub version: String,
}

/// Select the upstream source for an option set.
///
/// `bash` switches to the frozen legacy branch at its fixed version and wins
/// over everything else; `head` tracks master; the default is the pinned
/// stable tag. `python` is deliberately not consulted - the python variant
/// is the default.
pub fn resolve_source(options: &BuildOptions) -> SourceSpec {
    if options.bash {
        return SourceSpec {
            repository: formula::REPOSITORY.to_string(),
            reference: SourceRef::Branch {
                name: formula::LEGACY_BRANCH.to_string(),
            },
            version: formula::LEGACY_VERSION.to_string(),
        };
    }

    if options.head {
        return SourceSpec {
            repository: formula::REPOSITORY.to_string(),
            reference: SourceRef::Branch {
                name: formula::HEAD_BRANCH.to_string(),
            },
            version: "HEAD".to_string(),
        };
    }

    SourceSpec {
        repository: formula::REPOSITORY.to_string(),
        reference: SourceRef::Tag {
            name: formula::STABLE_TAG.to_string(),
            revision: formula::STABLE_REVISION.to_string(),
        },
        version: formula::STABLE_TAG.trim_start_matches('v').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_to_stable_tag() {
        let spec = resolve_source(&BuildOptions::default());
        assert_eq!(spec.repository, formula::REPOSITORY);
        assert_eq!(
            spec.reference,
            SourceRef::Tag {
                name: "v3.4.5".to_string(),
                revision: "dc5277016a36acb5392a29ed76858c44b3bb8d33".to_string(),
            }
        );
        assert_eq!(spec.version, "3.4.5");
    }

    #[test]
    fn test_python_matches_default() {
        let default = resolve_source(&BuildOptions::default());
        let python = resolve_source(&BuildOptions {
            python: true,
            ..BuildOptions::default()
        });
        assert_eq!(default, python);
    }

    #[test]
    fn test_bash_resolves_to_legacy_branch() {
        for python in [false, true] {
            let spec = resolve_source(&BuildOptions {
                python,
                bash: true,
                ..BuildOptions::default()
            });
            assert_eq!(
                spec.reference,
                SourceRef::Branch {
                    name: "bash".to_string()
                }
            );
            assert_eq!(spec.version, "1.1.8");
        }
    }

    #[test]
    fn test_bash_wins_over_head() {
        let spec = resolve_source(&BuildOptions {
            bash: true,
            head: true,
            ..BuildOptions::default()
        });
        assert_eq!(spec.version, "1.1.8");
    }

    #[test]
    fn test_head_resolves_to_master() {
        let spec = resolve_source(&BuildOptions {
            head: true,
            ..BuildOptions::default()
        });
        assert_eq!(
            spec.reference,
            SourceRef::Branch {
                name: "master".to_string()
            }
        );
        assert_eq!(spec.version, "HEAD");
    }

    #[test]
    fn test_reference_display() {
        let spec = resolve_source(&BuildOptions::default());
        assert_eq!(spec.reference.to_string(), "tag v3.4.5 (dc5277016a36)");

        let spec = resolve_source(&BuildOptions {
            bash: true,
            ..BuildOptions::default()
        });
        assert_eq!(spec.reference.to_string(), "branch bash");
    }
}
