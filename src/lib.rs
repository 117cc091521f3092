//! Variant selection and install planning for the brew-file formula.
//!
//! A formula's one real decision is which upstream source to fetch and which
//! files to place where, given the build options in effect. This crate models
//! that decision as two pure functions over an immutable [`BuildOptions`]:
//!
//! - [`resolve_source`] - picks the upstream reference (pinned tag, legacy
//!   branch, or head) and derives the version
//! - [`build_install_plan`] - lays out the executable, config script, share
//!   tree, and optional shell completions
//!
//! Fetching, checksum verification, and the actual filesystem installation
//! belong to the external package-manager runtime, which consumes the
//! [`SourceSpec`] and [`InstallPlan`] values produced here.

pub mod commands;
pub mod error;
pub mod formula;
pub mod options;
pub mod plan;
pub mod source;

pub use options::BuildOptions;
pub use plan::{InstallEntry, InstallPlan, TargetDir, build_install_plan};
pub use source::{SourceRef, SourceSpec, resolve_source};
