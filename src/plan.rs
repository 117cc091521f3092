//! Install planning - mapping build artifacts to their installed locations.
//!
//! The plan is a value: the external runtime consumes it once and performs
//! the actual filesystem work, permission setting, and cleanup. Nothing here
//! touches the filesystem.

use crate::formula;
use crate::options::BuildOptions;
use serde::{Deserialize, Serialize};

/// Target directory families understood by the install runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDir {
    Bin,
    Etc,
    Share,
    BashCompletion,
    ZshCompletion,
}

impl TargetDir {
    /// Conventional location relative to the install prefix.
    pub fn relative_path(&self) -> &'static str {
        match self {
            TargetDir::Bin => "bin",
            TargetDir::Etc => "etc",
            TargetDir::Share => "share",
            TargetDir::BashCompletion => "etc/bash_completion.d",
            TargetDir::ZshCompletion => "share/zsh/site-functions",
        }
    }

    fn is_completion(&self) -> bool {
        matches!(self, TargetDir::BashCompletion | TargetDir::ZshCompletion)
    }
}

/// One source-path to target-location mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallEntry {
    /// Path inside the fetched source tree.
    pub source: String,
    pub target: TargetDir,
    /// Filename at the target, when it differs from the source filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,
    /// Permission mode for executable artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
}

impl InstallEntry {
    fn new(source: &str, target: TargetDir) -> Self {
        Self {
            source: source.to_string(),
            target,
            rename: None,
            mode: None,
        }
    }

    fn renamed(source: &str, target: TargetDir, rename: &str) -> Self {
        Self {
            rename: Some(rename.to_string()),
            ..Self::new(source, target)
        }
    }

    /// Filename the artifact ends up installed under.
    pub fn installed_name(&self) -> &str {
        match &self.rename {
            Some(name) => name,
            None => self
                .source
                .rsplit('/')
                .next()
                .unwrap_or(self.source.as_str()),
        }
    }

    /// Installed location relative to the prefix.
    pub fn installed_path(&self) -> String {
        format!("{}/{}", self.target.relative_path(), self.installed_name())
    }
}

/// Ordered file-placement instructions for the external runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    pub entries: Vec<InstallEntry>,
    /// Directories the runtime must not prune after install.
    pub skip_clean: Vec<String>,
}

impl InstallPlan {
    pub fn completion_entries(&self) -> impl Iterator<Item = &InstallEntry> {
        self.entries.iter().filter(|e| e.target.is_completion())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Mode for the primary executable: rwxr-xr-x.
const EXECUTABLE_MODE: u32 = 0o755;

/// Build the install plan for an option set.
///
/// The executable, the brew-wrap config script, and the share tree are
/// always present. Completion scripts for bash and zsh join them unless
/// completions were disabled; the zsh script installs under an underscore
/// prefix, the naming zsh's completion discovery expects.
pub fn build_install_plan(options: &BuildOptions) -> InstallPlan {
    let mut entries = vec![
        InstallEntry {
            mode: Some(EXECUTABLE_MODE),
            ..InstallEntry::new("bin/brew-file", TargetDir::Bin)
        },
        InstallEntry::new("etc/brew-wrap", TargetDir::Etc),
        InstallEntry::new("share", TargetDir::Share),
    ];

    if options.completions {
        entries.push(InstallEntry::new(
            "etc/bash_completion.d/brew-file",
            TargetDir::BashCompletion,
        ));
        entries.push(InstallEntry::renamed(
            "share/zsh/site-functions/brew-file",
            TargetDir::ZshCompletion,
            "_brew-file",
        ));
    }

    InstallPlan {
        entries,
        skip_clean: formula::SKIP_CLEAN.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_entries_always_present() {
        for completions in [true, false] {
            let plan = build_install_plan(&BuildOptions {
                completions,
                ..BuildOptions::default()
            });
            let sources: Vec<&str> = plan.entries.iter().map(|e| e.source.as_str()).collect();
            assert!(sources.contains(&"bin/brew-file"));
            assert!(sources.contains(&"etc/brew-wrap"));
            assert!(sources.contains(&"share"));
        }
    }

    #[test]
    fn test_executable_mode() {
        let plan = build_install_plan(&BuildOptions::default());
        let exe = &plan.entries[0];
        assert_eq!(exe.source, "bin/brew-file");
        assert_eq!(exe.target, TargetDir::Bin);
        assert_eq!(exe.mode, Some(0o755));
    }

    #[test]
    fn test_completions_add_exactly_two_entries() {
        let plan = build_install_plan(&BuildOptions::default());
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.completion_entries().count(), 2);
    }

    #[test]
    fn test_without_completions_has_three_entries() {
        let plan = build_install_plan(&BuildOptions {
            completions: false,
            ..BuildOptions::default()
        });
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.completion_entries().count(), 0);
    }

    #[test]
    fn test_zsh_completion_renamed_with_underscore() {
        let plan = build_install_plan(&BuildOptions::default());
        let zsh = plan
            .entries
            .iter()
            .find(|e| e.target == TargetDir::ZshCompletion)
            .unwrap();
        assert_eq!(zsh.source, "share/zsh/site-functions/brew-file");
        assert_eq!(zsh.installed_name(), "_brew-file");
        assert_eq!(zsh.installed_path(), "share/zsh/site-functions/_brew-file");
    }

    #[test]
    fn test_bash_completion_keeps_its_name() {
        let plan = build_install_plan(&BuildOptions::default());
        let bash = plan
            .entries
            .iter()
            .find(|e| e.target == TargetDir::BashCompletion)
            .unwrap();
        assert_eq!(bash.rename, None);
        assert_eq!(bash.installed_path(), "etc/bash_completion.d/brew-file");
    }

    #[test]
    fn test_skip_clean_carried() {
        let plan = build_install_plan(&BuildOptions::default());
        assert_eq!(plan.skip_clean, ["bin"]);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let options = BuildOptions {
            bash: true,
            ..BuildOptions::default()
        };
        assert_eq!(build_install_plan(&options), build_install_plan(&options));
    }
}
