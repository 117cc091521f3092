//! Static metadata for the brew-file formula.
//!
//! Everything here is fixed at packaging time: where the upstream source
//! lives, which references the variants pin, which build options the formula
//! declares, and the smoke test the install is checked with. The actual
//! selection logic lives in [`crate::source`] and [`crate::plan`].

pub const NAME: &str = "brew-file";
pub const DESC: &str = "Brewfile manager for Homebrew";
pub const HOMEPAGE: &str = "https://github.com/rcmdnk/homebrew-file/";
pub const REPOSITORY: &str = "https://github.com/rcmdnk/homebrew-file.git";

/// Stable release: a fixed tag pinned to a commit for verification.
pub const STABLE_TAG: &str = "v3.4.5";
pub const STABLE_REVISION: &str = "dc5277016a36acb5392a29ed76858c44b3bb8d33";

/// Legacy bash implementation, frozen on its own branch.
pub const LEGACY_BRANCH: &str = "bash";
pub const LEGACY_VERSION: &str = "1.1.8";

/// Development branch for head installs.
pub const HEAD_BRANCH: &str = "master";

/// Directories the install runtime must not prune after installation.
pub const SKIP_CLEAN: &[&str] = &["bin"];

/// A build option the formula declares.
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    pub name: &'static str,
    pub help: &'static str,
}

/// Declared option surface, in the order the formula lists it.
///
/// `python` is vestigial: the python variant is the default, so enabling it
/// changes nothing. It stays declared because removing it would change the
/// option surface the runtime accepts.
pub const OPTIONS: &[OptionDef] = &[
    OptionDef {
        name: "python",
        help: "Use python version (same as default)",
    },
    OptionDef {
        name: "bash",
        help: "Use bash version",
    },
    OptionDef {
        name: "head",
        help: "Install from the master branch",
    },
    OptionDef {
        name: "without-completions",
        help: "Disable bash/zsh completions",
    },
];

/// Post-install smoke test: the command must exit 0.
#[derive(Debug, Clone, Copy)]
pub struct SmokeTest {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl SmokeTest {
    /// Render as a single shell-style string for display.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program];
        parts.extend_from_slice(self.args);
        parts.join(" ")
    }
}

pub const SMOKE_TEST: SmokeTest = SmokeTest {
    program: "brew",
    args: &["file", "help"],
};
