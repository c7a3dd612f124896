//! Build metadata baked in at compile time.
//!
//! `build.rs` resolves the git hash and build timestamp and exports them
//! as rustc environment variables; this module is their only consumer.

/// Metadata captured for one build of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub timestamp: &'static str,
}

/// Metadata for the running build.
pub const CURRENT: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    commit: env!("LINETERM_BUILD_GIT_HASH"),
    timestamp: env!("LINETERM_BUILD_TIMESTAMP"),
};

/// Trailer appended to `lineterm --help`, naming the exact build.
pub const HELP_TRAILER: &str = concat!(
    "Build:\n  commit: ",
    env!("LINETERM_BUILD_GIT_HASH"),
    "\n  built:  ",
    env!("LINETERM_BUILD_TIMESTAMP"),
);

/// Version text behind `lineterm --version`. Built with `concat!` so
/// clap can borrow it as a `&'static str`; clap prepends the binary
/// name itself, so the block starts with the bare version.
pub const VERSION_BLOCK: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("LINETERM_BUILD_GIT_HASH"),
    "\nbuilt:  ",
    env!("LINETERM_BUILD_TIMESTAMP"),
);

impl BuildInfo {
    /// One-line form shown in the demo banner.
    pub fn banner(&self) -> String {
        format!(
            "v{} ({}, built {})",
            self.version, self.commit, self.timestamp
        )
    }
}
