//! Build metadata accessors.
//! The generated version.rs from the build script is included here so the
//! binary and the library share a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Cluster CLI used when neither `--cli` nor `KUBE_SCANNER_CLI` is set
pub fn default_cli() -> &'static str {
    DEFAULT_CLI
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Long version string shown by `--version`
pub fn long_version() -> String {
    format!(
        "{} ({} built {})",
        env!("CARGO_PKG_VERSION"),
        git_hash(),
        build_time()
    )
}
