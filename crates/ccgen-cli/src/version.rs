//! Version string reported by `ccgen --version`.

/// Returns the package version followed by the commit it was built from, e.g.
/// `0.1.0 (1a2b3c4)`.
///
/// Builds outside a git checkout report the commit as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let commit = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!("{} ({commit})", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_version_starts_with_package_version() {
        let version = build_version();
        assert!(version.starts_with(concat!(env!("CARGO_PKG_VERSION"), " (")));
        assert!(version.ends_with(')'));
    }
}
