//! Helpers for deriving release identifiers from a full SW version string.

/// Numeric release segment of a SW version: `BSW_VCC_20.0.1` -> `20.0.1`.
/// Strings without an underscore pass through whole.
pub fn release_segment(sw_version: &str) -> &str {
    sw_version.rsplit('_').next().unwrap_or(sw_version)
}

/// Package version derived from a SW version: `BSW_VCC_20.0.1` -> `20.0.1.0`.
/// Empty input stays empty.
pub fn sw_package_version(sw_version: &str) -> String {
    if sw_version.is_empty() {
        return String::new();
    }
    format!("{}.0", release_segment(sw_version))
}
