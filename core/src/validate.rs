use std::fs;
use std::path::Path;

/// Pre-flight checks for a script path: existence, regular-file type, and
/// read access, in that order, short-circuiting on the first failure. Each
/// failure is logged with the offending path.
pub fn validate_script(path: &Path) -> bool {
    if !path.exists() {
        tracing::error!("script does not exist: {}", path.display());
        return false;
    }

    if !path.is_file() {
        tracing::error!("not a regular file: {}", path.display());
        return false;
    }

    if let Err(e) = fs::File::open(path) {
        tracing::error!("script is not readable: {} ({})", path.display(), e);
        return false;
    }

    true
}
