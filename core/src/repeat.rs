use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

static SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

fn suffix_re() -> &'static Regex {
    SUFFIX_RE.get_or_init(|| Regex::new(r"-(\d+)\.\w+$").expect("repetition suffix pattern"))
}

/// Repeat count encoded in the filename as a trailing `-<digits>` group just
/// before the extension (`BSED-3-F-40.py` runs 40 times). When the filename
/// carries several hyphen-number groups only the final one counts.
///
/// Missing, malformed, or oversized suffixes default to 1 with a warning.
pub fn parse_repetitions(path: &Path) -> u32 {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(caps) = suffix_re().captures(&filename) {
        if let Ok(n) = caps[1].parse::<u32>() {
            tracing::info!("script {} will be repeated {} times", filename, n.max(1));
            return n.max(1);
        }
    }

    tracing::warn!("no repetition count found for {}, defaulting to 1", filename);
    1
}
