//! Filename derivation
//!
//! Maps a catalog prompt to the name of the SVG file that holds its asset.
//! The mapping is pure and stable across runs, which is what lets the output
//! directory act as a cache.

/// Phrase shared by every catalog prompt; it carries no information.
pub const BOILERPLATE_PHRASE: &str = "create an svg of pippin";

/// Prefix of every derived filename.
pub const FILENAME_PREFIX: &str = "pippin_";

/// Base used when nothing survives normalization.
pub const FALLBACK_BASE: &str = "pippin";

/// Extension of every asset file (without the dot).
pub const ASSET_EXTENSION: &str = "svg";

/// Maximum length of the normalized base, in characters.
pub const MAX_BASE_CHARS: usize = 50;

/// Derive the asset filename for a prompt.
///
/// `"Create an SVG of Pippin playing chess."` becomes `"pippin_playing_chess.svg"`.
pub fn derive_filename(prompt: &str) -> String {
    let base = normalize_base(prompt);
    let base = if base.is_empty() {
        FALLBACK_BASE
    } else {
        base.as_str()
    };
    format!("{}{}.{}", FILENAME_PREFIX, base, ASSET_EXTENSION)
}

fn normalize_base(prompt: &str) -> String {
    let lowered = prompt.to_lowercase().replace(BOILERPLATE_PHRASE, "");

    let filtered: String = lowered
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace() || *c == '-')
        .collect();

    filtered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(MAX_BASE_CHARS)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether a directory entry name looks like an asset.
pub fn is_asset_name(name: &str) -> bool {
    name.strip_suffix(ASSET_EXTENSION)
        .map(|stem| stem.ends_with('.'))
        .unwrap_or(false)
}
