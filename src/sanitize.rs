//! Code-fence stripping for model output.

/// Opening fences recognized around generated markup, most specific first.
pub const OPENING_FENCES: [&str; 4] = ["```svg", "```xml", "```html", "```"];

const CLOSING_FENCE: &str = "```";

/// Strip a markdown code fence that wraps the whole of `raw`.
///
/// Only a leading opening fence paired with a trailing closing fence is
/// removed; fences anywhere else are left as they are. Input that matches no
/// recognized fence is returned unchanged.
pub fn strip_code_fences(raw: &str) -> String {
    if !raw.ends_with(CLOSING_FENCE) {
        return raw.to_string();
    }

    for fence in OPENING_FENCES {
        if let Some(inner) = raw
            .strip_prefix(fence)
            .and_then(|rest| rest.strip_suffix(CLOSING_FENCE))
        {
            return inner.trim().to_string();
        }
    }

    raw.to_string()
}
