//! Property-based tests for code-fence stripping

use pippin::sanitize::strip_code_fences;
use proptest::prelude::*;

/// Trimmed markup without backticks.
fn markup() -> impl Strategy<Value = String> {
    "<svg>[a-zA-Z0-9 <>/=\"#.\n]{0,80}</svg>"
}

proptest! {
    #[test]
    fn test_each_fence_style_recovers_content(
        content in markup(),
        fence in prop::sample::select(vec!["```svg", "```xml", "```html", "```"]),
    ) {
        let wrapped = format!("{}\n{}\n```", fence, content);
        prop_assert_eq!(strip_code_fences(&wrapped), content);
    }

    #[test]
    fn test_unfenced_content_is_unchanged(content in markup()) {
        prop_assert_eq!(strip_code_fences(&content), content);
    }
}
