//! Module-suffix cleanup for display names.
//!
//! Build tooling emits names shaped like `Image [from Image.react]` so error
//! reports can point at the defining module. The suffix clutters inspection
//! UIs, so it is stripped when the module name is redundant with the
//! component name. The matching semantics are an intentional product
//! convention and are preserved exactly: anchored match, both groups
//! non-empty, module equal to the name or extending it with a `.` segment.

use once_cell::sync::Lazy;
use regex::Regex;

static MODULE_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?) \[from (.*)\]$").expect("module suffix regex"));

/// Strip a bracketed `[from <module>]` suffix when the module is redundant
/// with the component name.
#[must_use]
pub fn cleaned_display_name(raw: &str) -> &str {
    let Some(captures) = MODULE_SUFFIX_RE.captures(raw) else {
        return raw;
    };
    let (Some(name), Some(module)) = (captures.get(1), captures.get(2)) else {
        return raw;
    };
    let name = name.as_str();
    let module = module.as_str();
    if name.is_empty() || module.is_empty() {
        return raw;
    }
    if module == name
        || module
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('.'))
    {
        return name;
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_when_module_matches_exactly() {
        assert_eq!(cleaned_display_name("Form [from Form]"), "Form");
    }

    #[test]
    fn strips_suffix_when_module_extends_name_with_a_dot() {
        assert_eq!(cleaned_display_name("Image [from Image.react]"), "Image");
        assert_eq!(cleaned_display_name("Nav [from Nav.react.js]"), "Nav");
    }

    #[test]
    fn keeps_unrelated_module_suffix() {
        assert_eq!(cleaned_display_name("Foo [from Bar]"), "Foo [from Bar]");
        // A prefix without a dot boundary is not redundant.
        assert_eq!(
            cleaned_display_name("Image [from Imagery]"),
            "Image [from Imagery]"
        );
    }

    #[test]
    fn ignores_names_without_a_suffix() {
        assert_eq!(cleaned_display_name("Plain"), "Plain");
        assert_eq!(cleaned_display_name("Unknown"), "Unknown");
        assert_eq!(cleaned_display_name(""), "");
    }

    #[test]
    fn requires_both_groups_to_be_non_empty() {
        assert_eq!(cleaned_display_name(" [from Image]"), " [from Image]");
        assert_eq!(cleaned_display_name("Image [from ]"), "Image [from ]");
    }

    #[test]
    fn repeated_suffixes_use_the_shortest_name_prefix() {
        // The name group is non-greedy, so the module spans the remainder
        // and no longer matches the name.
        assert_eq!(
            cleaned_display_name("A [from A] [from A]"),
            "A [from A] [from A]"
        );
    }
}
