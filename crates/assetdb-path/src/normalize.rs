//! String-level validation helpers behind [`AssetPath`](crate::AssetPath).
//!
//! Classification is case-insensitive; nothing here ever changes the case
//! of the text it returns.

const ASSETS_PREFIX: &str = "assets/";
const PACKAGES_PREFIX: &str = "packages/";

/// Replace every backslash with a forward slash.
pub(crate) fn to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip any number of leading and trailing forward slashes.
pub(crate) fn trim_separators(path: &str) -> &str {
    path.trim_matches('/')
}

/// Forward slashes only, no leading or trailing separator.
pub(crate) fn normalize(path: &str) -> String {
    trim_separators(&to_forward_slashes(path)).to_string()
}

/// True for empty or whitespace-only input.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

pub(crate) fn contains_separator(text: &str) -> bool {
    text.contains(['/', '\\'])
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Relative-path rule applied to already normalized text.
pub(crate) fn is_relative_normalized(path: &str) -> bool {
    path.eq_ignore_ascii_case("assets")
        || starts_with_ignore_case(path, ASSETS_PREFIX)
        || starts_with_ignore_case(path, PACKAGES_PREFIX)
}

/// Whether `path` is a project-relative path.
///
/// A path is relative when, ignoring case and after separator
/// normalization, it equals `Assets` or starts with `Assets/` or
/// `Packages/`.
///
/// ```
/// use assetdb_path::is_relative_path;
///
/// assert!(is_relative_path("assets"));
/// assert!(is_relative_path("\\Packages\\com.example\\package.json"));
/// assert!(!is_relative_path("AssetsData"));
/// ```
pub fn is_relative_path(path: &str) -> bool {
    is_relative_normalized(&normalize(path))
}

/// True if any segment of a normalized path is `..`.
pub(crate) fn has_parent_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "..")
}

/// Rooted on this host or any other: `/x`, `\x`, `C:` or `C:\x`.
pub(crate) fn looks_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [b'/' | b'\\', ..] => true,
        [drive, b':', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Remainder of `path` below `root`, compared segment-wise.
///
/// Both arguments must be normalized. Returns `Some("")` when `path` is
/// `root` itself.
pub(crate) fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() {
        return Some(rest);
    }
    if root.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}

/// Drop leading dots so callers can re-add exactly one.
pub(crate) fn normalize_extension(extension: &str) -> &str {
    extension.trim_start_matches('.')
}

/// Extension of a single file name, from the last dot, dot included.
pub(crate) fn extension_of(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map(|idx| &file_name[idx..])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_repeated_separators() {
        assert_eq!(normalize("//Assets/folder\\\\"), "Assets/folder");
    }

    #[test]
    fn normalize_keeps_inner_text() {
        assert_eq!(normalize("Assets/My Folder/a.b.c"), "Assets/My Folder/a.b.c");
    }

    #[test]
    fn relative_rule_ignores_case() {
        assert!(is_relative_normalized("ASSETS"));
        assert!(is_relative_normalized("assets/x"));
        assert!(is_relative_normalized("PACKAGES/x"));
    }

    #[test]
    fn relative_rule_requires_separator_after_root() {
        assert!(!is_relative_normalized("AssetsData"));
        assert!(!is_relative_normalized("Packages"));
        assert!(!is_relative_normalized("PackagesX/y"));
        assert!(!is_relative_normalized(""));
    }

    #[test]
    fn relative_rule_handles_multibyte_input() {
        assert!(!is_relative_normalized("äääääää/x"));
        assert!(!is_relative_normalized("ä"));
    }

    #[test]
    fn parent_segment_detection() {
        assert!(has_parent_segment("Assets/../x"));
        assert!(has_parent_segment(".."));
        assert!(!has_parent_segment("Assets/..x/a..b"));
        assert!(!has_parent_segment("Assets/./x"));
    }

    #[test]
    fn absolute_detection() {
        assert!(looks_absolute("/home/user"));
        assert!(looks_absolute("\\\\server\\share"));
        assert!(looks_absolute("C:\\Users"));
        assert!(looks_absolute("d:/work"));
        assert!(!looks_absolute("SomeFolder/"));
        assert!(!looks_absolute("1:/x"));
        assert!(!looks_absolute(""));
    }

    #[test]
    fn strip_root_respects_segment_boundaries() {
        assert_eq!(strip_root("home/p/Assets/x", "home/p"), Some("Assets/x"));
        assert_eq!(strip_root("home/p", "home/p"), Some(""));
        assert_eq!(strip_root("home/project/Assets", "home/p"), None);
        assert_eq!(strip_root("other/p/Assets", "home/p"), None);
    }

    #[test]
    fn extension_helpers() {
        assert_eq!(normalize_extension(".ext"), "ext");
        assert_eq!(normalize_extension("ext"), "ext");
        assert_eq!(extension_of("a.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".gitignore"), ".gitignore");
    }

    #[test]
    fn blank_and_separator_checks() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
        assert!(contains_separator("a/b"));
        assert!(contains_separator("\\x"));
        assert!(!contains_separator("file name"));
    }
}
