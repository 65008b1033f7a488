//! File-naming convention rules.
//!
//! A single-pass, stateless checker over file paths: component files
//! (`.tsx`/`.jsx`) must have PascalCase stems, every other checked source
//! file must have a kebab-case stem, and directory segments must be
//! kebab-case. Names on the allow-list (framework entry points, tooling
//! files) are skipped, as are hidden entries and unknown extensions.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static PASCAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("pascal regex must compile"));

static KEBAB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab regex must compile"));

/// Extensions whose files are components (PascalCase stems).
const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Extensions checked for kebab-case stems. Anything else is ignored.
const SUPPORT_EXTENSIONS: &[&str] = &["ts", "js", "mjs", "cjs", "css", "scss", "json", "md"];

/// Names exempt from all checks, wherever they appear in a path.
const ALLOWED_NAMES: &[&str] = &[
    "index",
    "main",
    "App",
    "_app",
    "_document",
    "layout",
    "page",
    "middleware",
    "README",
    "LICENSE",
    "CHANGELOG",
    "Dockerfile",
    "Makefile",
    "__tests__",
    "__mocks__",
    "node_modules",
];

/// The two naming styles the checker enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingStyle {
    Pascal,
    Kebab,
}

impl NamingStyle {
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Pascal => PASCAL_RE.is_match(segment),
            Self::Kebab => KEBAB_RE.is_match(segment),
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pascal => write!(f, "PascalCase"),
            Self::Kebab => write!(f, "kebab-case"),
        }
    }
}

/// What a path's final segment is, judged by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// UI component source (`.tsx`, `.jsx`).
    Component,
    /// Non-component source or asset with a checked extension.
    Support,
    /// Extension outside the checked set; the file name is not judged.
    Unchecked,
}

impl PathClass {
    /// Classify a file name by its (last) extension.
    pub fn of(file_name: &str) -> Self {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return Self::Unchecked;
        };
        if COMPONENT_EXTENSIONS.contains(&ext) {
            Self::Component
        } else if SUPPORT_EXTENSIONS.contains(&ext) {
            Self::Support
        } else {
            Self::Unchecked
        }
    }

    /// The style this class requires, if any.
    pub fn required_style(&self) -> Option<NamingStyle> {
        match self {
            Self::Component => Some(NamingStyle::Pascal),
            Self::Support => Some(NamingStyle::Kebab),
            Self::Unchecked => None,
        }
    }
}

/// Whether a violation names a file stem or a directory segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    File,
    Directory,
}

/// One naming rule failure within a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingViolation {
    /// The full path as supplied by the caller.
    pub path: String,
    /// The offending segment (file stem or directory name).
    pub segment: String,
    /// The style the segment should have followed.
    pub expected: NamingStyle,
    pub kind: SegmentKind,
}

impl fmt::Display for NamingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self.kind {
            SegmentKind::File => "file",
            SegmentKind::Directory => "directory",
        };
        write!(
            f,
            "{}: {} '{}' should be {}",
            self.path, noun, self.segment, self.expected
        )
    }
}

/// Aggregate result of checking a batch of paths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NamingReport {
    /// Number of paths inspected (including skipped ones).
    pub checked: usize,
    pub violations: Vec<NamingViolation>,
}

impl NamingReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check a batch of paths and collect every violation.
pub fn check_paths<I, P>(paths: I) -> NamingReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = NamingReport::default();
    for path in paths {
        report.checked += 1;
        report.violations.extend(check_path(path.as_ref()));
    }
    report
}

/// Check one path: every directory segment, then the file stem.
pub fn check_path(path: &Path) -> Vec<NamingViolation> {
    let mut violations = Vec::new();
    let display = path.display().to_string();

    // Only Normal components are judged; root, prefix, `.` and `..` carry
    // no name the conventions could apply to.
    let segments: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    let Some((file_name, directories)) = segments.split_last() else {
        return violations;
    };

    for dir in directories {
        if is_skipped(dir) {
            continue;
        }
        if !NamingStyle::Kebab.matches(dir) {
            violations.push(NamingViolation {
                path: display.clone(),
                segment: (*dir).to_string(),
                expected: NamingStyle::Kebab,
                kind: SegmentKind::Directory,
            });
        }
    }

    if is_skipped(file_name) {
        return violations;
    }

    let stem = stem_of(file_name);
    if is_skipped(stem) {
        return violations;
    }

    if let Some(expected) = PathClass::of(file_name).required_style() {
        if !expected.matches(stem) {
            violations.push(NamingViolation {
                path: display,
                segment: stem.to_string(),
                expected,
                kind: SegmentKind::File,
            });
        }
    }

    violations
}

/// The meaningful stem: everything before the first `.`, so
/// `use-auth.test.ts` validates `use-auth`.
fn stem_of(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Hidden entries and allow-listed names are never judged.
fn is_skipped(segment: &str) -> bool {
    segment.starts_with('.') || ALLOWED_NAMES.contains(&segment)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn check(path: &str) -> Vec<NamingViolation> {
        check_path(Path::new(path))
    }

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn tsx_and_jsx_are_components() {
        assert_eq!(PathClass::of("Button.tsx"), PathClass::Component);
        assert_eq!(PathClass::of("Button.jsx"), PathClass::Component);
    }

    #[test]
    fn ts_and_css_are_support() {
        assert_eq!(PathClass::of("helpers.ts"), PathClass::Support);
        assert_eq!(PathClass::of("globals.css"), PathClass::Support);
    }

    #[test]
    fn unknown_extensions_are_unchecked() {
        assert_eq!(PathClass::of("photo.png"), PathClass::Unchecked);
        assert_eq!(PathClass::of("no_extension"), PathClass::Unchecked);
    }

    // ── styles ────────────────────────────────────────────────────────────

    #[test]
    fn pascal_style_matching() {
        assert!(NamingStyle::Pascal.matches("Button"));
        assert!(NamingStyle::Pascal.matches("UserCard2"));
        assert!(!NamingStyle::Pascal.matches("button"));
        assert!(!NamingStyle::Pascal.matches("user_card"));
        assert!(!NamingStyle::Pascal.matches("User-Card"));
    }

    #[test]
    fn kebab_style_matching() {
        assert!(NamingStyle::Kebab.matches("use-auth"));
        assert!(NamingStyle::Kebab.matches("api"));
        assert!(NamingStyle::Kebab.matches("v2-client"));
        assert!(!NamingStyle::Kebab.matches("useAuth"));
        assert!(!NamingStyle::Kebab.matches("use_auth"));
        assert!(!NamingStyle::Kebab.matches("-leading"));
        assert!(!NamingStyle::Kebab.matches("trailing-"));
    }

    // ── component files ───────────────────────────────────────────────────

    #[test]
    fn pascal_component_passes() {
        assert!(check("src/components/Button.tsx").is_empty());
    }

    #[test]
    fn lowercase_component_fails() {
        let violations = check("src/components/button.tsx");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].segment, "button");
        assert_eq!(violations[0].expected, NamingStyle::Pascal);
        assert_eq!(violations[0].kind, SegmentKind::File);
    }

    #[test]
    fn component_test_file_validates_first_stem() {
        assert!(check("src/components/Button.test.tsx").is_empty());
        assert!(!check("src/components/button.test.tsx").is_empty());
    }

    // ── support files ─────────────────────────────────────────────────────

    #[test]
    fn kebab_support_file_passes() {
        assert!(check("src/hooks/use-auth.ts").is_empty());
        assert!(check("src/hooks/use-auth.test.ts").is_empty());
    }

    #[test]
    fn camel_support_file_fails() {
        let violations = check("src/hooks/useAuth.ts");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].expected, NamingStyle::Kebab);
    }

    #[test]
    fn snake_support_file_fails() {
        assert!(!check("src/utils/date_utils.ts").is_empty());
    }

    // ── directories ───────────────────────────────────────────────────────

    #[test]
    fn camel_directory_fails_even_for_unchecked_file() {
        let violations = check("src/userProfiles/photo.png");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].segment, "userProfiles");
        assert_eq!(violations[0].kind, SegmentKind::Directory);
    }

    #[test]
    fn multiple_violations_in_one_path() {
        let violations = check("src/UserProfiles/avatarImage.ts");
        assert_eq!(violations.len(), 2);
    }

    // ── allow-list and skips ──────────────────────────────────────────────

    #[test]
    fn allowed_names_pass_in_any_position() {
        assert!(check("src/App.tsx").is_empty());
        assert!(check("src/pages/_app.tsx").is_empty());
        assert!(check("src/app/layout.tsx").is_empty());
        assert!(check("README.md").is_empty());
        assert!(check("src/components/__tests__/Button.test.tsx").is_empty());
    }

    #[test]
    fn index_allowed_for_both_classes() {
        assert!(check("src/components/index.tsx").is_empty());
        assert!(check("src/utils/index.ts").is_empty());
    }

    #[test]
    fn hidden_entries_are_skipped() {
        assert!(check(".eslintrc.json").is_empty());
        assert!(check(".github/workflows/ci.yml").is_empty());
    }

    #[test]
    fn relative_prefix_is_ignored() {
        assert!(check("./src/components/Button.tsx").is_empty());
    }

    #[test]
    fn absolute_root_is_ignored() {
        assert!(check("/tmp/work/src/components/Button.tsx").is_empty());
        let violations = check("/tmp/work/src/userProfiles/index.ts");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].segment, "userProfiles");
    }

    // ── batch reporting ───────────────────────────────────────────────────

    #[test]
    fn report_counts_and_collects() {
        let paths = [
            PathBuf::from("src/components/Button.tsx"),
            PathBuf::from("src/hooks/useAuth.ts"),
            PathBuf::from("src/photo.png"),
        ];
        let report = check_paths(&paths);
        assert_eq!(report.checked, 3);
        assert_eq!(report.violations.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn empty_batch_is_clean() {
        let report = check_paths(Vec::<PathBuf>::new());
        assert!(report.is_clean());
        assert_eq!(report.checked, 0);
    }

    #[test]
    fn violation_display_names_path_and_style() {
        let v = check("src/hooks/useAuth.ts").remove(0);
        let text = v.to_string();
        assert!(text.contains("useAuth"));
        assert!(text.contains("kebab-case"));
    }
}
