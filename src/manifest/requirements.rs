//! requirements.txt exact-pin parser
//!
//! Only `name==version` lines are recognised:
//! - name: one or more of `[A-Za-z0-9_.-]`
//! - version: the following run of non-whitespace characters
//!
//! Anything else (ranges, extras, comments, blank lines, bare names) is
//! skipped without complaint.

use crate::domain::PackageDeclaration;
use crate::error::ManifestError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static EXACT_PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)==(\S+)").unwrap());

/// Parse a single manifest line into a declaration, if it is an exact pin
pub fn parse_line(line: &str) -> Option<PackageDeclaration> {
    let caps = EXACT_PIN_RE.captures(line.trim())?;
    let name = caps.get(1)?.as_str();
    let version = caps.get(2)?.as_str();
    Some(PackageDeclaration::new(name, version))
}

/// Extract all exact-pin declarations from manifest content, in file order
///
/// `\n`, `\r\n` and bare `\r` all end a line.
pub fn parse_requirements(content: &str) -> Vec<PackageDeclaration> {
    content.split(['\n', '\r']).filter_map(parse_line).collect()
}

/// Read a manifest file and extract its exact-pin declarations
pub fn read_requirements(path: &Path) -> Result<Vec<PackageDeclaration>, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    Ok(parse_requirements(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(content: &str) -> Vec<(String, String)> {
        parse_requirements(content)
            .into_iter()
            .map(|d| (d.name, d.pinned_version))
            .collect()
    }

    #[test]
    fn test_parse_exact_pin() {
        let decl = parse_line("flask==2.0.0").unwrap();
        assert_eq!(decl.name, "flask");
        assert_eq!(decl.pinned_version, "2.0.0");
    }

    #[test]
    fn test_parse_name_charset() {
        let decl = parse_line("zope.interface_extra-Pkg2==6.0").unwrap();
        assert_eq!(decl.name, "zope.interface_extra-Pkg2");
        assert_eq!(decl.pinned_version, "6.0");
    }

    #[test]
    fn test_parse_trailing_whitespace() {
        let decl = parse_line("requests==2.31.1   \r").unwrap();
        assert_eq!(decl.pinned_version, "2.31.1");
    }

    #[test]
    fn test_parse_version_stops_at_whitespace() {
        let decl = parse_line("ansible==9.1.0  # pinned for collections").unwrap();
        assert_eq!(decl.pinned_version, "9.1.0");
    }

    #[test]
    fn test_parse_version_keeps_marker_glued_to_token() {
        let decl = parse_line("pywin32==306;sys_platform=='win32'").unwrap();
        assert_eq!(decl.pinned_version, "306;sys_platform=='win32'");
    }

    #[test]
    fn test_skip_range() {
        assert!(parse_line("numpy>=1.0").is_none());
        assert!(parse_line("numpy~=1.0").is_none());
        assert!(parse_line("numpy!=1.0").is_none());
    }

    #[test]
    fn test_skip_extras() {
        assert!(parse_line("pkg[extra]==1.0").is_none());
    }

    #[test]
    fn test_skip_comment_blank_and_bare_name() {
        assert!(parse_line("# flask==2.0.0").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("flask").is_none());
        assert!(parse_line("flask==").is_none());
    }

    #[test]
    fn test_skip_spaces_around_operator() {
        assert!(parse_line("flask == 2.0.0").is_none());
    }

    #[test]
    fn test_parse_requirements_mixed_content() {
        let content = "flask==2.0.0\n# comment\nrequests==2.31.1\nnumpy>=1.0\n";
        assert_eq!(
            pairs(content),
            vec![
                ("flask".to_string(), "2.0.0".to_string()),
                ("requests".to_string(), "2.31.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_requirements_keeps_duplicates() {
        let content = "six==1.15.0\nsix==1.16.0\n";
        assert_eq!(
            pairs(content),
            vec![
                ("six".to_string(), "1.15.0".to_string()),
                ("six".to_string(), "1.16.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_requirements_line_endings() {
        let expected = vec![
            ("flask".to_string(), "2.0.0".to_string()),
            ("requests".to_string(), "2.31.1".to_string()),
        ];
        assert_eq!(pairs("flask==2.0.0\rrequests==2.31.1\r"), expected);
        assert_eq!(pairs("flask==2.0.0\r\nrequests==2.31.1\r\n"), expected);
        assert_eq!(pairs("flask==2.0.0\nrequests==2.31.1"), expected);
    }

    #[test]
    fn test_parse_requirements_empty() {
        assert!(parse_requirements("").is_empty());
    }

    #[test]
    fn test_read_requirements_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_requirements(&dir.path().join("requirements.txt"));
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn test_read_requirements_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requirements.txt");
        std::fs::write(&path, "ansible-core==2.16.2\njmespath==1.0.1\n").unwrap();
        let decls = read_requirements(&path).unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0], PackageDeclaration::new("ansible-core", "2.16.2"));
    }
}
