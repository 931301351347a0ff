//! Virtual-path helpers shared by the tree and its callers.
//!
//! Paths inside the tree are ordered folder-name sequences starting below the root. The helpers
//! here convert between that form and the `/`-joined display form used by the presentation layer.

/// Splits a display path into folder segments using file-manager semantics.
///
/// This helper trims whitespace, converts backslashes to `/`, drops empty and `.` segments, and
/// resolves `..` against the segments collected so far. An empty or fully-collapsed path is the
/// root (no segments).
pub fn parse_virtual_path(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for segment in path.trim().replace('\\', "/").split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }
    segments
}

/// Joins folder segments into the `/`-prefixed display form. The root renders as `/`.
pub fn join_virtual_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    segments.iter().fold(String::new(), |mut out, segment| {
        out.push('/');
        out.push_str(segment.as_ref());
        out
    })
}

/// Normalizes a display path (round trip through [`parse_virtual_path`]).
pub fn normalize_virtual_path(path: &str) -> String {
    join_virtual_path(&parse_virtual_path(path))
}

/// Returns `true` when `candidate` equals `ancestor` or lies beneath it.
///
/// Comparison is per segment, so `Desktop/Pro` is not considered an ancestor of
/// `Desktop/Project`.
pub fn is_same_or_descendant<A, B>(candidate: &[A], ancestor: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    candidate.len() >= ancestor.len()
        && candidate
            .iter()
            .zip(ancestor)
            .all(|(a, b)| a.as_ref() == b.as_ref())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_virtual_path_matches_expected_cases() {
        let cases = [
            ("", "/"),
            ("   ", "/"),
            ("Desktop/Reports", "/Desktop/Reports"),
            ("/Desktop//Reports/", "/Desktop/Reports"),
            ("./Desktop/../Documents", "/Documents"),
            ("\\\\Desktop\\\\Project Aurora", "/Desktop/Project Aurora"),
            ("/../../", "/"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_virtual_path(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn parse_keeps_spaces_inside_segments() {
        assert_eq!(
            parse_virtual_path("/Desktop/Project Aurora"),
            vec!["Desktop".to_string(), "Project Aurora".to_string()]
        );
    }

    #[test]
    fn descendant_check_is_segment_aware() {
        assert!(is_same_or_descendant(&["Desktop", "A"], &["Desktop", "A"]));
        assert!(is_same_or_descendant(&["Desktop", "A", "B"], &["Desktop", "A"]));
        assert!(!is_same_or_descendant(&["Desktop", "Project"], &["Desktop", "Pro"]));
        assert!(!is_same_or_descendant(&["Desktop"], &["Desktop", "A"]));
        assert!(is_same_or_descendant::<&str, &str>(&["Documents"], &[]));
    }
}
