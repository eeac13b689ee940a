//! Slash-delimited option paths.

use std::fmt;

const SEPARATOR: char = '/';

/// The location of an option inside the chart configuration tree.
///
/// A path such as `plotOptions/area/marker` addresses the block
///
/// ```text
/// plotOptions: { area: { marker: { ... } } }
/// ```
///
/// Parsing never fails. Blank input produces a path without a segment list,
/// which every store operation rejects. Input made only of slashes produces
/// a root-only path: it has a segment list, but the list is empty.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct OptionPath {
    raw: Option<String>,
    segments: Option<Vec<String>>,
}

impl OptionPath {
    /// Parse a path string.
    ///
    /// # Path Syntax
    ///
    /// - Segments are separated by `/`
    /// - Segments are trimmed; blank segments are dropped
    /// - Leading and trailing slashes are ignored
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chartopts_option_store::OptionPath;
    ///
    /// let path = OptionPath::parse("/chart/ type /");
    /// assert_eq!(path.segments().unwrap(), ["chart", "type"]);
    ///
    /// assert!(OptionPath::parse("   ").segments().is_none());
    /// ```
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let segments = trimmed
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        OptionPath {
            raw: Some(trimmed.to_string()),
            segments: Some(segments),
        }
    }

    /// Build a path from already split segments.
    ///
    /// Segments go through the same trimming as [`OptionPath::parse`], and
    /// segments that contain a separator are split further.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(&joined)
    }

    /// All segments, or `None` when the input was blank.
    pub fn segments(&self) -> Option<&[String]> {
        self.segments.as_deref()
    }

    /// Every segment except the last.
    ///
    /// `None` when the path has no segments at all.
    pub fn head_segments(&self) -> Option<&[String]> {
        match self.segments.as_deref() {
            Some(segments) if !segments.is_empty() => Some(&segments[..segments.len() - 1]),
            _ => None,
        }
    }

    /// The final segment, `None` when the path has no segments.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments
            .as_deref()
            .and_then(|segments| segments.last())
            .map(String::as_str)
    }

    /// Whether the path carries a segment list at all.
    pub fn is_valid(&self) -> bool {
        self.segments.is_some()
    }

    /// A valid path whose segment list is empty (e.g. `"/"`).
    pub fn is_root(&self) -> bool {
        matches!(&self.segments, Some(segments) if segments.is_empty())
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extend this path with one more segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> OptionPath {
        let mut segments: Vec<&str> = self
            .segments
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        segments.push(segment);
        Self::from_segments(segments)
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.as_deref().unwrap_or(""))
    }
}

impl From<&str> for OptionPath {
    fn from(s: &str) -> Self {
        OptionPath::parse(s)
    }
}

impl From<String> for OptionPath {
    fn from(s: String) -> Self {
        OptionPath::parse(&s)
    }
}

impl From<&String> for OptionPath {
    fn from(s: &String) -> Self {
        OptionPath::parse(s)
    }
}

impl From<Option<&str>> for OptionPath {
    fn from(s: Option<&str>) -> Self {
        s.map(OptionPath::parse).unwrap_or_default()
    }
}

impl From<&OptionPath> for OptionPath {
    fn from(p: &OptionPath) -> Self {
        p.clone()
    }
}

/// Shorthand for `OptionPath::parse`.
///
/// # Example
///
/// ```rust
/// use chartopts_option_store::opath;
///
/// let p = opath!("chart/zoomType");
/// assert_eq!(p.last_segment(), Some("zoomType"));
/// ```
#[macro_export]
macro_rules! opath {
    ($s:expr) => {
        $crate::OptionPath::parse($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(OptionPath::parse("chart").len(), 1);
        assert_eq!(OptionPath::parse("chart/type").len(), 2);
        assert_eq!(OptionPath::parse("plotOptions/area/marker").len(), 3);
    }

    #[test]
    fn normalize_slashes_and_whitespace() {
        assert_eq!(
            OptionPath::parse("/chart/type/").segments(),
            OptionPath::parse("chart/type").segments()
        );
        assert_eq!(
            OptionPath::parse(" chart // type ").segments().unwrap(),
            ["chart", "type"]
        );
        assert_eq!(
            OptionPath::parse("/ chart / events /load").segments().unwrap(),
            ["chart", "events", "load"]
        );
    }

    #[test]
    fn blank_input_has_no_segments() {
        for input in ["", "   ", "\t\n"] {
            let p = OptionPath::parse(input);
            assert!(p.segments().is_none(), "input {:?}", input);
            assert!(p.head_segments().is_none());
            assert!(p.last_segment().is_none());
            assert!(!p.is_valid());
        }
        assert!(!OptionPath::from(None::<&str>).is_valid());
    }

    #[test]
    fn slashes_only_is_root() {
        let p = OptionPath::parse("//");
        assert!(p.is_valid());
        assert!(p.is_root());
        assert_eq!(p.segments().unwrap().len(), 0);
        assert!(p.head_segments().is_none());
        assert!(p.last_segment().is_none());
    }

    #[test]
    fn head_and_last() {
        let p = opath!("/series/0/data");
        assert_eq!(p.head_segments().unwrap(), ["series", "0"]);
        assert_eq!(p.last_segment(), Some("data"));

        let single = opath!("title");
        assert!(single.head_segments().unwrap().is_empty());
        assert_eq!(single.last_segment(), Some("title"));
    }

    #[test]
    fn child_extends_path() {
        let p = opath!("plotOptions/line").child("dataLabels");
        assert_eq!(
            p.segments().unwrap(),
            ["plotOptions", "line", "dataLabels"]
        );
        assert_eq!(p.to_string(), "plotOptions/line/dataLabels");
    }

    #[test]
    fn display_keeps_trimmed_input() {
        assert_eq!(opath!("  /chart/type ").to_string(), "/chart/type");
        assert_eq!(opath!("").to_string(), "");
    }

    #[test]
    fn from_segments_trims() {
        let p = OptionPath::from_segments([" xAxis ", "labels", ""]);
        assert_eq!(p.segments().unwrap(), ["xAxis", "labels"]);
    }

    proptest! {
        #[test]
        fn segments_are_trimmed_and_non_empty(s in "[ a-z/]{0,24}") {
            let p = OptionPath::parse(&s);
            if let Some(segments) = p.segments() {
                for segment in segments {
                    prop_assert!(!segment.is_empty());
                    prop_assert_eq!(segment.trim(), segment.as_str());
                    prop_assert!(!segment.contains('/'));
                }
            } else {
                prop_assert!(s.trim().is_empty());
            }
        }
    }
}
