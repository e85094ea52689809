use std::fmt;

/// Property path from an entity to a field, e.g. `Beast.Name`.
///
/// A path of length one names a direct property; longer paths navigate
/// through owned objects or references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Path {
        Path {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when the path navigates through at least one owned object or
    /// reference before reaching its leaf.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// The first `len` segments.
    pub fn prefix(&self, len: usize) -> Path {
        Path {
            segments: self.segments[..len].to_vec(),
        }
    }

    pub fn chain(&self, segment: impl Into<String>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Path { segments }
    }
}

impl From<&str> for Path {
    /// Parses a dotted path, `"Beast.Name"`.
    fn from(value: &str) -> Self {
        Path::new(value.split('.').filter(|segment| !segment.is_empty()))
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::from(value.as_str())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(value: [&str; N]) -> Self {
        Path::new(value)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Path { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
