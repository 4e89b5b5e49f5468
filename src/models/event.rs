//! Solar event kinds.
//!
//! This module defines the [`EventKind`] enum naming which solar event a
//! request asks for.

/// Which solar event is being queried.
///
/// # Example
///
/// ```
/// use sun_events::models::EventKind;
///
/// assert_eq!(EventKind::from_segment("sunrise"), Some(EventKind::Sunrise));
/// assert_eq!(EventKind::from_segment("moonphase"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The sun crossing the horizon in the morning.
    Sunrise,
    /// The sun crossing the horizon in the evening.
    Sunset,
}

impl EventKind {
    /// Parses the event-name path segment.
    ///
    /// Matching is exact and case-sensitive. Any other value, including an
    /// empty segment, returns `None`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "sunrise" => Some(EventKind::Sunrise),
            "sunset" => Some(EventKind::Sunset),
            _ => None,
        }
    }

    /// Returns the path segment naming this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Sunrise => "sunrise",
            EventKind::Sunset => "sunset",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segment_recognises_both_events() {
        assert_eq!(EventKind::from_segment("sunrise"), Some(EventKind::Sunrise));
        assert_eq!(EventKind::from_segment("sunset"), Some(EventKind::Sunset));
    }

    #[test]
    fn test_from_segment_is_case_sensitive() {
        assert_eq!(EventKind::from_segment("Sunrise"), None);
        assert_eq!(EventKind::from_segment("SUNSET"), None);
    }

    #[test]
    fn test_from_segment_rejects_unknown_and_empty() {
        assert_eq!(EventKind::from_segment("moonphase"), None);
        assert_eq!(EventKind::from_segment(""), None);
    }

    #[test]
    fn test_display_matches_segment() {
        assert_eq!(EventKind::Sunrise.to_string(), "sunrise");
        assert_eq!(EventKind::Sunset.to_string(), "sunset");
    }
}
