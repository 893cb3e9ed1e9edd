//! Platform descriptor splitting.
//!
//! The arrivals feed describes a platform as a single composite string,
//! conventionally `"<direction> - <platform name>"` with an arbitrary number
//! of spaces either side of the `-` and at the start and end of the string.
//! In some cases the `-` is missing entirely, and descriptors with more than
//! one `-` occur in the wild.

/// Direction label used when a descriptor has no `-` separator.
pub const UNKNOWN_DIRECTION: &str = "Unknown direction";

/// Direction and platform name split out of a raw platform descriptor.
///
/// Borrows from the descriptor it was split from. Both parts are trimmed of
/// leading and trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformParts<'a> {
    /// Segment before the first `-`, or `None` when the descriptor has no `-`.
    pub direction: Option<&'a str>,
    /// Segment between the first and second `-`; the whole descriptor when
    /// there is no `-`, the empty string when nothing follows the first `-`.
    pub name: &'a str,
}

/// Split a raw platform descriptor into direction and platform name.
///
/// The descriptor is split on every `-` and only the first two segments are
/// used: `"Westbound - Platform 2 - District"` yields `Westbound` /
/// `Platform 2`, discarding the rest. A descriptor without a `-` has no
/// direction; the whole descriptor, trimmed, is the name.
///
/// # Examples
///
/// ```
/// use tube_arrivals::domain::split_descriptor;
///
/// let parts = split_descriptor("  Northbound - Platform 1  ");
/// assert_eq!(parts.direction, Some("Northbound"));
/// assert_eq!(parts.name, "Platform 1");
///
/// // No separator: no direction, the descriptor itself is the name
/// let parts = split_descriptor("Platform 4");
/// assert_eq!(parts.direction, None);
/// assert_eq!(parts.name, "Platform 4");
///
/// // Nothing after the separator: the name is empty
/// let parts = split_descriptor("Southbound -");
/// assert_eq!(parts.direction, Some("Southbound"));
/// assert_eq!(parts.name, "");
/// ```
pub fn split_descriptor(raw: &str) -> PlatformParts<'_> {
    let mut segments = raw.split('-');
    match (segments.next(), segments.next()) {
        (Some(direction), Some(name)) => PlatformParts {
            direction: Some(direction.trim()),
            name: name.trim(),
        },
        _ => PlatformParts {
            direction: None,
            name: raw.trim(),
        },
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for descriptor segments with no `-` in them.
    fn dashless() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9 ]{0,12}").unwrap()
    }

    proptest! {
        /// Splitting never panics and both parts come back trimmed.
        #[test]
        fn parts_are_trimmed(raw in ".{0,40}") {
            let parts = split_descriptor(&raw);
            if let Some(direction) = parts.direction {
                prop_assert_eq!(direction, direction.trim());
            }
            prop_assert_eq!(parts.name, parts.name.trim());
        }

        /// A descriptor without `-` yields no direction and the trimmed whole.
        #[test]
        fn dashless_descriptor(raw in dashless()) {
            let parts = split_descriptor(&raw);
            prop_assert_eq!(parts.direction, None);
            prop_assert_eq!(parts.name, raw.trim());
        }

        /// Composing "<dir> - <name>" splits back into the trimmed parts,
        /// however much whitespace surrounds them.
        #[test]
        fn composed_descriptor_roundtrips(
            direction in dashless(),
            name in dashless(),
            pad in 0usize..4,
        ) {
            let spaces = " ".repeat(pad);
            let raw = format!("{spaces}{direction}{spaces}-{spaces}{name}{spaces}");
            let parts = split_descriptor(&raw);
            prop_assert_eq!(parts.direction, Some(direction.trim()));
            prop_assert_eq!(parts.name, name.trim());
        }

        /// Segments past the second are never part of the result.
        #[test]
        fn later_segments_discarded(
            direction in dashless(),
            name in dashless(),
            rest in ".{0,20}",
        ) {
            let raw = format!("{direction}-{name}-{rest}");
            let parts = split_descriptor(&raw);
            prop_assert_eq!(parts.direction, Some(direction.trim()));
            prop_assert_eq!(parts.name, name.trim());
        }
    }
}
