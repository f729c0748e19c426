//! URL fragment resolution.

use crate::content::{ContentSection, SECTIONS};

/// Resolve a fragment (`get-started` or a location hash like `#get-started`)
/// to the section it addresses and its position on the page.
///
/// Matching is exact and case-sensitive. Empty and unknown fragments resolve
/// to `None`.
pub fn resolve_fragment(fragment: &str) -> Option<(usize, &'static ContentSection)> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        return None;
    }
    SECTIONS.iter().enumerate().find(|(_, section)| section.id == id)
}

/// Section ids in document order.
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|section| section.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_started_addresses_fifth_section_only() {
        let (idx, section) = resolve_fragment("get-started").expect("known anchor");
        assert_eq!(idx, 4);
        assert_eq!(section.title, "Ready for Smarter Payments?");

        let hits = section_ids().filter(|id| resolve_fragment(id).map(|(i, _)| i) == Some(4));
        assert_eq!(hits.count(), 1);
    }

    #[test]
    fn accepts_location_hash() {
        assert_eq!(resolve_fragment("#security").map(|(i, _)| i), Some(3));
        assert_eq!(resolve_fragment("#frustration").map(|(i, _)| i), Some(0));
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert!(resolve_fragment("").is_none());
        assert!(resolve_fragment("#").is_none());
        assert!(resolve_fragment("pricing").is_none());
        assert!(resolve_fragment("Get-Started").is_none());
        assert!(resolve_fragment("##get-started").is_none());
    }

    #[test]
    fn every_id_round_trips_to_its_position() {
        for (expected, id) in section_ids().enumerate() {
            assert_eq!(resolve_fragment(id).map(|(i, _)| i), Some(expected));
        }
    }
}
