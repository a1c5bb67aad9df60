use crate::signature::AlbumSignature;

/// Title given to clusters created mid-run. Recognized by
/// [`is_generated_title`] and replaced during finalization.
pub const UNSORTED_TITLE: &str = "Unsorted";

/// Finalization fallback when a cluster has neither a centroid nor a median
/// date to name it after.
pub const UNSORTED_CLUSTER_TITLE: &str = "Unsorted Cluster";

/// Prefix of synthesized location titles.
const LOCATION_PREFIX: &str = "Location";

/// Whether a title was synthesized by the sorter rather than written by a
/// user. Generated titles are fair game for replacement; anything else is
/// user-authored and kept.
pub fn is_generated_title(title: Option<&str>) -> bool {
    match title {
        None => true,
        Some(t) => t == UNSORTED_TITLE || t.starts_with(LOCATION_PREFIX),
    }
}

/// Synthesize a display title from a cluster's final signature:
/// `"Location (<lat>, <lon>)"` when a centroid exists, followed by the
/// median date when one exists.
pub fn synthesize_title(signature: &AlbumSignature) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(c) = signature.centroid_location {
        parts.push(format!("{LOCATION_PREFIX} ({:.4}, {:.4})", c.lat, c.lon));
    }
    if let Some(t) = signature.median_time {
        parts.push(t.format("%Y-%m-%d").to_string());
    }
    if parts.is_empty() {
        UNSORTED_CLUSTER_TITLE.to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::GeoPoint;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_generated_title_predicate() {
        assert!(is_generated_title(None));
        assert!(is_generated_title(Some("Unsorted")));
        assert!(is_generated_title(Some("Location (48.8583, 2.2945) 2024-06-01")));
        assert!(!is_generated_title(Some("Day at the Eiffel Tower")));
        // only the exact creation marker counts, not the finalization fallback
        assert!(!is_generated_title(Some("Unsorted Cluster")));
    }

    #[test]
    fn test_title_with_both_axes() {
        let sig = AlbumSignature {
            median_time: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            centroid_location: Some(GeoPoint { lat: 48.8583, lon: 2.2945 }),
        };
        assert_eq!(synthesize_title(&sig), "Location (48.8583, 2.2945) 2024-06-01");
    }

    #[test]
    fn test_title_date_only() {
        let sig = AlbumSignature {
            median_time: Some(Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap()),
            centroid_location: None,
        };
        assert_eq!(synthesize_title(&sig), "2024-06-01");
    }

    #[test]
    fn test_title_location_only() {
        let sig = AlbumSignature {
            median_time: None,
            centroid_location: Some(GeoPoint { lat: -33.8568, lon: 151.2153 }),
        };
        assert_eq!(synthesize_title(&sig), "Location (-33.8568, 151.2153)");
    }

    #[test]
    fn test_title_fallback() {
        let sig = AlbumSignature {
            median_time: None,
            centroid_location: None,
        };
        assert_eq!(synthesize_title(&sig), "Unsorted Cluster");
    }
}
