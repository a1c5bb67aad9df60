use chrono::{DateTime, Utc};

use crate::media::GeoPoint;
use crate::trip::Album;

/// Temporal/spatial fingerprint of an album's current media. Ephemeral:
/// recomputed whenever the media set changes, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbumSignature {
    pub median_time: Option<DateTime<Utc>>,
    pub centroid_location: Option<GeoPoint>,
}

/// Compute an album's signature from its current media.
///
/// Sentinel-dated items are excluded from the median and unknown-location
/// items from the centroid; either field is `None` when no media qualify.
pub fn compute_signature(album: &Album) -> AlbumSignature {
    let mut times: Vec<DateTime<Utc>> = album.media.iter().filter_map(|m| m.capture_time()).collect();
    times.sort_unstable();
    // floor(n/2): for even counts this is the upper-middle element, not an average
    let median_time = (!times.is_empty()).then(|| times[times.len() / 2]);

    let points: Vec<GeoPoint> = album.media.iter().filter_map(|m| m.capture_location()).collect();
    let centroid_location = (!points.is_empty()).then(|| {
        let n = points.len() as f64;
        GeoPoint {
            lat: points.iter().map(|p| p.lat).sum::<f64>() / n,
            lon: points.iter().map(|p| p.lon).sum::<f64>() / n,
        }
    });

    AlbumSignature {
        median_time,
        centroid_location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, minute, 0).unwrap()
    }

    fn item(path: &str, created_at: Option<DateTime<Utc>>, geo: Option<GeoPoint>) -> MediaItem {
        MediaItem {
            path_url: path.to_string(),
            uploader: "ada".to_string(),
            file_type: "photo".to_string(),
            file_format: "jpeg".to_string(),
            file_size: 1024,
            geo_location: geo,
            created_at,
        }
    }

    fn album(media: Vec<MediaItem>) -> Album {
        Album {
            id: Some("a".to_string()),
            title: None,
            description: None,
            media,
        }
    }

    #[test]
    fn test_median_odd_count() {
        let a = album(vec![
            item("c", Some(at(14, 0)), None),
            item("a", Some(at(10, 0)), None),
            item("b", Some(at(12, 0)), None),
        ]);
        assert_eq!(compute_signature(&a).median_time, Some(at(12, 0)));
    }

    #[test]
    fn test_median_even_count_is_upper_middle() {
        let a = album(vec![
            item("a", Some(at(10, 0)), None),
            item("b", Some(at(12, 0)), None),
            item("c", Some(at(14, 0)), None),
            item("d", Some(at(16, 0)), None),
        ]);
        // index floor(4/2) = 2 of the sorted list, not the 12:00/14:00 average
        assert_eq!(compute_signature(&a).median_time, Some(at(14, 0)));
    }

    #[test]
    fn test_sentinels_excluded() {
        let a = album(vec![
            item("a", Some(DateTime::UNIX_EPOCH), Some(GeoPoint { lat: 0.0, lon: 0.0 })),
            item("b", None, None),
        ]);
        let sig = compute_signature(&a);
        assert!(sig.median_time.is_none());
        assert!(sig.centroid_location.is_none());
    }

    #[test]
    fn test_centroid_is_arithmetic_mean() {
        let a = album(vec![
            item("a", None, Some(GeoPoint { lat: 60.0, lon: 5.0 })),
            item("b", None, Some(GeoPoint { lat: 61.0, lon: 6.0 })),
            item("c", Some(at(12, 0)), None),
        ]);
        let sig = compute_signature(&a);
        let c = sig.centroid_location.unwrap();
        assert!((c.lat - 60.5).abs() < 1e-9);
        assert!((c.lon - 5.5).abs() < 1e-9);
        // the dated-but-unlocated item still feeds the median
        assert_eq!(sig.median_time, Some(at(12, 0)));
    }

    #[test]
    fn test_empty_album() {
        let sig = compute_signature(&album(vec![]));
        assert!(sig.median_time.is_none());
        assert!(sig.centroid_location.is_none());
    }
}
