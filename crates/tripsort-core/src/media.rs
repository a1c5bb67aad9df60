use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// (0, 0) is the upstream "coordinates unknown" sentinel. Known
    /// limitation: genuine null-island media are also treated as unknown.
    pub fn is_unknown(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

/// A single photo or video. Owned by whichever album currently lists it;
/// ownership moves between albums during a sort, it is never copied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Unique reference to the stored file
    pub path_url: String,
    /// Uploading user
    pub uploader: String,
    /// Coarse kind, e.g. "photo" or "video"
    pub file_type: String,
    /// Encoding format, e.g. "jpeg" or "mp4"
    pub file_format: String,
    /// Size in bytes
    pub file_size: u64,
    /// Capture location; (0, 0) means unknown
    pub geo_location: Option<GeoPoint>,
    /// Capture time; the epoch means unknown
    pub created_at: Option<DateTime<Utc>>,
}

impl MediaItem {
    /// Capture time, if present and not the epoch sentinel.
    pub fn capture_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.filter(|t| *t != DateTime::UNIX_EPOCH)
    }

    /// Capture location, if present and not the unknown sentinel.
    pub fn capture_location(&self) -> Option<GeoPoint> {
        self.geo_location.filter(|g| !g.is_unknown())
    }

    /// Whether the item carries no usable signal on either axis.
    pub fn is_signal_free(&self) -> bool {
        self.capture_time().is_none() && self.capture_location().is_none()
    }
}
