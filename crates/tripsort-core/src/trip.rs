use serde::{Deserialize, Serialize};

use crate::media::MediaItem;

/// A mutable working bucket of media. `id == None` marks an album created by
/// the sorter that has not been persisted yet; existing ids are preserved so
/// the caller can reconcile the output with stored albums.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// A trip with its albums. `id` and `name` are pass-through fields for the
/// caller's benefit; the sorter never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Id of the designated catch-all album
    #[serde(default)]
    pub default_album: Option<String>,
    #[serde(default)]
    pub albums: Vec<Album>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_json_field_names() {
        let json = r#"{
            "id": "trip-1",
            "name": "Norway 2024",
            "defaultAlbum": "alb-0",
            "albums": [
                {
                    "id": "alb-0",
                    "title": "Unsorted",
                    "description": null,
                    "media": [
                        {
                            "pathUrl": "s3://b/a.jpg",
                            "uploader": "ada",
                            "fileType": "photo",
                            "fileFormat": "jpeg",
                            "fileSize": 2048,
                            "geoLocation": {"lat": 60.3913, "lon": 5.3221},
                            "createdAt": "2024-06-01T12:00:00Z"
                        }
                    ]
                }
            ]
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.default_album.as_deref(), Some("alb-0"));
        assert_eq!(trip.albums.len(), 1);
        let m = &trip.albums[0].media[0];
        assert_eq!(m.path_url, "s3://b/a.jpg");
        assert!(m.capture_time().is_some());
        assert!(m.capture_location().is_some());
    }

    #[test]
    fn test_album_media_defaults_empty() {
        let trip: Trip = serde_json::from_str(r#"{"albums": [{"id": "a", "title": null, "description": null}]}"#).unwrap();
        assert!(trip.albums[0].media.is_empty());
        assert!(trip.default_album.is_none());
    }
}
