use crate::geo::haversine_distance;
use crate::media::MediaItem;
use crate::signature::AlbumSignature;
use crate::SortConfig;

/// Score for a match on both axes.
pub const SCORE_BOTH: u8 = 5;
/// Score for a geo-only match.
pub const SCORE_GEO: u8 = 3;
/// Score for a time-only match.
pub const SCORE_TIME: u8 = 2;

/// Score one media item against one cluster signature.
///
/// An axis takes part only when both the item and the signature carry it.
/// When both axes take part, exceeding either threshold disqualifies the
/// match entirely; there is no partial credit.
pub fn score_media(media: &MediaItem, signature: &AlbumSignature, config: &SortConfig) -> u8 {
    let minutes_apart = match (media.capture_time(), signature.median_time) {
        (Some(t), Some(median)) => Some((t - median).num_minutes().abs()),
        _ => None,
    };
    let meters_apart = match (media.capture_location(), signature.centroid_location) {
        (Some(p), Some(centroid)) => Some(haversine_distance(p, centroid)),
        _ => None,
    };

    match (minutes_apart, meters_apart) {
        (Some(minutes), Some(meters)) => {
            if minutes <= config.match_time_window_minutes && meters <= config.match_geo_radius_meters {
                SCORE_BOTH
            } else {
                0
            }
        }
        (Some(minutes), None) if minutes <= config.match_time_window_minutes => SCORE_TIME,
        (None, Some(meters)) if meters <= config.match_geo_radius_meters => SCORE_GEO,
        _ => 0,
    }
}
