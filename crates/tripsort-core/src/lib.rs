pub mod cluster;
pub mod error;
pub mod geo;
pub mod media;
pub mod merge;
pub mod score;
pub mod signature;
pub mod title;
pub mod trip;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use error::SortError;
pub use media::{GeoPoint, MediaItem};
pub use signature::{compute_signature, AlbumSignature};
pub use trip::{Album, Trip};

fn default_match_time_window() -> i64 {
    90
}

fn default_match_geo_radius() -> f64 {
    250.0
}

fn default_merge_time_window() -> i64 {
    180
}

fn default_merge_geo_radius() -> f64 {
    500.0
}

/// Matching and merging thresholds. Process-wide constants in the current
/// design, carried as a struct so the recognized options stay in one place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    /// How far a media item's capture time may sit from a cluster's median
    /// and still match, in minutes
    #[serde(default = "default_match_time_window")]
    pub match_time_window_minutes: i64,
    /// How far a media item may sit from a cluster's centroid and still
    /// match, in meters
    #[serde(default = "default_match_geo_radius")]
    pub match_geo_radius_meters: f64,
    /// Looser time window under which two finished clusters merge, in minutes
    #[serde(default = "default_merge_time_window")]
    pub merge_time_window_minutes: i64,
    /// Looser radius under which two finished clusters merge, in meters
    #[serde(default = "default_merge_geo_radius")]
    pub merge_geo_radius_meters: f64,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            match_time_window_minutes: default_match_time_window(),
            match_geo_radius_meters: default_match_geo_radius(),
            merge_time_window_minutes: default_merge_time_window(),
            merge_geo_radius_meters: default_merge_geo_radius(),
        }
    }
}

/// Counters describing one autosort run. Observability plumbing only; never
/// feeds back into the algorithm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortReport {
    /// Media items flattened into the processing pool
    pub pool_size: u64,
    /// Items that carried neither timestamp nor location
    pub routed_to_default: u64,
    /// Clusters created because no existing album matched
    pub clusters_created: u64,
    /// Candidate clusters folded into a merge target
    pub clusters_merged: u64,
    /// Albums dropped at finalization for ending the run empty
    pub albums_dropped: u64,
}

/// Result of an autosort run: the re-sorted trip plus run counters.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    pub trip: Trip,
    pub report: SortReport,
}

/// Re-cluster a trip's media into coherent moments by capture time and
/// location, using the default thresholds.
pub fn auto_sort(trip: Trip) -> Result<Trip, SortError> {
    auto_sort_with_config(trip, &SortConfig::default()).map(|outcome| outcome.trip)
}

/// Re-cluster a trip's media with explicit thresholds, returning run
/// counters alongside the re-sorted trip.
///
/// Single-threaded and purely in-memory; the trip is taken by value, so a
/// run can never observe concurrent mutation. A trip with no albums has no
/// destination for unmatched media and is rejected.
pub fn auto_sort_with_config(trip: Trip, config: &SortConfig) -> Result<SortOutcome, SortError> {
    if trip.albums.is_empty() {
        return Err(SortError::NoDestinationAlbum);
    }

    let Trip {
        id,
        name,
        default_album,
        albums,
    } = trip;

    // Stage 1: flatten and greedily assign the pool
    let assigned = cluster::assign_pool(albums, default_album.as_deref(), config);

    // Stage 2: merge clusters that ended up near-duplicates
    let mut albums = assigned.albums;
    let clusters_merged = merge::merge_clusters(&mut albums, config);

    // Stage 3: drop empties, order media, synthesize titles
    let (albums, albums_dropped) = merge::finalize(albums, assigned.default_id.as_deref());

    let report = SortReport {
        pool_size: assigned.pool_size,
        routed_to_default: assigned.routed_to_default,
        clusters_created: assigned.clusters_created,
        clusters_merged,
        albums_dropped,
    };
    info!(
        pool_size = report.pool_size,
        routed_to_default = report.routed_to_default,
        clusters_created = report.clusters_created,
        clusters_merged = report.clusters_merged,
        albums_dropped = report.albums_dropped,
        "autosort complete"
    );

    Ok(SortOutcome {
        trip: Trip {
            id,
            name,
            default_album,
            albums,
        },
        report,
    })
}
