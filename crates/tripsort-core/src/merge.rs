use chrono::DateTime;
use tracing::debug;

use crate::geo::haversine_distance;
use crate::signature::{compute_signature, AlbumSignature};
use crate::title::{is_generated_title, synthesize_title};
use crate::trip::Album;
use crate::SortConfig;

/// Merge clusters whose signatures agree on both axes within the looser
/// merge thresholds. Returns how many candidate clusters were folded into
/// targets.
///
/// For each target index the list to its right is scanned; after folding a
/// candidate in, the scan restarts at the same target (its signature just
/// changed), and the target only advances once no remaining candidate
/// merges. Signatures are recomputed fresh for every comparison.
pub fn merge_clusters(albums: &mut Vec<Album>, config: &SortConfig) -> u64 {
    let mut merged = 0u64;
    let mut target = 0;
    while target < albums.len() {
        let mut candidate = target + 1;
        while candidate < albums.len() {
            let target_sig = compute_signature(&albums[target]);
            let candidate_sig = compute_signature(&albums[candidate]);
            if should_merge(&target_sig, &candidate_sig, config) {
                let folded = albums.remove(candidate);
                fold_into(&mut albums[target], folded);
                merged += 1;
                candidate = target + 1;
            } else {
                candidate += 1;
            }
        }
        target += 1;
    }

    if merged > 0 {
        debug!(merged, remaining = albums.len(), "cluster merge pass complete");
    }
    merged
}

/// Whether two clusters are close enough to be one moment. Both clusters
/// must carry both axes; absence of either on either side means no merge.
fn should_merge(a: &AlbumSignature, b: &AlbumSignature, config: &SortConfig) -> bool {
    let (Some(time_a), Some(time_b)) = (a.median_time, b.median_time) else {
        return false;
    };
    let (Some(loc_a), Some(loc_b)) = (a.centroid_location, b.centroid_location) else {
        return false;
    };

    let minutes = (time_a - time_b).num_minutes().abs();
    let meters = haversine_distance(loc_a, loc_b);
    minutes <= config.merge_time_window_minutes && meters <= config.merge_geo_radius_meters
}

/// Fold a candidate cluster into the target: metadata first, then media.
fn fold_into(target: &mut Album, candidate: Album) {
    resolve_metadata(target, &candidate);
    target.media.extend(candidate.media);
}

/// Resolve title/description between a merge target and its candidate.
///
/// A user-authored candidate takes over a machine-titled target wholesale,
/// id included, so the persisted album survives the merge. Two user-authored
/// albums keep the target's title and join their differing descriptions. A
/// machine-titled candidate is simply absorbed.
fn resolve_metadata(target: &mut Album, candidate: &Album) {
    let target_generated = is_generated_title(target.title.as_deref());
    let candidate_generated = is_generated_title(candidate.title.as_deref());

    if target_generated && !candidate_generated {
        target.id = candidate.id.clone();
        target.title = candidate.title.clone();
        target.description = candidate.description.clone();
    } else if !target_generated && !candidate_generated && target.description != candidate.description {
        let parts: Vec<&str> = [target.description.as_deref(), candidate.description.as_deref()]
            .into_iter()
            .flatten()
            .filter(|d| !d.trim().is_empty())
            .collect();
        target.description = (!parts.is_empty()).then(|| parts.join(" | "));
    }
}

/// Drop empty non-default clusters, order each album's media, and synthesize
/// titles for clusters that still carry a machine title. Returns the kept
/// albums and how many were dropped.
pub fn finalize(albums: Vec<Album>, default_id: Option<&str>) -> (Vec<Album>, u64) {
    let before = albums.len();
    let mut kept: Vec<Album> = albums
        .into_iter()
        .filter(|a| !a.media.is_empty() || a.id.as_deref() == default_id)
        .collect();
    let dropped = (before - kept.len()) as u64;

    for album in kept.iter_mut() {
        // total order: missing timestamps sort as the epoch, paths break ties
        album.media.sort_by(|a, b| {
            let ta = a.created_at.unwrap_or(DateTime::UNIX_EPOCH);
            let tb = b.created_at.unwrap_or(DateTime::UNIX_EPOCH);
            ta.cmp(&tb).then_with(|| a.path_url.cmp(&b.path_url))
        });

        if is_generated_title(album.title.as_deref()) && !album.media.is_empty() {
            let signature = compute_signature(album);
            album.title = Some(synthesize_title(&signature));
        }
    }

    (kept, dropped)
}
