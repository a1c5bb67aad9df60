use tracing::debug;

use crate::media::MediaItem;
use crate::score::score_media;
use crate::signature::{compute_signature, AlbumSignature};
use crate::title::UNSORTED_TITLE;
use crate::trip::Album;
use crate::SortConfig;

/// Outcome of the assignment pass: the working album list (originals plus
/// clusters created this run) and counters for the run report.
#[derive(Debug)]
pub struct AssignOutcome {
    pub albums: Vec<Album>,
    /// Id of the default album, captured before any media moved.
    pub default_id: Option<String>,
    pub pool_size: u64,
    pub routed_to_default: u64,
    pub clusters_created: u64,
}

/// One greedy left-to-right pass over the flattened media pool.
///
/// Albums must be non-empty (checked by the caller). Seed signatures are
/// computed once per album before any media moves; the signature list stays
/// aligned by position with the album list for the whole pass, with one
/// entry appended per cluster created. Earlier assignments are never
/// revisited.
pub fn assign_pool(mut albums: Vec<Album>, default_album: Option<&str>, config: &SortConfig) -> AssignOutcome {
    // The default album is the one the trip names, else the first.
    let default_index = default_album
        .and_then(|id| albums.iter().position(|a| a.id.as_deref() == Some(id)))
        .unwrap_or(0);
    let default_id = albums[default_index].id.clone();

    let mut signatures: Vec<AlbumSignature> = albums.iter().map(compute_signature).collect();

    // Flatten in album order, media order; albums keep their metadata but
    // start the pass empty.
    let mut pool: Vec<MediaItem> = Vec::new();
    for album in albums.iter_mut() {
        pool.append(&mut album.media);
    }

    let pool_size = pool.len() as u64;
    let mut routed_to_default = 0u64;
    let mut clusters_created = 0u64;

    for item in pool {
        if item.is_signal_free() {
            // Nothing to score on: straight to the catch-all.
            albums[default_index].media.push(item);
            routed_to_default += 1;
            continue;
        }

        // Strictly-greatest score wins; on ties the first-seen signature
        // keeps the item. Order-sensitive but deterministic.
        let mut best: Option<(usize, u8)> = None;
        for (index, signature) in signatures.iter().enumerate() {
            let score = score_media(&item, signature, config);
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        match best {
            Some((index, _)) => {
                albums[index].media.push(item);
                signatures[index] = compute_signature(&albums[index]);
            }
            None => {
                let album = Album {
                    id: None,
                    title: Some(UNSORTED_TITLE.to_string()),
                    description: None,
                    media: vec![item],
                };
                signatures.push(compute_signature(&album));
                albums.push(album);
                clusters_created += 1;
            }
        }
    }

    debug!(pool_size, routed_to_default, clusters_created, "assignment pass complete");

    AssignOutcome {
        albums,
        default_id,
        pool_size,
        routed_to_default,
        clusters_created,
    }
}
