//! Mesh asset cache with pending/loaded/failed entries.
//!
//! Loads are asynchronous and never cancelled. Each request gets a ticket;
//! a completion whose ticket no longer matches the entry (because the asset
//! was evicted, or evicted and requested again) is dropped.

use crate::controller::AssetCache;
use crate::error::CacheError;
use crate::mesh::MeshData;
use fnv::FnvHashMap;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum CacheEntry {
    Pending { ticket: u64 },
    /// `generation` changes every time the asset is (re)loaded.
    Loaded { generation: u64, mesh: Rc<MeshData> },
    Failed { reason: String },
}

#[derive(Debug, Default)]
pub struct MeshCache {
    entries: FnvHashMap<String, CacheEntry>,
    next_ticket: u64,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, asset: &str) -> Option<&CacheEntry> {
        self.entries.get(asset)
    }

    pub fn loaded(&self, asset: &str) -> Option<(u64, Rc<MeshData>)> {
        match self.entries.get(asset) {
            Some(CacheEntry::Loaded { generation, mesh }) => Some((*generation, mesh.clone())),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark `asset` as pending if it has no entry yet.
    ///
    /// Returns the ticket the caller must hand back to [`MeshCache::complete`],
    /// or `None` when the asset is already pending, loaded or failed.
    pub fn request(&mut self, asset: &str) -> Option<u64> {
        if self.entries.contains_key(asset) {
            return None;
        }
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.entries
            .insert(asset.to_string(), CacheEntry::Pending { ticket });
        Some(ticket)
    }

    /// Store the outcome of a load. Returns `false` if the result was stale.
    pub fn complete(&mut self, asset: &str, ticket: u64, result: Result<MeshData, String>) -> bool {
        let current = match self.entries.get_mut(asset) {
            Some(entry) if matches!(&*entry, CacheEntry::Pending { ticket: t } if *t == ticket) => {
                entry
            }
            _ => {
                log::debug!("[cache] dropping stale load of {}", asset);
                return false;
            }
        };
        *current = match result {
            Ok(mesh) => CacheEntry::Loaded {
                generation: ticket,
                mesh: Rc::new(mesh),
            },
            Err(reason) => CacheEntry::Failed { reason },
        };
        true
    }
}

impl AssetCache for MeshCache {
    fn evict(&mut self, asset: &str) -> Result<(), CacheError> {
        self.entries
            .remove(asset)
            .map(|_| ())
            .ok_or_else(|| CacheError::NotCached(asset.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_issued_once() {
        let mut c = MeshCache::new();
        assert!(c.request("/a.glb").is_some());
        assert!(c.request("/a.glb").is_none());
        assert!(matches!(c.entry("/a.glb"), Some(CacheEntry::Pending { .. })));
    }

    #[test]
    fn completion_fills_the_entry() {
        let mut c = MeshCache::new();
        let t = c.request("/a.glb").unwrap();
        assert!(c.complete("/a.glb", t, Ok(MeshData::default())));
        assert_eq!(c.loaded("/a.glb").map(|(g, _)| g), Some(t));
    }

    #[test]
    fn evicted_load_is_discarded() {
        let mut c = MeshCache::new();
        let t = c.request("/a.glb").unwrap();
        c.evict("/a.glb").unwrap();
        assert!(!c.complete("/a.glb", t, Ok(MeshData::default())));
        assert!(c.is_empty());
    }

    #[test]
    fn old_ticket_cannot_fill_a_new_request() {
        let mut c = MeshCache::new();
        let old = c.request("/a.glb").unwrap();
        c.evict("/a.glb").unwrap();
        let new = c.request("/a.glb").unwrap();
        assert_ne!(old, new);
        assert!(!c.complete("/a.glb", old, Ok(MeshData::default())));
        assert!(c.complete("/a.glb", new, Err("404".into())));
        assert!(matches!(c.entry("/a.glb"), Some(CacheEntry::Failed { .. })));
    }

    #[test]
    fn evicting_unknown_asset_fails() {
        let mut c = MeshCache::new();
        assert_eq!(
            c.evict("/nope.glb"),
            Err(CacheError::NotCached("/nope.glb".into()))
        );
    }
}
