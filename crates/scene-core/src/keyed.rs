//! Single-instance slot that is rebuilt whenever its key changes.

/// Holds at most one `T` built for key `K`.
///
/// Asking for a different key drops the current instance before the builder
/// runs, so at most one instance is ever alive. A failed build leaves the slot
/// empty and the next request retries.
#[derive(Debug)]
pub struct KeyedSlot<K, T> {
    current: Option<(K, T)>,
}

impl<K, T> Default for KeyedSlot<K, T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq + Clone, T> KeyedSlot<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&K> {
        self.current.as_ref().map(|(k, _)| k)
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, v)| v)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut().map(|(_, v)| v)
    }

    pub fn is_current(&self, key: &K) -> bool {
        self.key() == Some(key)
    }

    /// Return the instance for `key`, rebuilding it if the key changed.
    pub fn get_or_rebuild<E>(
        &mut self,
        key: &K,
        build: impl FnOnce(&K) -> Result<T, E>,
    ) -> Result<&mut T, E> {
        let (_, value) = match self.current.take() {
            Some(entry) if entry.0 == *key => self.current.insert(entry),
            stale => {
                drop(stale);
                let built = build(key)?;
                self.current.insert((key.clone(), built))
            }
        };
        Ok(value)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    struct Tracked(Rc<Cell<u32>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn same_key_builds_once() {
        let mut slot: KeyedSlot<u32, u32> = KeyedSlot::new();
        let mut builds = 0;
        for _ in 0..5 {
            slot.get_or_rebuild(&7, |_| {
                builds += 1;
                Ok::<_, Infallible>(1)
            })
            .unwrap();
        }
        assert_eq!(builds, 1);
    }

    #[test]
    fn new_key_drops_the_old_instance_first() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = KeyedSlot::new();
        slot.get_or_rebuild(&"a", |_| Ok::<_, Infallible>(Tracked(drops.clone())))
            .unwrap();
        assert_eq!(drops.get(), 0);
        let seen = drops.clone();
        slot.get_or_rebuild(&"b", move |_| {
            assert_eq!(seen.get(), 1, "old instance must be gone before rebuilding");
            Ok::<_, Infallible>(Tracked(seen.clone()))
        })
        .unwrap();
        assert_eq!(slot.key(), Some(&"b"));
    }

    #[test]
    fn clear_drops_the_held_instance() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = KeyedSlot::new();
        slot.get_or_rebuild(&("/a.glb", 1u64), |_| {
            Ok::<_, Infallible>(Tracked(drops.clone()))
        })
        .unwrap();
        slot.clear();
        assert_eq!(drops.get(), 1);
        assert!(slot.get().is_none());
        assert_eq!(slot.key(), None);
    }

    #[test]
    fn failed_build_leaves_slot_empty() {
        let mut slot: KeyedSlot<u8, u8> = KeyedSlot::new();
        slot.get_or_rebuild(&1, |_| Ok::<_, ()>(1)).unwrap();
        assert!(slot.get_or_rebuild(&2, |_| Err(())).is_err());
        assert!(slot.get().is_none());
        assert_eq!(*slot.get_or_rebuild(&2, |_| Ok::<_, ()>(9)).unwrap(), 9);
    }
}
