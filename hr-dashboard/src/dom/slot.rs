/// Holds the current mount. Each mount gets a generation number so a stale
/// handle cannot tear down a newer mount.
#[derive(Debug)]
pub struct MountSlot<T> {
    current: Option<(u32, T)>,
    next: u32,
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MountSlot<T> {
    pub const fn new() -> Self {
        Self {
            current: None,
            next: 0,
        }
    }

    /// Store `value`, returning its generation and the mount it replaced.
    pub fn replace(&mut self, value: T) -> (u32, Option<T>) {
        let generation = self.next;
        self.next = self.next.wrapping_add(1);
        let previous = self.current.replace((generation, value)).map(|(_, v)| v);
        (generation, previous)
    }

    /// Take the mount out if it is still `generation`.
    pub fn take(&mut self, generation: u32) -> Option<T> {
        if self.get(generation).is_none() {
            return None;
        }
        self.current.take().map(|(_, v)| v)
    }

    pub fn get(&self, generation: u32) -> Option<&T> {
        match &self.current {
            Some((current, value)) if *current == generation => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Stands in for installed listeners: counts how often it is torn down.
    struct Mounted(Rc<Cell<usize>>);

    impl Drop for Mounted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_mount_outlives_handles() {
        let removed = Rc::new(Cell::new(0));
        let mut slot = MountSlot::new();

        let (generation, previous) = slot.replace(Mounted(removed.clone()));
        assert!(previous.is_none());
        assert!(slot.get(generation).is_some());
        assert_eq!(removed.get(), 0);
    }

    #[test]
    fn test_remount_replaces_previous() {
        let removed = Rc::new(Cell::new(0));
        let mut slot = MountSlot::new();

        let (first, _) = slot.replace(Mounted(removed.clone()));
        let (second, previous) = slot.replace(Mounted(removed.clone()));
        drop(previous);

        assert_eq!(removed.get(), 1);
        assert!(slot.get(first).is_none());
        assert!(slot.get(second).is_some());
    }

    #[test]
    fn test_take_only_matching_generation() {
        let removed = Rc::new(Cell::new(0));
        let mut slot = MountSlot::new();

        let (first, _) = slot.replace(Mounted(removed.clone()));
        let (second, previous) = slot.replace(Mounted(removed.clone()));
        drop(previous);

        assert!(slot.take(first).is_none());
        assert!(slot.get(second).is_some());

        drop(slot.take(second));
        assert_eq!(removed.get(), 2);
        assert!(slot.take(second).is_none());
    }
}
