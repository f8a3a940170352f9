//! Tracked handles for timers and listeners
//!
//! Every timeout, animation frame and event listener a component registers is
//! kept in a [`HandleSet`]. Detaching the component (or dropping the set)
//! tears all of them down, so re-creating a component never leaves the old
//! callbacks running.

/// A registered resource that can be cancelled
pub trait Teardown {
    fn teardown(self);
}

/// Keyed collection of live handles
pub struct HandleSet<K, H: Teardown> {
    handles: Vec<(K, H)>,
}

impl<K, H: Teardown> HandleSet<K, H> {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Tear down every handle
    pub fn teardown_all(&mut self) {
        for (_, handle) in self.handles.drain(..) {
            handle.teardown();
        }
    }
}

impl<K: PartialEq, H: Teardown> HandleSet<K, H> {
    /// Register a handle, tearing down any previous handle under `key`
    pub fn insert(&mut self, key: K, handle: H) {
        self.cancel(&key);
        self.handles.push((key, handle));
    }

    /// Tear down the handle under `key`. Returns false if there was none.
    pub fn cancel(&mut self, key: &K) -> bool {
        match self.take(key) {
            Some(handle) => {
                handle.teardown();
                true
            }
            None => false,
        }
    }

    /// Remove the handle under `key` without tearing it down (it already fired)
    pub fn take(&mut self, key: &K) -> Option<H> {
        let index = self.handles.iter().position(|(k, _)| k == key)?;
        Some(self.handles.remove(index).1)
    }
}

impl<K, H: Teardown> Default for HandleSet<K, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, H: Teardown> Drop for HandleSet<K, H> {
    fn drop(&mut self) {
        self.teardown_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Teardown for Recorder {
        fn teardown(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn recorder(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Recorder {
        Recorder {
            id,
            log: log.clone(),
        }
    }

    #[test]
    fn test_insert_replaces_and_tears_down() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = HandleSet::new();

        set.insert("scroll", recorder(1, &log));
        set.insert("scroll", recorder(2, &log));

        assert_eq!(set.len(), 1);
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_cancel_and_take() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = HandleSet::new();
        set.insert("a", recorder(1, &log));
        set.insert("b", recorder(2, &log));

        assert!(set.cancel(&"a"));
        assert!(!set.cancel(&"a"));

        let taken = set.take(&"b");
        assert!(taken.is_some());
        assert!(set.is_empty());
        // Taken handles are not torn down by the set
        assert_eq!(*log.borrow(), vec![1]);
    }

    #[test]
    fn test_teardown_all() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = HandleSet::new();
        set.insert(1, recorder(10, &log));
        set.insert(2, recorder(20, &log));

        set.teardown_all();
        assert!(set.is_empty());
        assert_eq!(*log.borrow(), vec![10, 20]);
    }

    #[test]
    fn test_drop_tears_down_remaining() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut set = HandleSet::new();
            set.insert("wheel", recorder(7, &log));
            assert_eq!(set.len(), 1);
        }
        assert_eq!(*log.borrow(), vec![7]);
    }
}
