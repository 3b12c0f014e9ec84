//! Projection-kind selection and change broadcast.
//!
//! The manager owns the rule for which camera representation is
//! authoritative for rendering and raycasting; the façade (and any external
//! observers) react to its change notifications.

use std::fmt;

/// Which of the two camera representations is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Depth-scaled projection.
    Perspective,
    /// Depth-independent projection.
    Orthographic,
}

impl Projection {
    /// The other projection kind.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Perspective => f.write_str("perspective"),
            Self::Orthographic => f.write_str("orthographic"),
        }
    }
}

/// Callback invoked with the newly active projection kind.
pub type ProjectionObserver = Box<dyn FnMut(Projection)>;

/// Owns the current projection kind and broadcasts changes to observers.
pub struct ProjectionManager {
    current: Projection,
    observers: Vec<ProjectionObserver>,
}

impl ProjectionManager {
    /// Start in perspective projection with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Projection::Perspective,
            observers: Vec::new(),
        }
    }

    /// Currently active projection kind.
    #[must_use]
    pub fn current(&self) -> Projection {
        self.current
    }

    /// Register an observer for projection changes. Observers registered
    /// here fire after the kind has been updated.
    pub fn on_change(&mut self, observer: ProjectionObserver) {
        self.observers.push(observer);
    }

    /// Request a projection kind. Switching to the already-active kind is a
    /// no-op returning `false`; otherwise the kind flips, every observer is
    /// notified with the new kind, and `true` is returned.
    pub fn set(&mut self, kind: Projection) -> bool {
        if kind == self.current {
            return false;
        }
        self.current = kind;
        log::debug!("projection changed to {kind}");
        for observer in &mut self.observers {
            observer(kind);
        }
        true
    }

    /// Flip to the other projection kind, returning the new kind.
    pub fn toggle(&mut self) -> Projection {
        let next = self.current.other();
        let _changed = self.set(next);
        next
    }
}

impl Default for ProjectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn starts_perspective() {
        let manager = ProjectionManager::new();
        assert_eq!(manager.current(), Projection::Perspective);
    }

    #[test]
    fn set_same_kind_is_silent_noop() {
        let mut manager = ProjectionManager::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        manager.on_change(Box::new(move |kind| sink.borrow_mut().push(kind)));

        assert!(!manager.set(Projection::Perspective));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_new_kind_notifies_observers() {
        let mut manager = ProjectionManager::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        manager.on_change(Box::new(move |kind| sink.borrow_mut().push(kind)));

        assert!(manager.set(Projection::Orthographic));
        assert_eq!(manager.current(), Projection::Orthographic);
        assert_eq!(*seen.borrow(), vec![Projection::Orthographic]);
    }

    #[test]
    fn toggle_alternates() {
        let mut manager = ProjectionManager::new();
        assert_eq!(manager.toggle(), Projection::Orthographic);
        assert_eq!(manager.toggle(), Projection::Perspective);
    }
}
