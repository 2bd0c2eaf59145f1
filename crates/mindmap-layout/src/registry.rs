//! Registry of layout algorithms.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use mindmap_core::MindTree;

/// A layout strategy that places every node in the plane.
///
/// `init` runs once per layout pass, after every node has been sized. It
/// may read the whole tree and is solely responsible for writing node
/// positions.
pub trait LayoutAlgorithm: Send + Sync {
    fn init(&self, tree: &mut MindTree);
}

impl<F> LayoutAlgorithm for F
where
    F: Fn(&mut MindTree) + Send + Sync,
{
    fn init(&self, tree: &mut MindTree) {
        self(tree)
    }
}

/// Layout algorithms keyed by name.
///
/// Filled once at startup and shared read-only between trees.
#[derive(Clone, Default)]
pub struct LayoutRegistry {
    algorithms: IndexMap<String, Arc<dyn LayoutAlgorithm>>,
}

impl LayoutRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an algorithm. A later registration under the same name wins.
    pub fn register<A: LayoutAlgorithm + 'static>(&mut self, name: impl Into<String>, algorithm: A) {
        self.register_shared(name, Arc::new(algorithm));
    }

    /// Register an algorithm that is already shared.
    pub fn register_shared(&mut self, name: impl Into<String>, algorithm: Arc<dyn LayoutAlgorithm>) {
        self.algorithms.insert(name.into(), algorithm);
    }

    /// Get an algorithm by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn LayoutAlgorithm>> {
        self.algorithms.get(name).cloned()
    }

    /// Check if an algorithm exists.
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Get all algorithm names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.algorithms.keys().map(String::as_str)
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRegistry")
            .field("algorithms", &self.algorithms.keys().collect::<Vec<_>>())
            .finish()
    }
}
