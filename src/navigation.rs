//! Route stack for screen navigation.

use serde::Serialize;

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Index,
}

/// Navigation stack rooted at [`Route::Index`].
///
/// The root route is never popped; `back()` at the root is a no-op.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Creates a navigator with `Index` as the root route.
    pub fn new() -> Self {
        Navigator {
            stack: vec![Route::Index],
        }
    }

    /// The route currently at the top of the stack.
    pub fn current(&self) -> Route {
        // The stack is never empty: new() seeds it and back() guards depth 1.
        *self.stack.last().unwrap_or(&Route::Index)
    }

    /// Pushes a new route.
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops the top route. Does nothing if only the root remains.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Replaces the top route without growing the stack.
    pub fn replace(&mut self, route: Route) {
        if let Some(top) = self.stack.last_mut() {
            *top = route;
        }
    }

    /// Number of entries currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_index() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Route::Index);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new();
        nav.push(Route::Index);
        assert_eq!(nav.depth(), 2);
        nav.back();
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        nav.back();
        assert_eq!(nav.current(), Route::Index);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut nav = Navigator::new();
        nav.replace(Route::Index);
        assert_eq!(nav.depth(), 1);
    }
}
