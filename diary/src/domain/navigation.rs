//! Navigation seam for the multi-step intake flow.
//!
//! Screens that are embedded as a step receive explicit continuations from
//! their host. Standalone screens fall back to a `Navigator`, which moves
//! between named routes of the larger flow.

use log::{debug, warn};

pub trait Navigator {
    /// Move forward to `route`
    fn push(&mut self, route: &str);

    /// Return to the previous route
    fn back(&mut self);
}

/// In-memory route stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowNavigator {
    stack: Vec<String>,
}

impl FlowNavigator {
    /// Start a flow at `initial_route`
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            stack: vec![initial_route.into()],
        }
    }

    pub fn current_route(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Routes from the first to the current one
    pub fn history(&self) -> &[String] {
        &self.stack
    }
}

impl Navigator for FlowNavigator {
    fn push(&mut self, route: &str) {
        debug!("🧭 push {}", route);
        self.stack.push(route.to_string());
    }

    fn back(&mut self) {
        if self.stack.len() <= 1 {
            warn!("🧭 back requested at the start of the flow; ignoring");
            return;
        }
        let left = self.stack.pop();
        debug!("🧭 back from {:?}", left);
    }
}
