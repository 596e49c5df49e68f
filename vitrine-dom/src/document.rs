//! The document: an element tree plus the window state around it.

use crate::element::{element_at_mut, find_element, path_to, walk, Element};

/// How a requested window scroll should be animated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// A window scroll requested by the page, to be carried out by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: i32,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    scroll_y: i32,
    viewport_height: i32,
    scroll_request: Option<ScrollRequest>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            scroll_y: 0,
            viewport_height: 800,
            scroll_request: None,
        }
    }

    pub fn with_viewport(mut self, viewport_height: i32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        let path = path_to(&self.root, id)?;
        element_at_mut(&mut self.root, &path)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn parent_id(&self, id: &str) -> Option<String> {
        let mut path = path_to(&self.root, id)?;
        path.pop()?;
        let mut current = &self.root;
        for index in path {
            current = current.content.children().get(index)?;
        }
        Some(current.id.clone())
    }

    /// Whether `id` is `ancestor` itself or one of its descendants.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        self.get(ancestor)
            .is_some_and(|element| find_element(element, id).is_some())
    }

    /// IDs of `from` and its ancestors, innermost first.
    pub fn ancestry(&self, from: &str) -> Vec<String> {
        let Some(path) = path_to(&self.root, from) else {
            return Vec::new();
        };

        let mut chain = vec![self.root.id.clone()];
        let mut current = &self.root;
        for index in path {
            match current.content.children().get(index) {
                Some(child) => {
                    chain.push(child.id.clone());
                    current = child;
                }
                None => break,
            }
        }
        chain.reverse();
        chain
    }

    /// The closest element, starting at `from` and walking up, that matches.
    pub fn closest(&self, from: &str, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.ancestry(from)
            .iter()
            .filter_map(|id| self.get(id))
            .find(|element| predicate(element))
    }

    /// IDs of every element under `ancestor` (inclusive) matching `predicate`, in document order.
    pub fn select(&self, ancestor: &str, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
        let Some(scope) = self.get(ancestor) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        walk(scope, &mut |element| {
            if predicate(element) {
                ids.push(element.id.clone());
            }
        });
        ids
    }

    /// IDs of every element in the document carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<String> {
        let root = self.root.id.clone();
        self.select(&root, |element| element.has_class(class))
    }

    pub fn first_with_class(&self, class: &str) -> Option<String> {
        self.with_class(class).into_iter().next()
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Insert `element` as the next sibling of `anchor`.
    ///
    /// Returns false if `anchor` is missing or is the root.
    pub fn insert_after(&mut self, anchor: &str, element: Element) -> bool {
        let Some(mut path) = path_to(&self.root, anchor) else {
            return false;
        };
        let Some(index) = path.pop() else {
            return false;
        };
        match element_at_mut(&mut self.root, &path) {
            Some(parent) => {
                parent.content.children_mut().insert(index + 1, element);
                true
            }
            None => false,
        }
    }

    /// Append `element` as the last child of `parent`.
    pub fn append_child(&mut self, parent: &str, element: Element) -> bool {
        match self.get_mut(parent) {
            Some(parent) => {
                parent.content.children_mut().push(element);
                true
            }
            None => false,
        }
    }

    /// Detach an element (and its subtree). The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let mut path = path_to(&self.root, id)?;
        let index = path.pop()?;
        let parent = element_at_mut(&mut self.root, &path)?;
        let children = parent.content.children_mut();
        if index < children.len() {
            Some(children.remove(index))
        } else {
            None
        }
    }

    /// Set the value of a form control. Returns false if the element is missing.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.value = value.into();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Window
    // ------------------------------------------------------------------------

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: i32) {
        self.scroll_y = y;
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height;
    }

    /// Ask the host to scroll the window. A later request replaces an unserved one.
    pub fn scroll_to(&mut self, top: i32, behavior: ScrollBehavior) {
        log::trace!("scroll requested to {top} ({behavior:?})");
        self.scroll_request = Some(ScrollRequest { top, behavior });
    }

    /// Take the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }
}
