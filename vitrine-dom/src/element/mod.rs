mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Child-index path from `root` to the element with the given ID.
///
/// The root itself has an empty path.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<usize>> {
    if root.id == id {
        return Some(Vec::new());
    }

    for (index, child) in root.content.children().iter().enumerate() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, index);
            return Some(path);
        }
    }

    None
}

/// Follow a child-index path produced by [`path_to`].
pub fn element_at_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path {
        current = match &mut current.content {
            Content::Children(children) => children.get_mut(index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Visit `root` and every descendant in document order.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.content.children() {
        walk(child, visit);
    }
}
