//! Arena holding every [`MenuItem`] of a menu bar.
//!
//! Nodes refer to each other by [`NodeId`]; the arena is the only owner.
//! Construction, layout and open/close cascades walk the tree with explicit
//! stacks, so arbitrarily deep option paths cannot exhaust the call stack.

use std::collections::HashMap;

use tabmenu_core::prelude::*;
use tabmenu_core::{tagged_width_i32, MenuOption, Orientation, Rectangle};

use super::item::{MenuItem, NodeId};

#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    nodes: Vec<MenuItem>,
    roots: Vec<NodeId>,
}

impl MenuTree {
    /// Build the forest from a flat option list.
    ///
    /// Options without a dot become top-level items whose children stack
    /// vertically; deeper levels cascade horizontally. An option is attached
    /// to the first option (in list order) whose structure equals its own
    /// minus the last path segment. Options whose parent path is missing are
    /// dropped, together with anything below them. Sibling order follows
    /// the option list.
    pub fn build(options: &[MenuOption]) -> Self {
        // Stable sort: parents are created before children, and siblings
        // keep their list order.
        let mut ordered: Vec<&MenuOption> = options.iter().collect();
        ordered.sort_by_key(|option| option.depth());

        let mut tree = MenuTree::default();
        let mut by_structure: HashMap<&str, NodeId> = HashMap::new();

        for option in ordered {
            let parent = match option.parent_structure() {
                None => None,
                Some(parent_structure) => match by_structure.get(parent_structure) {
                    Some(&id) => Some(id),
                    None => {
                        warn!(
                            "Dropping menu option '{}' ({}): no parent '{}'",
                            option.id, option.structure, parent_structure
                        );
                        continue;
                    }
                },
            };

            let orientation = if parent.is_none() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };

            let id = NodeId(tree.nodes.len());
            tree.nodes.push(MenuItem::new(option.clone(), orientation, parent));
            match parent {
                Some(parent) => tree.nodes[parent.0].children.push(id),
                None => tree.roots.push(id),
            }
            by_structure.entry(option.structure.as_str()).or_insert(id);
        }

        debug!(
            "Built menu tree: {} items, {} top-level",
            tree.nodes.len(),
            tree.roots.len()
        );
        tree
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    /// If `id` does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &MenuItem {
        &self.nodes[id.0]
    }

    /// # Panics
    /// If `id` does not belong to this tree.
    pub fn get_mut(&mut self, id: NodeId) -> &mut MenuItem {
        &mut self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MenuItem)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// First node whose option id is `option_id`.
    pub fn find(&self, option_id: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.option().id == option_id)
            .map(|(id, _)| id)
    }

    /// True while any submenu chain is open.
    pub fn any_open(&self) -> bool {
        self.nodes.iter().any(MenuItem::is_open)
    }

    /// Width of the widest child's display text, or 0 for a leaf.
    pub fn widest_child_width(&self, id: NodeId, indicator: &str) -> i32 {
        self.get(id)
            .children()
            .iter()
            .map(|&child| tagged_width_i32(&self.get(child).display_text(indicator)))
            .max()
            .unwrap_or(0)
    }

    /// Recompute the rectangles of every open descendant of `id`.
    ///
    /// Closed or childless nodes are left alone. All children of one node
    /// share the width `widest child + 1`; vertical children stack below the
    /// parent, horizontal children start at the parent's right edge.
    pub fn update_children_location(&mut self, id: NodeId, indicator: &str) {
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let node = self.get(current);
            if !node.is_open() || !node.has_children() {
                continue;
            }

            let parent_rect = node.rect();
            let orientation = node.children_orientation();
            let width = self.widest_child_width(current, indicator) + 1;

            for i in 0..self.get(current).children.len() {
                let child = self.get(current).children[i];
                let row = i as i32;
                let rect = match orientation {
                    Orientation::Vertical => {
                        Rectangle::new(parent_rect.x, parent_rect.y + row + 1, width, 1)
                    }
                    Orientation::Horizontal => {
                        Rectangle::new(parent_rect.right(), parent_rect.y + row, width, 1)
                    }
                };
                self.get_mut(child).set_rect(rect);
                stack.push(child);
            }
        }
    }

    /// True if `focused` is `id` or one of its descendants.
    pub fn is_focused(&self, id: NodeId, focused: Option<NodeId>) -> bool {
        let mut current = focused;
        while let Some(node) = current {
            if node == id {
                return true;
            }
            current = self.get(node).parent();
        }
        false
    }

    pub(crate) fn set_open(&mut self, id: NodeId) {
        self.get_mut(id).is_open = true;
    }

    /// Close `id` and everything below it.
    pub fn close(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get_mut(current);
            node.is_open = false;
            stack.extend_from_slice(&node.children);
        }
    }

    pub fn close_all(&mut self) {
        for i in 0..self.roots.len() {
            self.close(self.roots[i]);
        }
    }
}
