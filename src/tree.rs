//! Lazy Location Tree
//!
//! State container for the on-demand loaded location hierarchy. Nodes start
//! collapsed and unloaded; expanding a container fetches its direct children
//! exactly once and caches them for the session. Collapsing never discards
//! loaded children.

use crate::models::{LocationType, TreeNode};

/// A location node plus its transient view state
#[derive(Debug, Clone, PartialEq)]
pub struct LazyNode {
    pub id: u32,
    pub name: String,
    pub location_type: LocationType,
    pub is_container: bool,
    /// Server-reported count, authoritative until children are loaded
    pub children_count: u32,
    pub needs_cleaning: bool,
    pub is_expanded: bool,
    pub is_loading: bool,
    pub has_loaded_children: bool,
    /// `None` = not yet fetched, `Some(vec![])` = fetched and empty
    pub children: Option<Vec<LazyNode>>,
}

impl From<TreeNode> for LazyNode {
    fn from(node: TreeNode) -> Self {
        // Any eagerly nested children from the server are dropped here;
        // the lazy contract loads one level at a time.
        Self {
            id: node.id,
            name: node.name,
            location_type: node.location_type,
            is_container: node.is_container,
            children_count: node.children_count,
            needs_cleaning: node.needs_cleaning,
            is_expanded: false,
            is_loading: false,
            has_loaded_children: false,
            children: None,
        }
    }
}

/// Shallow patch applied to exactly one node
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub is_expanded: Option<bool>,
    pub is_loading: Option<bool>,
    pub has_loaded_children: Option<bool>,
    pub children: Option<Vec<LazyNode>>,
}

impl NodePatch {
    fn apply(&self, node: &mut LazyNode) {
        if let Some(expanded) = self.is_expanded {
            node.is_expanded = expanded;
        }
        if let Some(loading) = self.is_loading {
            node.is_loading = loading;
        }
        if let Some(loaded) = self.has_loaded_children {
            node.has_loaded_children = loaded;
        }
        if let Some(children) = &self.children {
            node.children = Some(children.clone());
        }
    }
}

/// What a toggle on a given node should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Not a container, zero declared children, or a fetch is in flight
    Ignore,
    Collapse,
    /// Children already cached, expand without fetching
    Expand,
    /// Collapsed and unloaded: caller starts a child fetch
    Fetch,
}

/// Patch the node matching `id`, recreating every ancestor on the way down
/// so reference-based change detection sees the mutation.
pub fn update_node_in_tree(nodes: &[LazyNode], id: u32, patch: &NodePatch) -> Vec<LazyNode> {
    nodes
        .iter()
        .map(|node| {
            let mut updated = node.clone();
            if node.id == id {
                patch.apply(&mut updated);
            } else if let Some(children) = &node.children {
                updated.children = Some(update_node_in_tree(children, id, patch));
            }
            updated
        })
        .collect()
}

/// Depth-first lookup over the loaded forest
pub fn find_node(nodes: &[LazyNode], id: u32) -> Option<&LazyNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = &node.children {
            if let Some(found) = find_node(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// True when `target_id` is `root_id` itself or any of its loaded descendants.
///
/// Used to keep a location from being moved into its own subtree. Only loaded
/// descendants can be checked client-side; the server rejects cycles as well.
pub fn subtree_contains(nodes: &[LazyNode], root_id: u32, target_id: u32) -> bool {
    let Some(root) = find_node(nodes, root_id) else {
        return false;
    };
    fn contains(node: &LazyNode, target_id: u32) -> bool {
        if node.id == target_id {
            return true;
        }
        node.children
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .any(|child| contains(child, target_id))
    }
    contains(root, target_id)
}

/// Flatten the forest into `(node, depth)` rows in display order,
/// descending only into expanded nodes.
pub fn flatten_visible(nodes: &[LazyNode]) -> Vec<(LazyNode, usize)> {
    fn collect(nodes: &[LazyNode], depth: usize, result: &mut Vec<(LazyNode, usize)>) {
        for node in nodes {
            result.push((node.clone(), depth));
            if node.is_expanded {
                if let Some(children) = &node.children {
                    collect(children, depth + 1, result);
                }
            }
        }
    }
    let mut result = Vec::new();
    collect(nodes, 0, &mut result);
    result
}

/// The lazy tree state container: a forest of nodes plus a single selection.
///
/// All mutators go through [`update_node_in_tree`], so each transition only
/// ever rewrites the path to one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LazyTree {
    nodes: Vec<LazyNode>,
    selected: Option<u32>,
}

impl LazyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire forest. Nothing is fetched eagerly.
    pub fn initialize(&mut self, roots: Vec<TreeNode>) {
        self.nodes = roots.into_iter().map(LazyNode::from).collect();
    }

    pub fn nodes(&self) -> &[LazyNode] {
        &self.nodes
    }

    pub fn find(&self, id: u32) -> Option<&LazyNode> {
        find_node(&self.nodes, id)
    }

    /// Decide what toggling `id` should do. Pure, no state change.
    pub fn toggle_action(&self, id: u32) -> ToggleAction {
        let Some(node) = self.find(id) else {
            return ToggleAction::Ignore;
        };
        if !node.is_container || node.children_count == 0 {
            return ToggleAction::Ignore;
        }
        if node.is_expanded {
            ToggleAction::Collapse
        } else if node.has_loaded_children {
            ToggleAction::Expand
        } else if node.is_loading {
            // At most one outstanding fetch per node
            ToggleAction::Ignore
        } else {
            ToggleAction::Fetch
        }
    }

    pub fn collapse(&mut self, id: u32) {
        self.patch(
            id,
            NodePatch {
                is_expanded: Some(false),
                ..Default::default()
            },
        );
    }

    pub fn expand(&mut self, id: u32) {
        self.patch(
            id,
            NodePatch {
                is_expanded: Some(true),
                ..Default::default()
            },
        );
    }

    /// Mark a child fetch as in flight.
    pub fn begin_load(&mut self, id: u32) {
        self.patch(
            id,
            NodePatch {
                is_loading: Some(true),
                ..Default::default()
            },
        );
    }

    /// Attach fetched children in the order the server returned them and
    /// expand the node. No-op when the node was already loaded.
    pub fn attach_children(&mut self, id: u32, children: Vec<TreeNode>) {
        if self.find(id).map_or(true, |node| node.has_loaded_children) {
            return;
        }
        let children: Vec<LazyNode> = children.into_iter().map(LazyNode::from).collect();
        self.patch(
            id,
            NodePatch {
                is_expanded: Some(true),
                is_loading: Some(false),
                has_loaded_children: Some(true),
                children: Some(children),
            },
        );
    }

    /// Roll a failed fetch back to the pre-attempt state so the next toggle
    /// retries. The node is never treated as permanently empty.
    pub fn load_failed(&mut self, id: u32) {
        self.patch(
            id,
            NodePatch {
                is_loading: Some(false),
                is_expanded: Some(false),
                ..Default::default()
            },
        );
    }

    pub fn patch(&mut self, id: u32, patch: NodePatch) {
        self.nodes = update_node_in_tree(&self.nodes, id, &patch);
    }

    pub fn select(&mut self, id: Option<u32>) {
        self.selected = id;
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }
}

// ========================
// Selection predicates
// ========================

/// Every node is selectable (default)
pub fn selectable_any(_node: &LazyNode) -> bool {
    true
}

/// Only containers are selectable (parent pickers)
pub fn selectable_container(node: &LazyNode) -> bool {
    node.is_container
}

/// Valid move destination: a container outside the moving node's own subtree.
pub fn selectable_move_target(nodes: &[LazyNode], moving_id: u32, node: &LazyNode) -> bool {
    node.is_container && !subtree_contains(nodes, moving_id, node.id)
}

/// Injected selection-eligibility predicate, evaluated fresh on every render
/// against the current forest (never cached on the node).
pub type SelectFilter = std::rc::Rc<dyn Fn(&[LazyNode], &LazyNode) -> bool>;

pub fn filter_any() -> SelectFilter {
    std::rc::Rc::new(|_, node| selectable_any(node))
}

pub fn filter_containers() -> SelectFilter {
    std::rc::Rc::new(|_, node| selectable_container(node))
}

pub fn filter_move_target(moving_id: u32) -> SelectFilter {
    std::rc::Rc::new(move |nodes, node| selectable_move_target(nodes, moving_id, node))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(id: u32, is_container: bool, children_count: u32) -> TreeNode {
        TreeNode {
            id,
            name: format!("مکان {}", id),
            location_type: if is_container {
                LocationType::Box
            } else {
                LocationType::Item
            },
            is_container,
            children_count,
            needs_cleaning: false,
            children: None,
        }
    }

    fn tree_with_root() -> LazyTree {
        let mut tree = LazyTree::new();
        tree.initialize(vec![make_node(1, true, 2)]);
        tree
    }

    /// Drives the toggle flow the way the rendering layer does, with a
    /// canned fetch result. Returns how many fetches were issued.
    fn drive_toggle(tree: &mut LazyTree, id: u32, fetch: Result<Vec<TreeNode>, String>) -> u32 {
        match tree.toggle_action(id) {
            ToggleAction::Ignore => 0,
            ToggleAction::Collapse => {
                tree.collapse(id);
                0
            }
            ToggleAction::Expand => {
                tree.expand(id);
                0
            }
            ToggleAction::Fetch => {
                tree.begin_load(id);
                match fetch {
                    Ok(children) => tree.attach_children(id, children),
                    Err(_) => tree.load_failed(id),
                }
                1
            }
        }
    }

    #[test]
    fn initialize_starts_collapsed_and_unloaded() {
        let tree = tree_with_root();
        let node = tree.find(1).unwrap();
        assert!(!node.is_expanded);
        assert!(!node.is_loading);
        assert!(!node.has_loaded_children);
        assert_eq!(node.children, None);
    }

    #[test]
    fn expand_fetches_and_attaches_in_order() {
        let mut tree = tree_with_root();
        assert_eq!(tree.toggle_action(1), ToggleAction::Fetch);

        tree.begin_load(1);
        let pending = tree.find(1).unwrap();
        assert!(pending.is_loading);
        assert!(!pending.is_expanded);
        // A second toggle while the fetch is in flight does nothing
        assert_eq!(tree.toggle_action(1), ToggleAction::Ignore);

        tree.attach_children(1, vec![make_node(3, false, 0), make_node(2, true, 1)]);
        let node = tree.find(1).unwrap();
        assert!(node.is_expanded);
        assert!(node.has_loaded_children);
        assert!(!node.is_loading);
        let ids: Vec<u32> = node.children.as_ref().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn toggle_on_non_container_is_a_noop() {
        let mut tree = LazyTree::new();
        tree.initialize(vec![make_node(7, false, 0)]);
        let before = tree.clone();
        assert_eq!(drive_toggle(&mut tree, 7, Ok(vec![])), 0);
        assert_eq!(tree, before);
    }

    #[test]
    fn toggle_on_container_without_children_is_a_noop() {
        let mut tree = LazyTree::new();
        tree.initialize(vec![make_node(7, true, 0)]);
        assert_eq!(tree.toggle_action(7), ToggleAction::Ignore);
    }

    #[test]
    fn failed_fetch_restores_node_and_allows_retry() {
        let mut tree = tree_with_root();
        assert_eq!(drive_toggle(&mut tree, 1, Err("network".into())), 1);

        let node = tree.find(1).unwrap();
        assert!(!node.is_loading);
        assert!(!node.is_expanded);
        assert!(!node.has_loaded_children);
        assert_eq!(node.children, None);

        // The retry issues a fresh fetch
        assert_eq!(tree.toggle_action(1), ToggleAction::Fetch);
        assert_eq!(drive_toggle(&mut tree, 1, Ok(vec![make_node(2, false, 0)])), 1);
        assert!(tree.find(1).unwrap().has_loaded_children);
    }

    #[test]
    fn expand_collapse_expand_fetches_at_most_once() {
        let mut tree = tree_with_root();
        let mut fetches = 0;
        fetches += drive_toggle(&mut tree, 1, Ok(vec![make_node(2, false, 0), make_node(3, false, 0)]));
        assert!(tree.find(1).unwrap().is_expanded);

        fetches += drive_toggle(&mut tree, 1, Ok(vec![]));
        let node = tree.find(1).unwrap();
        assert!(!node.is_expanded);
        // Collapse keeps the cache
        assert_eq!(node.children.as_ref().unwrap().len(), 2);

        fetches += drive_toggle(&mut tree, 1, Ok(vec![]));
        assert!(tree.find(1).unwrap().is_expanded);
        assert_eq!(fetches, 1);
    }

    #[test]
    fn attach_children_is_idempotent_for_loaded_nodes() {
        let mut tree = tree_with_root();
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, false, 0)]);
        tree.attach_children(1, vec![make_node(99, false, 0)]);

        let ids: Vec<u32> = tree
            .find(1)
            .unwrap()
            .children
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn mutation_leaves_every_other_node_unchanged() {
        let mut tree = LazyTree::new();
        tree.initialize(vec![make_node(1, true, 2), make_node(4, true, 1)]);
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, true, 1), make_node(3, false, 0)]);

        let before: Vec<LazyNode> = tree.nodes().to_vec();
        tree.begin_load(2);

        let after = tree.nodes();
        assert!(after[0].children.as_ref().unwrap()[0].is_loading);
        // Sibling of the mutated node, and the other root, are untouched
        assert_eq!(after[0].children.as_ref().unwrap()[1], before[0].children.as_ref().unwrap()[1]);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn update_node_in_tree_reaches_nested_nodes() {
        let mut tree = tree_with_root();
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, true, 1)]);
        tree.begin_load(2);
        tree.attach_children(2, vec![make_node(5, false, 0)]);

        let patch = NodePatch {
            is_expanded: Some(false),
            ..Default::default()
        };
        let nodes = update_node_in_tree(tree.nodes(), 5, &patch);
        // Deep target found, everything still present
        assert!(find_node(&nodes, 5).is_some());
        assert_eq!(find_node(&nodes, 5).unwrap().is_expanded, false);
    }

    #[test]
    fn selection_is_independent_of_expansion() {
        let mut tree = tree_with_root();
        tree.select(Some(1));
        assert!(tree.is_selected(1));
        drive_toggle(&mut tree, 1, Ok(vec![make_node(2, false, 0)]));
        assert!(tree.is_selected(1));
        tree.select(None);
        assert!(!tree.is_selected(1));
    }

    #[test]
    fn subtree_contains_checks_loaded_descendants() {
        let mut tree = tree_with_root();
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, true, 1)]);
        tree.begin_load(2);
        tree.attach_children(2, vec![make_node(5, false, 0)]);

        assert!(subtree_contains(tree.nodes(), 1, 1));
        assert!(subtree_contains(tree.nodes(), 1, 5));
        assert!(subtree_contains(tree.nodes(), 2, 5));
        assert!(!subtree_contains(tree.nodes(), 2, 1));
        assert!(!subtree_contains(tree.nodes(), 5, 2));
    }

    #[test]
    fn move_target_filter_excludes_own_subtree() {
        let mut tree = tree_with_root();
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, true, 1), make_node(3, true, 1)]);
        tree.begin_load(2);
        tree.attach_children(2, vec![make_node(5, true, 0)]);

        let nodes = tree.nodes();
        // Moving node 2: itself and its loaded descendant are out, siblings are in
        assert!(!selectable_move_target(nodes, 2, find_node(nodes, 2).unwrap()));
        assert!(!selectable_move_target(nodes, 2, find_node(nodes, 5).unwrap()));
        assert!(selectable_move_target(nodes, 2, find_node(nodes, 3).unwrap()));
        assert!(selectable_move_target(nodes, 2, find_node(nodes, 1).unwrap()));
    }

    #[test]
    fn flatten_visible_skips_collapsed_subtrees() {
        let mut tree = tree_with_root();
        tree.begin_load(1);
        tree.attach_children(1, vec![make_node(2, true, 1), make_node(3, false, 0)]);
        tree.begin_load(2);
        tree.attach_children(2, vec![make_node(5, false, 0)]);

        let rows: Vec<(u32, usize)> = flatten_visible(tree.nodes())
            .into_iter()
            .map(|(node, depth)| (node.id, depth))
            .collect();
        assert_eq!(rows, vec![(1, 0), (2, 1), (5, 2), (3, 1)]);

        tree.collapse(2);
        let rows: Vec<u32> = flatten_visible(tree.nodes())
            .into_iter()
            .map(|(node, _)| node.id)
            .collect();
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn from_tree_node_drops_eagerly_nested_children() {
        let mut server_node = make_node(1, true, 1);
        server_node.children = Some(vec![make_node(2, false, 0)]);
        let lazy = LazyNode::from(server_node);
        assert_eq!(lazy.children, None);
        assert!(!lazy.has_loaded_children);
    }
}
