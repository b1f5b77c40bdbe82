//! Scene graph integration tests
//!
//! Tests for:
//! - Lazy node metadata (name/flags)
//! - add_child back-references and multi-edge support
//! - NodeBuilder chain
//! - Visitor traversal: children/parents order, prune, leave ordering
//! - Broken-graph errors: stale root, dangling parent, cycle depth budget

use glam::Mat4;
use glint::{
    Flow, GlintError, Node, NodeFlags, NodeKey, NodeVisitor, SceneGraph, Traversal, TriangleMesh,
    traverse,
};

// ============================================================================
// Helpers
// ============================================================================

fn transform_node() -> Node {
    Node::transform(Mat4::IDENTITY)
}

/// Records every visited node in pre-order.
struct Collector {
    mode: Traversal,
    order: Vec<NodeKey>,
}

impl Collector {
    fn children() -> Self {
        Self {
            mode: Traversal::Children,
            order: Vec::new(),
        }
    }

    fn parents() -> Self {
        Self {
            mode: Traversal::Parents,
            order: Vec::new(),
        }
    }
}

impl NodeVisitor for Collector {
    fn traversal(&self) -> Traversal {
        self.mode
    }

    fn visit_node(&mut self, _graph: &SceneGraph, key: NodeKey) -> glint::Result<Flow> {
        self.order.push(key);
        Ok(Flow::Descend)
    }
}

// ============================================================================
// Node Metadata
// ============================================================================

#[test]
fn metadata_reads_do_not_allocate() {
    let node = transform_node();
    assert_eq!(node.name(), "");
    assert!(node.flags().is_empty());
    assert!(!node.has_meta());
}

#[test]
fn metadata_materializes_on_first_write() {
    let mut node = transform_node();
    node.name_mut().push_str("root");
    assert!(node.has_meta());
    assert_eq!(node.name(), "root");

    node.flags_mut().insert(NodeFlags::HIDDEN);
    assert!(node.flags().contains(NodeFlags::HIDDEN));
}

#[test]
fn flags_retain_arbitrary_bits() {
    let mut node = transform_node();
    let word = 0xABCD_EF01_2345_6789_u64;
    node.set_flags(NodeFlags::from_bits_retain(word));
    assert_eq!(node.flags().bits(), word);
}

// ============================================================================
// Hierarchy Wiring
// ============================================================================

#[test]
fn add_child_wires_back_reference() {
    let mut graph = SceneGraph::new();
    let parent = graph.insert(transform_node());
    let child = graph.insert(transform_node());

    graph.add_child(parent, child);

    assert_eq!(graph.node(parent).unwrap().children(), &[child]);
    assert_eq!(graph.node(child).unwrap().parents(), &[parent]);
}

#[test]
fn duplicate_add_creates_duplicate_edges() {
    let mut graph = SceneGraph::new();
    let parent = graph.insert(transform_node());
    let child = graph.insert(transform_node());

    graph.add_child(parent, child);
    graph.add_child(parent, child);

    assert_eq!(graph.node(parent).unwrap().children(), &[child, child]);
    assert_eq!(graph.node(child).unwrap().parents(), &[parent, parent]);

    // The child is visited once per edge.
    let mut collector = Collector::children();
    traverse(&graph, parent, &mut collector).unwrap();
    assert_eq!(collector.order, vec![parent, child, child]);
}

#[test]
fn shared_child_has_two_parents() {
    let mut graph = SceneGraph::new();
    let a = graph.insert(transform_node());
    let b = graph.insert(transform_node());
    let shared = graph.insert(Node::triangle_mesh(TriangleMesh::default()));

    graph.add_child(a, shared);
    graph.add_child(b, shared);

    assert_eq!(graph.node(shared).unwrap().parents(), &[a, b]);
}

#[test]
fn remove_detaches_edges_both_ways() {
    let mut graph = SceneGraph::new();
    let parent = graph.insert(transform_node());
    let middle = graph.insert(transform_node());
    let child = graph.insert(transform_node());
    graph.add_child(parent, middle);
    graph.add_child(middle, child);

    graph.remove(middle);

    assert!(graph.node(parent).unwrap().children().is_empty());
    assert!(graph.node(child).unwrap().parents().is_empty());
    assert_eq!(graph.node_count(), 2);
}

// ============================================================================
// NodeBuilder
// ============================================================================

#[test]
fn builder_sets_metadata_and_parent() {
    let mut graph = SceneGraph::new();
    let root = graph
        .build_node(glint::NodeKind::Transform(Mat4::IDENTITY))
        .with_name("root")
        .with_flags(NodeFlags::STATIC)
        .build();
    let child = graph
        .build_node(glint::NodeKind::Transform(Mat4::IDENTITY))
        .with_name("child")
        .with_parent(root)
        .build();

    let root_node = graph.node(root).unwrap();
    assert_eq!(root_node.name(), "root");
    assert!(root_node.flags().contains(NodeFlags::STATIC));
    assert_eq!(root_node.children(), &[child]);
    assert_eq!(graph.node(child).unwrap().name(), "child");
}

// ============================================================================
// Traversal
// ============================================================================

/// root -> (a -> c, b); returns (root, a, b, c).
fn small_tree(graph: &mut SceneGraph) -> (NodeKey, NodeKey, NodeKey, NodeKey) {
    let root = graph.insert(transform_node());
    let a = graph.insert(transform_node());
    let b = graph.insert(transform_node());
    let c = graph.insert(transform_node());
    graph.add_child(root, a);
    graph.add_child(root, b);
    graph.add_child(a, c);
    (root, a, b, c)
}

#[test]
fn children_traversal_is_depth_first_preorder() {
    let mut graph = SceneGraph::new();
    let (root, a, b, c) = small_tree(&mut graph);

    let mut collector = Collector::children();
    traverse(&graph, root, &mut collector).unwrap();
    assert_eq!(collector.order, vec![root, a, c, b]);
}

#[test]
fn parents_traversal_walks_upward() {
    let mut graph = SceneGraph::new();
    let (root, a, _b, c) = small_tree(&mut graph);

    let mut collector = Collector::parents();
    traverse(&graph, c, &mut collector).unwrap();
    assert_eq!(collector.order, vec![c, a, root]);
}

#[test]
fn prune_skips_subtree() {
    struct Pruner {
        order: Vec<NodeKey>,
    }

    impl NodeVisitor for Pruner {
        fn visit_node(&mut self, _graph: &SceneGraph, key: NodeKey) -> glint::Result<Flow> {
            self.order.push(key);
            Ok(Flow::Descend)
        }

        fn visit_transform(
            &mut self,
            _graph: &SceneGraph,
            key: NodeKey,
            _matrix: &Mat4,
        ) -> glint::Result<Flow> {
            self.order.push(key);
            Ok(Flow::Prune)
        }
    }

    let mut graph = SceneGraph::new();
    let root = graph.insert(Node::triangle_mesh(TriangleMesh::default()));
    let pruned = graph.insert(transform_node());
    let hidden = graph.insert(Node::triangle_mesh(TriangleMesh::default()));
    graph.add_child(root, pruned);
    graph.add_child(pruned, hidden);

    let mut visitor = Pruner { order: Vec::new() };
    traverse(&graph, root, &mut visitor).unwrap();
    assert_eq!(visitor.order, vec![root, pruned]);
}

#[test]
fn leave_runs_post_order() {
    struct LeaveRecorder {
        visited: Vec<NodeKey>,
        left: Vec<NodeKey>,
    }

    impl NodeVisitor for LeaveRecorder {
        fn visit_node(&mut self, _graph: &SceneGraph, key: NodeKey) -> glint::Result<Flow> {
            self.visited.push(key);
            Ok(Flow::Descend)
        }

        fn leave(&mut self, _graph: &SceneGraph, key: NodeKey) -> glint::Result<()> {
            self.left.push(key);
            Ok(())
        }
    }

    let mut graph = SceneGraph::new();
    let (root, a, b, c) = small_tree(&mut graph);

    let mut visitor = LeaveRecorder {
        visited: Vec::new(),
        left: Vec::new(),
    };
    traverse(&graph, root, &mut visitor).unwrap();
    assert_eq!(visitor.visited, vec![root, a, c, b]);
    assert_eq!(visitor.left, vec![c, a, b, root]);
}

// ============================================================================
// Broken Graphs
// ============================================================================

#[test]
fn stale_root_is_an_error() {
    let mut graph = SceneGraph::new();
    let key = graph.insert(transform_node());
    graph.remove(key);

    let mut collector = Collector::children();
    let result = traverse(&graph, key, &mut collector);
    assert!(matches!(result, Err(GlintError::NodeNotFound(_))));
}

#[test]
fn dangling_parent_is_an_error() {
    let mut graph = SceneGraph::new();
    let parent = graph.insert(transform_node());
    let child = graph.insert(transform_node());
    graph.add_child(parent, child);

    // Remove through the raw arena, bypassing edge cleanup, to fabricate a
    // stale back-reference.
    graph.nodes.remove(parent);

    let mut collector = Collector::parents();
    let result = traverse(&graph, child, &mut collector);
    assert!(matches!(result, Err(GlintError::DanglingParent { .. })));
}

#[test]
fn cycle_exhausts_depth_budget() {
    let mut graph = SceneGraph::new();
    let a = graph.insert(transform_node());
    let b = graph.insert(transform_node());
    graph.add_child(a, b);
    graph.add_child(b, a);

    let mut collector = Collector::children();
    let result = traverse(&graph, a, &mut collector);
    assert!(matches!(
        result,
        Err(GlintError::TraversalDepthExceeded { .. })
    ));
}
