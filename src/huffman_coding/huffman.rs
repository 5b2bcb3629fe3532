use log::{debug, trace};

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Handle of a node inside its `CodeTree` arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }
}

/// Huffman tree stored as an arena. Leaves occupy the first slots in ascending symbol
/// order, merged nodes follow in the order they were created. Dropping the tree releases
/// every node at once.
#[derive(Debug, Clone)]
pub struct CodeTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl CodeTree {
    /// Build the tree from symbol counts by repeatedly merging the two lightest nodes.
    ///
    /// Ties are broken by insertion order: the node that entered the queue first leaves it
    /// first. The first node extracted becomes the left child, the second the right child.
    /// An empty table gives a tree without a root; a table with a single symbol gives a
    /// tree that is just that leaf.
    pub fn build(freqs: &FrequencyTable) -> CodeTree {
        let mut nodes: Vec<Node> = freqs
            .iter()
            .map(|(sym, count)| Node::new(count, NodeData::Leaf(sym)))
            .collect();

        match nodes.len() {
            0 => {
                debug!("No symbols, tree is empty.");
                return CodeTree { nodes, root: None };
            }
            1 => {
                debug!("Degenerate alphabet: only one distinct symbol, tree is a single leaf.");
                return CodeTree {
                    nodes,
                    root: Some(0),
                };
            }
            _ => {}
        }

        // Arena index doubles as the insertion sequence number for tie-breaking.
        let mut queue: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight, id)))
            .collect();

        let mut root = None;
        while let Some(Reverse((left_weight, left))) = queue.pop() {
            match queue.pop() {
                Some(Reverse((right_weight, right))) => {
                    let weight = left_weight + right_weight;
                    nodes.push(Node::new(weight, NodeData::Kids(left, right)));
                    trace!("Merged {} + {} into node {}", left, right, nodes.len() - 1);
                    queue.push(Reverse((weight, nodes.len() - 1)));
                }
                None => root = Some(left),
            }
        }

        debug!(
            "Built tree of {} nodes for {} symbols.",
            nodes.len(),
            freqs.len()
        );
        CodeTree { nodes, root }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of leaves, which equals the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n.node_data, NodeData::Leaf(_)))
            .count()
    }

    /// Sum over all leaves of weight × depth. This is the packed length in bits
    /// (a lone root leaf counts as depth 1, matching its one-bit code).
    pub fn weighted_path_length(&self) -> u64 {
        let Some(root) = self.root else {
            return 0;
        };
        let mut total = 0;
        let mut stack = vec![(root, 0_u64)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeData::Leaf(_) => total += self.nodes[id].weight * depth.max(1),
            }
        }
        total
    }
}
