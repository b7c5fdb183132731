//! Alias lookup automaton.
//!
//! An arena of nodes addressed by [`NodeId`]. Each node maps the next
//! character to a child and optionally carries the glyph of the alias that
//! ends there. A node can be both terminal and intermediate, although the
//! global table never needs it.
//!
//! Built iteratively, one character at a time per alias, so alias length
//! never affects stack depth. The process-wide instance over [`ALIASES`] is
//! available through [`AliasTrie::global`] and is immutable after
//! construction.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::ALIASES;

/// Index of a node in an [`AliasTrie`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct Node {
    children: FxHashMap<char, NodeId>,
    glyph: Option<&'static str>,
}

/// Immutable character trie over an alias table.
#[derive(Debug)]
pub struct AliasTrie {
    nodes: Vec<Node>,
    aliases: usize,
}

static GLOBAL: LazyLock<AliasTrie> = LazyLock::new(|| AliasTrie::build(ALIASES));

impl AliasTrie {
    /// Build a trie from `(alias, glyph)` pairs.
    ///
    /// Empty aliases are skipped. A repeated alias keeps the last glyph.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "alias tables are a few hundred entries, far below u32::MAX nodes"
    )]
    pub fn build(table: &[(&str, &'static str)]) -> Self {
        let mut nodes = vec![Node::default()];
        let mut aliases = 0;

        for &(alias, glyph) in table {
            if alias.is_empty() {
                continue;
            }
            let mut current = NodeId::ROOT;
            for ch in alias.chars() {
                let next_id = NodeId(nodes.len() as u32);
                let child = *nodes[current.index()]
                    .children
                    .entry(ch)
                    .or_insert(next_id);
                if child == next_id {
                    nodes.push(Node::default());
                }
                current = child;
            }
            if nodes[current.index()].glyph.replace(glyph).is_none() {
                aliases += 1;
            }
        }

        Self { nodes, aliases }
    }

    /// Shared trie over the built-in [`ALIASES`] table.
    pub fn global() -> &'static AliasTrie {
        &GLOBAL
    }

    /// Starting node for a walk.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `ch`, or `None` at a dead end.
    #[inline]
    pub fn step(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&ch).copied()
    }

    /// Glyph of the alias ending at `node`, if it is terminal.
    #[inline]
    pub fn glyph(&self, node: NodeId) -> Option<&'static str> {
        self.nodes[node.index()].glyph
    }

    /// Exact lookup of a whole alias.
    pub fn get(&self, alias: &str) -> Option<&'static str> {
        let node = alias
            .chars()
            .try_fold(self.root(), |node, ch| self.step(node, ch))?;
        self.glyph(node)
    }

    /// Number of distinct aliases.
    pub fn len(&self) -> usize {
        self.aliases
    }

    /// Returns `true` if no alias was inserted.
    pub fn is_empty(&self) -> bool {
        self.aliases == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
