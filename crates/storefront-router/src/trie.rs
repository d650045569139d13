//! Segment trie over route patterns
//!
//! Every terminal slot holds the table index of its route. Lookup walks all
//! branches that can match (static, parameter, wildcard) and keeps the match
//! with the lowest index, so overlapping patterns resolve in table order.

use crate::path::{fold, Pattern, Segment};
use crate::RouterOptions;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Captured segment values, in pattern order
pub(crate) type Captures = SmallVec<[String; 4]>;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrieMatch {
    /// Table index of the matched route
    pub route: usize,
    pub captures: Captures,
}

#[derive(Debug, Default)]
struct Node {
    /// Static children (key = folded path segment)
    children: HashMap<String, Node>,
    /// Parameter child (:id)
    param_child: Option<Box<Node>>,
    /// Wildcard route (*path) hanging off this node
    wildcard_route: Option<usize>,
    /// Route ending here
    route: Option<usize>,
    /// Route ending here with a trailing slash (strict mode only)
    slash_route: Option<usize>,
}

#[derive(Debug, Default)]
pub(crate) struct Trie {
    root: Node,
    options: RouterOptions,
}

impl Trie {
    pub(crate) fn new(options: RouterOptions) -> Self {
        Self {
            root: Node::default(),
            options,
        }
    }

    pub(crate) fn insert(&mut self, pattern: &Pattern, route: usize) {
        let slash = self.options.strict && pattern.trailing_slash;
        Self::insert_node(
            &mut self.root,
            &pattern.segments,
            slash,
            route,
            self.options.sensitive,
        );
    }

    fn insert_node(node: &mut Node, segments: &[Segment], slash: bool, route: usize, sensitive: bool) {
        match segments.split_first() {
            None => {
                let slot = if slash {
                    &mut node.slash_route
                } else {
                    &mut node.route
                };
                slot.get_or_insert(route);
            }
            Some((Segment::Static(s), rest)) => {
                let child = node
                    .children
                    .entry(fold(s, sensitive).into_owned())
                    .or_default();
                Self::insert_node(child, rest, slash, route, sensitive);
            }
            Some((Segment::Param(_), rest)) => {
                let child = node.param_child.get_or_insert_with(Box::default);
                Self::insert_node(child, rest, slash, route, sensitive);
            }
            Some((Segment::Wildcard(_), _)) => {
                node.wildcard_route.get_or_insert(route);
            }
        }
    }

    /// Find the lowest-index route matching `segments`
    pub(crate) fn find(&self, segments: &[&str], trailing_slash: bool) -> Option<TrieMatch> {
        let slash = self.options.strict && trailing_slash;
        let mut captures = Captures::new();
        let mut best = None;
        self.find_node(&self.root, segments, slash, &mut captures, &mut best);
        best
    }

    fn find_node(
        &self,
        node: &Node,
        segments: &[&str],
        slash: bool,
        captures: &mut Captures,
        best: &mut Option<TrieMatch>,
    ) {
        let Some((segment, rest)) = segments.split_first() else {
            let terminal = if slash { node.slash_route } else { node.route };
            if let Some(route) = terminal {
                Self::offer(best, route, captures);
            }
            return;
        };

        if let Some(child) = node.children.get(fold(segment, self.options.sensitive).as_ref()) {
            self.find_node(child, rest, slash, captures, best);
        }

        if let Some(child) = &node.param_child {
            captures.push((*segment).to_string());
            self.find_node(child, rest, slash, captures, best);
            captures.pop();
        }

        // Wildcard captures everything that is left (at least one segment)
        if let Some(route) = node.wildcard_route {
            captures.push(segments.join("/"));
            Self::offer(best, route, captures);
            captures.pop();
        }
    }

    fn offer(best: &mut Option<TrieMatch>, route: usize, captures: &Captures) {
        if best.as_ref().map_or(true, |m| route < m.route) {
            *best = Some(TrieMatch {
                route,
                captures: captures.clone(),
            });
        }
    }
}
