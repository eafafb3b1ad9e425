use std::collections::BTreeMap;

use indexmap::IndexMap;

/// A single node in the Aho–Corasick trie, addressed by its index into
/// [`AhoCorasickMatcher::nodes`] — an arena rather than owned child/parent
/// pointers, so the failure-link back-edges never need `Rc`/unsafe (spec.md
/// §9's design note).
struct Node {
    /// Outgoing edges keyed by byte.
    transitions: BTreeMap<u8, usize>,
    /// Failure link (root for depth-1 nodes and unmatched fallbacks).
    fail: usize,
    /// Indices into the matcher's keyword list that end at this node,
    /// including those inherited from the failure chain — pre-flattened at
    /// build time so the scan loop never re-walks the chain.
    output: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            transitions: BTreeMap::new(),
            fail: 0,
            output: Vec::new(),
        }
    }
}

/// Multi-pattern Aho–Corasick automaton. Construction is `O(Σ|k|)`; a single
/// linear pass over the haystack then reports every occurrence of every
/// keyword, including keywords that are suffixes of other keywords.
pub struct AhoCorasickMatcher {
    nodes: Vec<Node>,
    keywords: Vec<String>,
}

impl AhoCorasickMatcher {
    /// Builds the automaton from a non-empty, already case-folded keyword
    /// list. Panics if `keywords` is empty — per spec.md §4.2, an empty
    /// keyword list is rejected at construction, and the query executor
    /// never constructs this matcher without at least one keyword.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        assert!(
            !keywords.is_empty(),
            "AhoCorasickMatcher requires at least one keyword"
        );

        let mut nodes = vec![Node::new()];

        for (idx, keyword) in keywords.iter().enumerate() {
            let mut current = 0;
            for &byte in keyword.as_bytes() {
                current = match nodes[current].transitions.get(&byte) {
                    Some(&next) => next,
                    None => {
                        nodes.push(Node::new());
                        let next = nodes.len() - 1;
                        nodes[current].transitions.insert(byte, next);
                        next
                    }
                };
            }
            nodes[current].output.push(idx);
        }

        // BFS failure-link construction, propagating output lists.
        let mut queue = std::collections::VecDeque::new();
        let root_children: Vec<usize> = nodes[0].transitions.values().copied().collect();
        for child in root_children {
            nodes[child].fail = 0;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let transitions = nodes[current].transitions.clone();
            for (&byte, &next) in &transitions {
                let mut fail = nodes[current].fail;
                while fail != 0 && !nodes[fail].transitions.contains_key(&byte) {
                    fail = nodes[fail].fail;
                }
                let fallback = nodes[fail].transitions.get(&byte).copied().unwrap_or(0);

                nodes[next].fail = fallback;
                let inherited = nodes[fallback].output.clone();
                nodes[next].output.extend(inherited);

                queue.push_back(next);
            }
        }

        Self { nodes, keywords }
    }

    /// Scans `haystack` in one linear pass, returning every occurrence of
    /// every keyword, grouped per keyword in strictly increasing start
    /// order. Keywords with zero occurrences are absent from the map.
    pub fn search(&self, haystack: &str) -> IndexMap<String, Vec<usize>> {
        let mut occurrences: IndexMap<String, Vec<usize>> = IndexMap::new();
        if haystack.is_empty() {
            return occurrences;
        }

        let text = haystack.as_bytes();
        let mut current = 0usize;
        for (i, &byte) in text.iter().enumerate() {
            while current != 0 && !self.nodes[current].transitions.contains_key(&byte) {
                current = self.nodes[current].fail;
            }
            current = self.nodes[current]
                .transitions
                .get(&byte)
                .copied()
                .unwrap_or(0);

            for &keyword_idx in &self.nodes[current].output {
                let keyword = &self.keywords[keyword_idx];
                let start = i + 1 - keyword.len();
                occurrences
                    .entry(keyword.clone())
                    .or_default()
                    .push(start);
            }
        }
        occurrences
    }
}
