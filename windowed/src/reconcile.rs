use alloc::vec::Vec;

use crate::key::{NodeKey, NodeMap};
use crate::{Host, Placement, Spacers, VisibleRange};

/// The rendered node map plus the range it was last reconciled against.
///
/// Shared by the list and the grid: both reduce to "these keys should be mounted" and differ
/// only in how keys are enumerated.
#[derive(Clone, Debug)]
pub(crate) struct NodeWindow<K, N> {
    nodes: NodeMap<K, N>,
    range: Option<VisibleRange>,
    spacers: Spacers,
}

impl<K: NodeKey, N: Clone> NodeWindow<K, N> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: NodeMap::new(),
            range: None,
            spacers: Spacers::default(),
        }
    }

    /// The last reconciled range (empty before the first pass).
    pub(crate) fn range(&self) -> VisibleRange {
        self.range.unwrap_or_default()
    }

    pub(crate) fn spacers(&self) -> Spacers {
        self.spacers
    }

    pub(crate) fn get(&self, key: &K) -> Option<&N> {
        self.nodes.get(key)
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn sorted_keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self.nodes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Brings the mounted nodes in line with `range`.
    ///
    /// - `retain(k)` says whether an already mounted key belongs to the new range.
    /// - `wanted` enumerates every key of the new range in ascending order.
    /// - `materialize(k)` renders a missing key; `None` skips it (stale index).
    ///
    /// Returns `false` without touching anything when `range` equals the last reconciled range.
    pub(crate) fn reconcile<H>(
        &mut self,
        host: &mut H,
        range: VisibleRange,
        spacers: Spacers,
        retain: impl Fn(&K) -> bool,
        wanted: impl Iterator<Item = K>,
        mut materialize: impl FnMut(K) -> Option<Placement<K, N>>,
    ) -> bool
    where
        H: Host<K, Node = N>,
    {
        if self.range == Some(range) {
            return false;
        }

        let mut evicted: Vec<K> = self.nodes.keys().filter(|k| !retain(k)).copied().collect();
        evicted.sort_unstable();
        for key in &evicted {
            if let Some(node) = self.nodes.remove(key) {
                host.remove(key, node);
            }
        }

        let mut batch = Vec::new();
        for key in wanted {
            if self.nodes.contains_key(&key) {
                continue;
            }
            let Some(placement) = materialize(key) else {
                continue;
            };
            self.nodes.insert(key, placement.node.clone());
            batch.push(placement);
        }

        self.spacers = spacers;
        host.set_spacers(spacers);
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let added = batch.len();
        if !batch.is_empty() {
            host.append(batch);
        }

        wtrace!(
            start = range.start,
            end = range.end,
            evicted = evicted.len(),
            added,
            mounted = self.nodes.len(),
            "reconcile"
        );
        self.range = Some(range);
        true
    }

    /// Swaps the node for a mounted `key`. Returns `false` if `key` is not mounted.
    pub(crate) fn replace<H>(&mut self, host: &mut H, key: K, node: N) -> bool
    where
        H: Host<K, Node = N>,
    {
        let Some(slot) = self.nodes.get_mut(&key) else {
            return false;
        };
        *slot = node.clone();
        host.replace(&key, node);
        true
    }

    /// Detaches every mounted node and forgets the last range.
    pub(crate) fn clear<H>(&mut self, host: &mut H)
    where
        H: Host<K, Node = N>,
    {
        let nodes = core::mem::take(&mut self.nodes);
        let mut nodes: Vec<(K, N)> = nodes.into_iter().collect();
        nodes.sort_unstable_by_key(|(k, _)| *k);
        for (key, node) in nodes {
            host.remove(&key, node);
        }
        self.range = None;
    }
}
