use crate::error::{OperationError, Result, TopologyError};
use crate::topology::{Cycle, Edge, PointStore};

/// Folds nested hull layers (outermost first) into one simple cycle.
///
/// Starting from the outermost layer, each inner layer is spliced into the
/// running path through an edge of the layer right outside it. The two new
/// connecting edges are checked against the inner layer and each other, so
/// the path never self-intersects.
#[derive(Debug)]
pub struct JoinHulls {
    layers: Vec<Cycle>,
}

/// How the two connecting edges pair the outer edge with an inner edge `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// `outer.u -> e.u` and `outer.v -> e.v`.
    Parallel,
    /// `outer.u -> e.v` and `outer.v -> e.u`.
    Crossed,
}

impl JoinHulls {
    /// Creates a new hull joining operation.
    #[must_use]
    pub fn new(layers: Vec<Cycle>) -> Self {
        Self { layers }
    }

    /// Executes the join, returning a cycle through every layer vertex.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InsufficientPoints` if there are no layers,
    /// `TopologyError::InvalidTopology` if an inner layer is empty,
    /// `OperationError::NoValidJoin` if some layer cannot be spliced in without
    /// a crossing, or a geometry error from the crossing tests.
    pub fn execute(&self, store: &PointStore) -> Result<Cycle> {
        let Some(first) = self.layers.first() else {
            return Err(OperationError::InsufficientPoints.into());
        };
        let mut path = first.clone();
        for (i, pair) in self.layers.windows(2).enumerate() {
            path = join_layer(&pair[0], &pair[1], &path, i + 1, store)?;
        }
        Ok(path)
    }
}

/// Splices `inner` into `path`, which must still contain an edge of `outer`.
fn join_layer(
    outer: &Cycle,
    inner: &Cycle,
    path: &Cycle,
    layer: usize,
    store: &PointStore,
) -> Result<Cycle> {
    let outer_edge = outer
        .edges()
        .into_iter()
        .find(|e| path.has_edge(e))
        .ok_or(OperationError::NoValidJoin { layer })?;

    match inner.vertices() {
        [] => {
            let reason = format!("hull layer {layer} is empty");
            return Err(TopologyError::InvalidTopology(reason).into());
        }
        [single] => {
            tracing::debug!(layer, "inserting single point layer");
            return path.insert(&outer_edge, *single);
        }
        _ => {}
    }

    let mut candidates = inner.edges();
    // Two vertices give the same segment twice.
    if candidates.len() == 2 {
        candidates.truncate(1);
    }

    for e in &candidates {
        for pairing in [Pairing::Parallel, Pairing::Crossed] {
            if !is_planar_pairing(&outer_edge, e, pairing, inner, store)? {
                continue;
            }
            tracing::debug!(layer, ?pairing, vertices = inner.len(), "joining hull layer");
            return match pairing {
                Pairing::Parallel => inner
                    .reversed()
                    .connect(&e.reversed(), path, &outer_edge),
                Pairing::Crossed => inner.connect(e, path, &outer_edge),
            };
        }
    }

    Err(OperationError::NoValidJoin { layer }.into())
}

/// Checks that the connecting edges for `pairing` cross neither the inner
/// layer nor each other.
fn is_planar_pairing(
    outer: &Edge,
    inner_edge: &Edge,
    pairing: Pairing,
    inner: &Cycle,
    store: &PointStore,
) -> Result<bool> {
    let (a, b) = match pairing {
        Pairing::Parallel => (
            Edge::new(outer.u, inner_edge.u),
            Edge::new(outer.v, inner_edge.v),
        ),
        Pairing::Crossed => (
            Edge::new(outer.u, inner_edge.v),
            Edge::new(outer.v, inner_edge.u),
        ),
    };
    Ok(!a.crosses(inner, store)? && !b.crosses(inner, store)? && !a.crosses(&b, store)?)
}
