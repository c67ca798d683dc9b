//! Spatial indexing for food queries.
//!
//! Wraps a KD-tree over the food list so steering can ask for the nearest
//! remaining food. Equal-distance results from the tree come back in an
//! unspecified order, so the query re-breaks ties by creation order (lowest
//! id) to keep target selection deterministic.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

use super::food::Food;

/// Type alias for the 2D spatial KD-tree used for food queries.
pub type Tree2D = KdTree<f32, usize, Vec<f32>>;

/// Pre-built spatial index over the tank's food list.
///
/// Built once per tick, before the steering phase, from the same snapshot of
/// the food list that steering reads.
pub struct FoodIndex {
    tree: Tree2D,
    len: usize,
}

impl FoodIndex {
    /// Builds the index from the current food list.
    pub fn build(foods: &[Food]) -> Result<Self, KdTreeError> {
        let mut tree = KdTree::with_capacity(2, foods.len().max(1));
        for food in foods {
            tree.add(food.pos.to_vec(), food.id)?;
        }
        Ok(Self {
            tree,
            len: foods.len(),
        })
    }

    /// Returns the id of the food nearest to `pos`.
    ///
    /// Ties by distance are broken by creation order: the earliest-created
    /// (lowest id) food wins. Repeated calls with the same inputs return the
    /// same id.
    pub fn nearest_food(&self, pos: &Array1<f32>) -> Option<usize> {
        if self.len == 0 {
            return None;
        }

        let hits = self
            .tree
            .nearest(&pos.to_vec(), self.len, &squared_euclidean)
            .unwrap_or_default();

        let mut best: Option<(f32, usize)> = None;
        for (dist_sq, &id) in hits {
            let better = match best {
                None => true,
                Some((best_dist, best_id)) => {
                    dist_sq < best_dist || (dist_sq == best_dist && id < best_id)
                }
            };
            if better {
                best = Some((dist_sq, id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Whether the index holds no food.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
