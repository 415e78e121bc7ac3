use std::{collections::BTreeSet, fmt::Debug};

use tracing::debug;

use crate::model::{Item, ItemId};

/// Ranked candidate list
pub struct Hits {
    /// (Item ID, score, catalog row)
    pub list: Vec<(ItemId, f64, usize)>,
}

impl Hits {
    pub fn new(vec: Vec<(ItemId, f64, usize)>) -> Self {
        Hits { list: vec }
    }

    /// Sort by descending score, equal scores by ascending item id.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s, _)| !s.is_nan());
        self.list
            .sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        self
    }

    /// Drop every hit whose item id is in `ids`
    pub fn exclude(&mut self, ids: &BTreeSet<ItemId>) -> &mut Self {
        self.list.retain(|(id, _, _)| !ids.contains(id));
        self
    }

    pub fn truncate(&mut self, limit: usize) -> &mut Self {
        self.list.truncate(limit);
        self
    }

    /// Resolve hits to items of the snapshot they were ranked from
    pub fn into_items(self, items: &[Item]) -> Vec<Item> {
        self.list
            .into_iter()
            .filter_map(|(_, _, row)| items.get(row).cloned())
            .collect()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (id, score, row) in &self.list {
                writeln!(f, "    {:?}: {:.6} (row: {})", id, score, row)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Cold start: most popular first, ties by ascending id.
/// Compares the integer popularity directly so large values keep their order.
pub fn rank_by_popularity(items: &[Item], limit: usize) -> Vec<Item> {
    let mut ranked: Vec<&Item> = items.iter().collect();
    ranked.sort_by(|a, b| {
        b.popularity
            .cmp(&a.popularity)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.into_iter().take(limit).cloned().collect()
}

/// Personalized: highest aggregate score first, ties by ascending id,
/// favorites excluded. Never padded up to `limit`.
pub fn rank_by_score(
    items: &[Item],
    scores: &[f64],
    favorites: &BTreeSet<ItemId>,
    limit: usize,
) -> Vec<Item> {
    let mut hits = Hits::new(
        items
            .iter()
            .enumerate()
            .map(|(row, item)| (item.id, scores.get(row).copied().unwrap_or(0.0), row))
            .collect(),
    );
    hits.sort_by_score().exclude(favorites).truncate(limit);
    debug!("ranked {:#?}", hits);
    hits.into_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::fixtures::book;

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn popularity_desc_with_ascending_id_tie_break() {
        let items = vec![
            book(5, "e", "x", 10, ""),
            book(3, "c", "x", 50, ""),
            book(9, "i", "x", 50, ""),
            book(1, "a", "x", 10, ""),
        ];
        assert_eq!(ids(&rank_by_popularity(&items, 10)), vec![3, 9, 1, 5]);
        assert_eq!(ids(&rank_by_popularity(&items, 2)), vec![3, 9]);
    }

    #[test]
    fn popularity_order_is_exact_beyond_f64_precision() {
        let big = 1u64 << 53;
        let items = vec![
            book(1, "a", "x", big, ""),
            book(2, "b", "x", big + 1, ""),
            book(3, "c", "x", u64::MAX, ""),
        ];
        assert_eq!(ids(&rank_by_popularity(&items, 10)), vec![3, 2, 1]);
    }

    #[test]
    fn hits_alternate_debug_lists_one_hit_per_line() {
        let mut hits = Hits::new(vec![(7, 0.25, 1), (3, 0.5, 0)]);
        hits.sort_by_score();
        let pretty = format!("{:#?}", hits);
        assert_eq!(pretty, "Hits [\n    3: 0.500000 (row: 0)\n    7: 0.250000 (row: 1)\n]");
        assert_eq!(format!("{:?}", hits), "[(3, 0.5, 0), (7, 0.25, 1)]");
    }

    #[test]
    fn score_ranking_excludes_favorites_and_breaks_ties_by_id() {
        let items = vec![
            book(4, "d", "x", 0, ""),
            book(2, "b", "x", 0, ""),
            book(7, "g", "x", 0, ""),
            book(1, "a", "x", 0, ""),
        ];
        let scores = [1.0, 0.5, 0.5, 0.9];
        let result = rank_by_score(&items, &scores, &BTreeSet::from([4]), 10);
        assert_eq!(ids(&result), vec![1, 2, 7]);
    }

    #[test]
    fn score_ranking_never_pads() {
        let items = vec![book(1, "a", "x", 0, ""), book(2, "b", "x", 0, "")];
        let result = rank_by_score(&items, &[1.0, 0.0], &BTreeSet::from([1, 2]), 10);
        assert!(result.is_empty());
    }

    #[test]
    fn nan_scores_are_dropped() {
        let items = vec![book(1, "a", "x", 0, ""), book(2, "b", "x", 0, "")];
        let result = rank_by_score(&items, &[f64::NAN, 0.3], &BTreeSet::new(), 10);
        assert_eq!(ids(&result), vec![2]);
    }
}
