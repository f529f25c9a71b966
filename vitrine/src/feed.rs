use std::collections::{HashMap, HashSet};

use crate::{
    reorder::{delay_sensitive, DelayPolicy},
    source::Page,
};

use gallery_data::{model::ModelSummary, viewer::Viewer, CreatorId, ModelId};

/// Minimum surface the pipeline needs from a feed item.
///
/// Everything else is opaque payload carried through untouched.
pub trait FeedEntry {
    /// Stable item id, unique across the feed.
    fn id(&self) -> ModelId;

    /// Creator account the item belongs to.
    fn creator(&self) -> CreatorId;

    /// Sensitive content flag.
    fn sensitive(&self) -> bool;
}

impl FeedEntry for ModelSummary {
    fn id(&self) -> ModelId {
        self.id
    }

    fn creator(&self) -> CreatorId {
        self.user.id
    }

    fn sensitive(&self) -> bool {
        self.nsfw
    }
}

/// Remove items whose creator the viewer muted.
///
/// Order preserving, an empty hidden set returns the items unchanged.
pub fn suppress<T>(items: Vec<T>, hidden: &HashSet<CreatorId>) -> Vec<T>
where
    T: FeedEntry,
{
    if hidden.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| !hidden.contains(&item.creator()))
        .collect()
}

/// Flat render ready sequence with positions by id.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedFeed<T> {
    items: Vec<T>,
    positions: HashMap<ModelId, usize>,
}

impl<T> Default for MaterializedFeed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> MaterializedFeed<T>
where
    T: FeedEntry,
{
    fn new(items: Vec<T>) -> Self {
        let positions = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id(), index))
            .collect();

        Self { items, positions }
    }

    /// Items in render order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render position of this item, None when not in the feed.
    ///
    /// Deep links scroll to the returned position.
    pub fn position(&self, id: ModelId) -> Option<usize> {
        self.positions.get(&id).copied()
    }
}

/// Structural identity of one materialization's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedKey {
    /// Serialized filter descriptor.
    pub filter: String,

    pub authenticated: bool,

    pub pages_revision: u64,

    pub hidden_revision: u64,
}

/// Turns fetched pages into the render ready feed.
///
/// Flatten, dedup, suppress, then reorder. Recomputes only when the
/// input key changes, repeat calls hand back the cached feed.
pub struct Materializer<T> {
    policy: DelayPolicy,
    key: Option<FeedKey>,
    feed: MaterializedFeed<T>,
}

impl<T> Materializer<T>
where
    T: FeedEntry + Clone,
{
    pub fn new(policy: DelayPolicy) -> Self {
        Self {
            policy,
            key: None,
            feed: MaterializedFeed::default(),
        }
    }

    /// Rebuild the feed for these inputs.
    ///
    /// The first occurrence wins when the same id spans multiple pages.
    pub fn materialize(
        &mut self,
        key: FeedKey,
        pages: &[Page<T>],
        hidden: &HashSet<CreatorId>,
        viewer: &Viewer,
    ) -> &MaterializedFeed<T> {
        if self.key.as_ref() == Some(&key) {
            return &self.feed;
        }

        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for page in pages {
            for item in &page.items {
                debug_assert!(item.creator() != 0, "feed item without a creator");

                if seen.insert(item.id()) {
                    items.push(item.clone());
                }
            }
        }

        let items = suppress(items, hidden);
        let items = delay_sensitive(items, viewer, &self.policy);

        self.feed = MaterializedFeed::new(items);
        self.key = Some(key);

        &self.feed
    }

    /// Whatever the last materialization produced.
    pub fn feed(&self) -> &MaterializedFeed<T> {
        &self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::Rng;
    use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256StarStar};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        id: u64,
        creator: u64,
        sensitive: bool,
    }

    impl FeedEntry for Entry {
        fn id(&self) -> u64 {
            self.id
        }

        fn creator(&self) -> u64 {
            self.creator
        }

        fn sensitive(&self) -> bool {
            self.sensitive
        }
    }

    fn entry(id: u64, creator: u64, sensitive: bool) -> Entry {
        Entry {
            id,
            creator,
            sensitive,
        }
    }

    fn page(items: Vec<Entry>, next: Option<&str>) -> Page<Entry> {
        Page {
            items,
            next_cursor: next.map(Into::into),
        }
    }

    fn key(pages_revision: u64, hidden_revision: u64, authenticated: bool) -> FeedKey {
        FeedKey {
            filter: "{}".to_owned(),
            authenticated,
            pages_revision,
            hidden_revision,
        }
    }

    #[test]
    fn suppression_is_exact_and_order_preserving() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(871);

        for _ in 0..200 {
            let len = rng.gen_range(0..60);

            let items: Vec<Entry> = (0..len)
                .map(|id| entry(id, rng.gen_range(0..8), false))
                .collect();

            let hidden: HashSet<u64> = [0, 3].into_iter().collect();

            let result = suppress(items.clone(), &hidden);

            // Exactly the surviving items, still in feed order.
            let expected: Vec<Entry> = items
                .iter()
                .filter(|item| !hidden.contains(&item.creator))
                .cloned()
                .collect();

            assert_eq!(result, expected);
        }
    }

    #[test]
    fn empty_hidden_set_is_identity() {
        let items = vec![entry(0, 1, false), entry(1, 2, true)];

        let result = suppress(items.clone(), &HashSet::new());

        assert_eq!(result, items);
    }

    #[test]
    fn flattening_keeps_page_order() {
        let pages = vec![
            page(vec![entry(0, 1, false), entry(1, 1, false)], Some("a")),
            page(vec![entry(2, 2, false), entry(3, 2, false)], None),
        ];

        let mut materializer = Materializer::new(DelayPolicy::default());

        let feed = materializer.materialize(
            key(2, 0, true),
            &pages,
            &HashSet::new(),
            &Viewer::with_token("secret"),
        );

        let ids: Vec<u64> = feed.items().iter().map(|item| item.id).collect();

        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn duplicate_ids_first_seen_wins() {
        // Id 1 appears again on the second page with another creator.
        let pages = vec![
            page(vec![entry(0, 1, false), entry(1, 1, false)], Some("a")),
            page(vec![entry(1, 9, false), entry(2, 2, false)], None),
        ];

        let mut materializer = Materializer::new(DelayPolicy::default());

        let feed = materializer.materialize(
            key(2, 0, true),
            &pages,
            &HashSet::new(),
            &Viewer::with_token("secret"),
        );

        assert_eq!(feed.len(), 3);
        assert_eq!(feed.position(1), Some(1));

        // The payload of the first occurrence survived.
        assert_eq!(feed.items()[1].creator, 1);
    }

    #[test]
    fn suppression_runs_before_reordering() {
        // The leading sensitive items belong to a hidden creator, so the
        // delay must act on the survivors only.
        let pages = vec![page(
            vec![
                entry(0, 66, true),
                entry(1, 66, true),
                entry(2, 1, true),
                entry(3, 1, false),
                entry(4, 1, false),
                entry(5, 1, false),
                entry(6, 1, false),
                entry(7, 1, false),
            ],
            None,
        )];

        let hidden: HashSet<u64> = [66].into_iter().collect();

        let mut materializer = Materializer::new(DelayPolicy::default());

        let feed =
            materializer.materialize(key(1, 1, false), &pages, &hidden, &Viewer::anonymous());

        let ids: Vec<u64> = feed.items().iter().map(|item| item.id).collect();

        // Survivors are [2..=7], then id 2 gets pushed four slots down.
        assert_eq!(ids, vec![3, 4, 5, 6, 2, 7]);
    }

    #[test]
    fn same_key_returns_cached_feed() {
        let pages = vec![page(vec![entry(0, 1, false), entry(1, 1, true)], None)];

        let mut materializer = Materializer::new(DelayPolicy::default());

        let first = materializer
            .materialize(key(1, 0, false), &pages, &HashSet::new(), &Viewer::anonymous())
            .items()
            .as_ptr();

        let second = materializer
            .materialize(key(1, 0, false), &pages, &HashSet::new(), &Viewer::anonymous())
            .items()
            .as_ptr();

        // Same allocation, nothing was recomputed.
        assert_eq!(first, second);
    }

    #[test]
    fn changed_inputs_recompute() {
        let pages = vec![page(vec![entry(0, 1, false), entry(1, 2, false)], None)];

        let mut materializer = Materializer::new(DelayPolicy::default());

        let feed = materializer.materialize(
            key(1, 0, true),
            &pages,
            &HashSet::new(),
            &Viewer::with_token("secret"),
        );

        assert_eq!(feed.len(), 2);

        // The viewer hid creator 2 since.
        let hidden: HashSet<u64> = [2].into_iter().collect();

        let feed = materializer.materialize(
            key(1, 1, true),
            &pages,
            &hidden,
            &Viewer::with_token("secret"),
        );

        assert_eq!(feed.len(), 1);
        assert_eq!(feed.position(1), None);
    }

    #[test]
    fn repeat_materialization_is_idempotent() {
        let pages = vec![page(
            vec![entry(0, 1, true), entry(1, 2, false), entry(2, 3, true)],
            None,
        )];

        let mut one = Materializer::new(DelayPolicy::default());
        let mut two = Materializer::new(DelayPolicy::default());

        let first = one
            .materialize(key(1, 0, false), &pages, &HashSet::new(), &Viewer::anonymous())
            .clone();

        let second = two
            .materialize(key(1, 0, false), &pages, &HashSet::new(), &Viewer::anonymous())
            .clone();

        assert_eq!(first, second);
    }

    #[test]
    fn deep_link_position_resolution() {
        let pages = vec![page(vec![entry(5, 1, false), entry(9, 1, false)], None)];

        let mut materializer = Materializer::new(DelayPolicy::default());

        let feed = materializer.materialize(
            key(1, 0, true),
            &pages,
            &HashSet::new(),
            &Viewer::with_token("secret"),
        );

        assert_eq!(feed.position(9), Some(1));
        assert_eq!(feed.position(1234), None);
    }
}
