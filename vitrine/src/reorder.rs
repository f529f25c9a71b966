use std::collections::HashSet;

use crate::feed::FeedEntry;

use gallery_data::viewer::Viewer;

/// How many sensitive items get pushed down.
pub const DELAY_PUSHES: usize = 4;

/// How many slots further down a pushed item lands.
pub const DELAY_OFFSET: usize = 4;

/// Feeds longer than this are left alone.
pub const DELAY_MAX_LEN: usize = 100;

/// Tuning knobs of the sensitive content delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    pub pushes: usize,
    pub offset: usize,
    pub max_len: usize,
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self {
            pushes: DELAY_PUSHES,
            offset: DELAY_OFFSET,
            max_len: DELAY_MAX_LEN,
        }
    }
}

/// Push the first few sensitive items away from the top of the feed.
///
/// Applies only to anonymous viewers on short feeds, everyone else gets
/// the sequence back unchanged.
///
/// Each push scans from the front for the first sensitive item not
/// displaced before, removes it and reinserts it a fixed offset further
/// down, clamped to the end. When no undisplaced sensitive item remains
/// the remaining pushes are skipped.
///
/// Item count and ids are preserved, only order changes.
pub fn delay_sensitive<T>(mut items: Vec<T>, viewer: &Viewer, policy: &DelayPolicy) -> Vec<T>
where
    T: FeedEntry,
{
    if viewer.is_authenticated() || items.is_empty() || items.len() > policy.max_len {
        return items;
    }

    let mut displaced = HashSet::with_capacity(policy.pushes);

    for _ in 0..policy.pushes {
        let found = items
            .iter()
            .position(|item| item.sensitive() && !displaced.contains(&item.id()));

        let index = match found {
            Some(index) => index,
            None => break,
        };

        let item = items.remove(index);

        displaced.insert(item.id());

        let target = (index + policy.offset).min(items.len());

        items.insert(target, item);
    }

    items
}
