use std::collections::HashSet;

use gallery_data::{CreatorId, ModelId};

/// Creators the viewer muted.
///
/// Filled once from the service then kept until explicitly invalidated.
/// Mutations to the remote list must invalidate to become visible.
#[derive(Debug, Default, Clone)]
pub struct HiddenCreators {
    set: HashSet<CreatorId>,
    loaded: bool,
    revision: u64,
}

impl HiddenCreators {
    pub fn new() -> Self {
        Self::default()
    }

    /// An unloaded cache reads as an empty set.
    pub fn contains(&self, creator: CreatorId) -> bool {
        self.set.contains(&creator)
    }

    pub fn ids(&self) -> &HashSet<CreatorId> {
        &self.set
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Bumped on every fill and invalidation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn fill<I>(&mut self, creators: I)
    where
        I: IntoIterator<Item = CreatorId>,
    {
        self.set = creators.into_iter().collect();
        self.loaded = true;
        self.revision += 1;
    }

    /// Drop the cached set, the next fill refreshes it.
    pub fn invalidate(&mut self) {
        self.set.clear();
        self.loaded = false;
        self.revision += 1;
    }
}

/// Models the viewer favorited, same caching rules as the hidden set.
#[derive(Debug, Default, Clone)]
pub struct FavoriteModels {
    set: HashSet<ModelId>,
    loaded: bool,
    revision: u64,
}

impl FavoriteModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, model: ModelId) -> bool {
        self.set.contains(&model)
    }

    pub fn ids(&self) -> &HashSet<ModelId> {
        &self.set
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn fill<I>(&mut self, models: I)
    where
        I: IntoIterator<Item = ModelId>,
    {
        self.set = models.into_iter().collect();
        self.loaded = true;
        self.revision += 1;
    }

    pub fn invalidate(&mut self) {
        self.set.clear();
        self.loaded = false;
        self.revision += 1;
    }
}
