//! Ordered item collection.
//!
//! Array order is paint order; hit-testing walks it backwards so the topmost
//! item wins. Items are held behind `Arc`, so cloning a scene is cheap and
//! clones share every item they have not modified since.

use std::sync::Arc;

use prancheta_core::{BoardError, Point, Result};

use crate::model::{BoardItem, Bounds, Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    items: Vec<Arc<Item>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scene, rejecting duplicate ids.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut scene = Scene::new();
        for item in items {
            if scene.contains(item.id()) {
                return Err(BoardError::DuplicateItemId {
                    id: item.id().to_string(),
                });
            }
            scene.items.push(Arc::new(item));
        }
        Ok(scene)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Item> {
        self.items.iter().map(|i| i.as_ref())
    }

    /// Owned copy of the items in paint order.
    pub fn items(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.iter().find(|i| i.id() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    pub fn bounds(&self, id: &ItemId) -> Option<Bounds> {
        self.get(id).map(|i| i.bounds())
    }

    fn require(&self, id: &ItemId) -> Result<usize> {
        self.index_of(id).ok_or_else(|| BoardError::ItemNotFound { id: id.to_string() })
    }

    /// Returns a scene with `item` appended on top.
    pub fn add_item(&self, item: Item) -> Result<Scene> {
        if self.contains(item.id()) {
            return Err(BoardError::DuplicateItemId {
                id: item.id().to_string(),
            });
        }
        let mut next = self.clone();
        next.items.push(Arc::new(item));
        Ok(next)
    }

    pub fn remove_item(&self, id: &ItemId) -> Result<Scene> {
        let index = self.require(id)?;
        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Returns a scene with `patch` applied to one item. The item keeps its id
    /// whatever the patch does.
    pub fn update_item<F>(&self, id: &ItemId, patch: F) -> Result<Scene>
    where
        F: FnOnce(&mut Item),
    {
        let index = self.require(id)?;
        let mut next = self.clone();
        let item = Arc::make_mut(&mut next.items[index]);
        patch(item);
        item.common_mut().id = id.clone();
        Ok(next)
    }

    /// Marks exactly the listed items as selected. Unknown ids are ignored.
    pub fn set_selection(&self, ids: &[ItemId]) -> Scene {
        let mut next = self.clone();
        for slot in &mut next.items {
            let wanted = ids.contains(slot.id());
            if slot.is_selected() != wanted {
                Arc::make_mut(slot).set_selected(wanted);
            }
        }
        next
    }

    pub fn clear(&self) -> Scene {
        Scene::new()
    }

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.iter()
            .filter(|i| i.is_selected())
            .map(|i| i.id().clone())
            .collect()
    }

    /// Topmost selected item.
    pub fn selected(&self) -> Option<&Item> {
        self.iter().rev().find(|i| i.is_selected())
    }

    /// Topmost item under `point`.
    pub fn find_topmost_at(&self, point: Point, tolerance: f64) -> Option<&Item> {
        self.iter().rev().find(|i| i.contains_point(point, tolerance))
    }

    /// Moves an item to the top of the paint order.
    pub fn bring_to_front(&self, id: &ItemId) -> Result<Scene> {
        let index = self.require(id)?;
        let mut next = self.clone();
        let item = next.items.remove(index);
        next.items.push(item);
        Ok(next)
    }

    pub fn remove_selected(&self) -> Scene {
        let mut next = self.clone();
        next.items.retain(|i| !i.is_selected());
        next
    }

    /// Mutates one item in place, copying it only if a snapshot still shares
    /// it. Used on the pointer-move path. Returns false for unknown ids.
    pub fn patch_in_place<F>(&mut self, id: &ItemId, patch: F) -> bool
    where
        F: FnOnce(&mut Item),
    {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let item = Arc::make_mut(&mut self.items[index]);
        patch(item);
        item.common_mut().id = id.clone();
        true
    }

    /// True when both scenes hold the same allocation for `id`.
    pub fn shares_item_with(&self, other: &Scene, id: &ItemId) -> bool {
        match (self.index_of(id), other.index_of(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&self.items[a], &other.items[b]),
            _ => false,
        }
    }
}

impl FromIterator<Item> for Scene {
    /// Collects items, keeping the first of any duplicate ids.
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut scene = Scene::new();
        for item in iter {
            if !scene.contains(item.id()) {
                scene.items.push(Arc::new(item));
            }
        }
        scene
    }
}
