//! Sequences returned by list endpoints.

use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};

use super::ResponseMeta;

/// An ordered, mutable list of response items plus the metadata of the
/// response it came from.
///
/// Equality and hashing look at the items only.
#[derive(Debug, Clone)]
pub struct ResponseList<T> {
    items: Vec<T>,
    meta: ResponseMeta,
}

impl<T> crate::types::TwitterResponse for ResponseList<T> {
    fn response_meta(&self) -> &ResponseMeta {
        &self.meta
    }
}

impl<T> crate::types::meta::AttachMeta for ResponseList<T> {
    fn attach_meta(&mut self, meta: ResponseMeta) {
        self.meta = meta;
    }
}

impl<T> Default for ResponseList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> ResponseList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            meta: ResponseMeta::default(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Iterate starting at `index`. Empty when `index >= len()`.
    pub fn iter_from(&self, index: usize) -> std::slice::Iter<'_, T> {
        self.items.get(index..).unwrap_or_default().iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Replace the item at `index`, returning the previous one.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn set(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self.items[index], item)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// # Panics
    /// If `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Insert every item of `items` at `index`, keeping their order.
    ///
    /// # Panics
    /// If `index > len()`.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) {
        let tail = self.items.split_off(index);
        self.items.extend(items);
        self.items.extend(tail);
    }

    /// # Panics
    /// If `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn sub_list(&self, range: Range<usize>) -> &[T] {
        &self.items[range]
    }

    pub fn sub_list_mut(&mut self, range: Range<usize>) -> &mut [T] {
        &mut self.items[range]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> ResponseList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: PartialEq> ResponseList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    pub fn last_index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().rposition(|x| x == item)
    }

    /// Remove the first item equal to `item`. Returns whether one was found.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every item contained in `items`. Returns whether the list changed.
    pub fn remove_all(&mut self, items: &[T]) -> bool {
        let before = self.items.len();
        self.items.retain(|x| !items.contains(x));
        before != self.items.len()
    }

    /// Keep only the items contained in `items`. Returns whether the list changed.
    pub fn retain_all(&mut self, items: &[T]) -> bool {
        let before = self.items.len();
        self.items.retain(|x| items.contains(x));
        before != self.items.len()
    }
}

impl<T: PartialEq> PartialEq for ResponseList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ResponseList<T> {}

impl<T: Hash> Hash for ResponseList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T> Index<usize> for ResponseList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ResponseList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> From<Vec<T>> for ResponseList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ResponseList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for ResponseList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ResponseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResponseList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ResponseList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// A cursor-paginated page. Derefs to its [`ResponseList`].
#[derive(Debug, Clone, PartialEq)]
pub struct CursorList<T> {
    list: ResponseList<T>,
    pub previous_cursor: i64,
    pub next_cursor: i64,
}

impl<T> CursorList<T> {
    pub fn new(items: Vec<T>, previous_cursor: i64, next_cursor: i64) -> Self {
        Self {
            list: ResponseList::new(items),
            previous_cursor,
            next_cursor,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous_cursor != 0
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor != 0
    }

    pub fn into_list(self) -> ResponseList<T> {
        self.list
    }
}

impl<T> Deref for CursorList<T> {
    type Target = ResponseList<T>;

    fn deref(&self) -> &ResponseList<T> {
        &self.list
    }
}

impl<T> DerefMut for CursorList<T> {
    fn deref_mut(&mut self) -> &mut ResponseList<T> {
        &mut self.list
    }
}

impl<T> crate::types::TwitterResponse for CursorList<T> {
    fn response_meta(&self) -> &ResponseMeta {
        &self.list.meta
    }
}

impl<T> crate::types::meta::AttachMeta for CursorList<T> {
    fn attach_meta(&mut self, meta: ResponseMeta) {
        self.list.meta = meta;
    }
}
