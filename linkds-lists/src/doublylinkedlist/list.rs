/*
   Doubly Linked List: A doubly linked list whose nodes live in a
   slot arena and link to each other by slot index. Unlinked slots
   are kept on a free list and reused, so the list does not have to
   allocate memory on every insert.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::{
    doublylinkedlist::fl,
    doublylinkedlist::iter::{Cursor, IntoIter, Iter, IterMut},
    doublylinkedlist::node::{Slot, SlotId},
    error::{check_index, ListError},
};
use core::{fmt, iter::FromIterator, mem};

const DEFAULT_CAPACITY: usize = 8;

/// A doubly linked list that owns the nodes and can pre-allocate
/// memory for them.
///
/// The nodes are stored in slots of an internal free list and refer
/// to their neighbors by slot index, so the list holds no pointers
/// and forms no reference cycles. Values can be pushed and popped at
/// either end in constant time. Index based operations walk the list
/// from whichever end is closer to the index and complete in
/// *O*(*n*) time. Indices are zero based and valid in `[0, len)`;
/// every operation that accepts an index returns
/// [`ListError::IndexOutOfRange`](ListError::IndexOutOfRange) for an
/// index outside that range and leaves the list unmodified.
///
/// Capacity is allocated up front and doubled when the list is full.
/// Removing elements returns their slots to the free list and does
/// not deallocate memory.
///
/// # Getting Started
///
/// ```
/// use linkds::lists::{DoublyLinkedList, ListError};
///
/// let mut list = DoublyLinkedList::new();
/// list.append([1, 2, 3]);
/// list.prepend([4]);
/// assert_eq!(list.values(), vec![4, 1, 2, 3]);
///
/// assert_eq!(list.get(0), Ok(&4));
/// assert!(list.get(999).is_err());
///
/// list.remove(2).unwrap();
/// assert!(list.contains_all(&[4, 1]));
/// assert!(!list.contains_all(&[4, 1, 3, 5]));
///
/// list.swap(0, 1).unwrap();
/// list.insert(1, [5, 6, 7, 8]).unwrap();
/// list.set(3, -1).unwrap();
/// assert_eq!(list.values(), vec![1, 4, 5, -1, 7, 8, 3]);
///
/// let mut cursor = list.cursor();
/// cursor.end();
/// let mut backwards = Vec::new();
/// while cursor.move_prev() {
///     backwards.push((cursor.index().unwrap(), *cursor.value().unwrap()));
/// }
/// assert_eq!(backwards[0], (6, 3));
/// assert_eq!(backwards[6], (0, 1));
///
/// assert_eq!(list.index_of(&8), Ok(5));
/// assert_eq!(list.index_of(&100), Err(ListError::ValueNotFound));
/// list.reverse();
/// assert_eq!(list.values(), vec![3, 8, 7, -1, 5, 4, 1]);
/// ```
pub struct DoublyLinkedList<T> {
    pub(super) head: Option<SlotId>,
    pub(super) tail: Option<SlotId>,
    len: usize,
    fl: fl::FreeList<T>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = DoublyLinkedList::with_capacity(self.capacity());
        list.append(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.append(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = DoublyLinkedList::with_capacity(N);
        list.append(IntoIterator::into_iter(values));
        list
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty linked list with a default capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let list = DoublyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty linked list with the specified capacity. The
    /// list will continue to allocate additional memory by doubling
    /// the capacity everytime the capacity is exceeded.
    ///
    /// However the list will not deallocate memory when elements are
    /// removed.
    ///
    /// If the capacity is set to 0, and the list is full, then new
    /// memory will be allocated for one new element the first time an
    /// element is added to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::with_capacity(10);
    /// for i in 0..10 {
    ///     // All these are pushed without any allocations
    ///     list.push_front(i);
    /// }
    ///
    /// assert_eq!(list.len(), 10);
    /// assert_eq!(list.capacity(), 10);
    ///
    /// // This will result in an allocation and the capacity will be doubled
    /// list.push_front(1);
    /// assert_eq!(list.len(), 11);
    /// assert_eq!(list.capacity(), 20);
    ///
    /// let mut list = DoublyLinkedList::<u8>::with_capacity(0);
    /// list.push_front(1);
    /// assert_eq!(list.capacity(), 1);
    /// list.push_front(1);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn with_capacity(capacity: usize) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            fl: fl::FreeList::new(capacity),
        }
    }

    /// Returns the number of elements the list can hold before new
    /// memory is allocated.
    pub fn capacity(&self) -> usize {
        self.len() + self.fl.len()
    }

    /// Returns a bidirectional iterator over the list. The iterator
    /// starts at the head and can be [reversed](Iter#method.reverse)
    /// at any point.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let list = DoublyLinkedList::from([5, 4, 3, 2, 1]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&5));
    /// assert_eq!(iter.next(), Some(&4));
    /// assert_eq!(iter.next(), Some(&3));
    /// iter = iter.reverse();
    /// assert_eq!(iter.next(), Some(&4));
    /// assert_eq!(iter.next(), Some(&5));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the list from head to tail with
    /// mutable references that allow the values to be modified.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    /// assert_eq!(list.values(), vec![101, 102, 103]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a [`Cursor`](Cursor) positioned before the first
    /// element of the list. Call [`end()`](Cursor#method.end) on the
    /// cursor to walk the list from the tail.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    ///
    /// let list = DoublyLinkedList::from([1, 4, 5]);
    /// let mut cursor = list.cursor();
    /// cursor.end();
    /// let mut seen = Vec::new();
    /// while cursor.move_prev() {
    ///     seen.push((cursor.index().unwrap(), *cursor.value().unwrap()));
    /// }
    /// assert_eq!(seen, vec![(2, 5), (1, 4), (0, 1)]);
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Removes and drops all the elements from this list. This has no
    /// effect on the allocated capacity of the list.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::with_capacity(10);
    /// list.append([1, 2, 3]);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        log::trace!("clearing doubly linked list of length {}", self.len);
        let mut cur = self.head;
        while let Some(id) = cur {
            cur = self.fl.node(id).next;
            self.fl.release(id);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a reference to the front (head) of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| self.val(id))
    }

    /// Returns a mutable reference to the front (head) of the list or
    /// `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.head?;
        Some(&mut self.fl.node_mut(id).val)
    }

    /// Returns a reference to the back (tail) of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| self.val(id))
    }

    /// Returns a mutable reference to the back (tail) of the list or
    /// `None` if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.tail?;
        Some(&mut self.fl.node_mut(id).val)
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the list
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the front (head) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn push_front(&mut self, elem: T) {
        self.push_head(elem);
    }

    /// Adds an element to the back (tail) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn push_back(&mut self, elem: T) {
        self.push_tail(elem);
    }

    /// Removes and returns the value at the front (head) of the list
    /// or `None` if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        Some(self.unlink(id))
    }

    /// Removes and returns the value at the back (tail) of the list
    /// or `None` if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        Some(self.unlink(id))
    }

    /// Adds the values to the back (tail) of the list in the order
    /// they are yielded.
    ///
    /// This operation should complete in *O*(*1*) time per value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::new();
    /// list.append([1, 2]);
    /// list.append(vec![3]);
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for val in values {
            self.push_tail(val);
        }
    }

    /// Adds the values to the front (head) of the list. The values
    /// keep their order, so the first value becomes the new head.
    ///
    /// This operation should complete in *O*(*1*) time per value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// list.prepend([3, 4]);
    /// assert_eq!(list.values(), vec![3, 4, 1, 2]);
    /// ```
    pub fn prepend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut at: Option<SlotId> = None;
        for val in values {
            at = Some(match at {
                None => self.push_head(val),
                Some(prev) => self.link_after(prev, val),
            });
        }
    }

    /// Returns a reference to the value at `index`.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::{DoublyLinkedList, ListError};
    /// let list = DoublyLinkedList::from([4, 1, 2]);
    /// assert_eq!(list.get(0), Ok(&4));
    /// assert_eq!(list.get(2), Ok(&2));
    /// assert_eq!(
    ///     list.get(999),
    ///     Err(ListError::IndexOutOfRange { index: 999, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let id = self.slot_at(index)?;
        Ok(self.val(id))
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let id = self.slot_at(index)?;
        Ok(&mut self.fl.node_mut(id).val)
    }

    /// Replaces the value at `index` and returns the value that was
    /// replaced.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 4, 5]);
    /// assert_eq!(list.set(1, -1), Ok(4));
    /// assert_eq!(list.values(), vec![1, -1, 5]);
    /// assert!(list.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, elem: T) -> Result<T, ListError> {
        let val = self.get_mut(index)?;
        Ok(mem::replace(val, elem))
    }

    /// Unlinks the node at `index` and returns its value. The slot of
    /// the node is returned to the free list.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([4, 1, 2, 3]);
    /// assert_eq!(list.remove(2), Ok(2));
    /// assert_eq!(list.values(), vec![4, 1, 3]);
    /// assert!(list.remove(3).is_err());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let id = self.slot_at(index)?;
        Ok(self.unlink(id))
    }

    /// Returns `true` if the list contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns `true` if every one of the given values is contained
    /// in the list. An empty slice of values is always contained.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let list = DoublyLinkedList::from([4, 1, 3]);
    /// assert!(list.contains_all(&[]));
    /// assert!(list.contains_all(&[4, 3]));
    /// assert!(!list.contains_all(&[4, 1, 3, 5]));
    /// ```
    pub fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq<T>,
    {
        values.iter().all(|v| self.contains(v))
    }

    /// Swaps the values at indices `i` and `j`. The nodes themselves
    /// stay in place. Swapping an index with itself has no effect.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([4, 1, 3]);
    /// list.swap(0, 1).unwrap();
    /// assert_eq!(list.values(), vec![1, 4, 3]);
    /// assert!(list.swap(3, 0).is_err());
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ListError> {
        let a = self.slot_at(i)?;
        let b = self.slot_at(j)?;
        self.fl.swap_vals(a, b);
        Ok(())
    }

    /// Inserts the values immediately after the element at `index`,
    /// keeping their order. Inserting no values always succeeds and
    /// has no effect.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 4, 3]);
    /// list.insert(1, [5, 6, 7, 8]).unwrap();
    /// assert_eq!(list.values(), vec![1, 4, 5, 6, 7, 8, 3]);
    /// assert!(list.insert(7, [9]).is_err());
    /// ```
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return Ok(());
        }
        let mut at = self.slot_at(index)?;
        for val in values {
            at = self.link_after(at, val);
        }
        Ok(())
    }

    /// Returns the index of the first element equal to the given
    /// value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::{DoublyLinkedList, ListError};
    /// let list = DoublyLinkedList::from([1, 4, 5, 4]);
    /// assert_eq!(list.index_of(&4), Ok(1));
    /// assert_eq!(list.index_of(&100), Err(ListError::ValueNotFound));
    /// ```
    pub fn index_of(&self, x: &T) -> Result<usize, ListError>
    where
        T: PartialEq<T>,
    {
        self.iter()
            .position(|e| e == x)
            .ok_or(ListError::ValueNotFound)
    }

    /// Reverses the order of the elements by swapping the links of
    /// every node.
    ///
    /// This operation should complete in *O*(*n*) time and uses
    /// constant additional space.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.values(), vec![3, 2, 1]);
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        log::trace!("reversing doubly linked list of length {}", self.len);
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = self.fl.node_mut(id);
            mem::swap(&mut node.prev, &mut node.next);
            // the old next link now sits in prev
            cur = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Returns the values of the list in order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub(super) fn next_slot(&self, id: SlotId) -> Option<SlotId> {
        self.fl.node(id).next
    }

    pub(super) fn prev_slot(&self, id: SlotId) -> Option<SlotId> {
        self.fl.node(id).prev
    }

    pub(super) fn val(&self, id: SlotId) -> &T {
        &self.fl.node(id).val
    }

    pub(super) fn slots_ptr(&mut self) -> *mut Slot<T> {
        self.fl.slots_ptr()
    }

    fn push_head(&mut self, elem: T) -> SlotId {
        let id = self.fl.acquire(elem);
        self.fl.node_mut(id).next = self.head;
        match self.head {
            Some(head) => self.fl.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    fn push_tail(&mut self, elem: T) -> SlotId {
        let id = self.fl.acquire(elem);
        self.fl.node_mut(id).prev = self.tail;
        match self.tail {
            Some(tail) => self.fl.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Links a new node holding `elem` immediately after the node in
    /// slot `at` and returns the slot of the new node.
    fn link_after(&mut self, at: SlotId, elem: T) -> SlotId {
        let id = self.fl.acquire(elem);
        let next = self.fl.node(at).next;
        {
            let node = self.fl.node_mut(id);
            node.prev = Some(at);
            node.next = next;
        }
        match next {
            Some(n) => self.fl.node_mut(n).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.fl.node_mut(at).next = Some(id);
        self.len += 1;
        id
    }

    /// Unlinks the node in slot `id`, repairs the links of both of
    /// its neighbors and returns the slot to the free list.
    fn unlink(&mut self, id: SlotId) -> T {
        let (prev, next) = {
            let node = self.fl.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.fl.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.fl.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.fl.release(id)
    }

    /// Returns the slot of the node at `index`, walking from the head
    /// or the tail, whichever is closer.
    fn slot_at(&self, index: usize) -> Result<SlotId, ListError> {
        check_index(index, self.len)?;
        let mut cur;
        if index < self.len / 2 {
            cur = self.head;
            for _ in 0..index {
                cur = cur.and_then(|id| self.next_slot(id));
            }
        } else {
            cur = self.tail;
            for _ in index + 1..self.len {
                cur = cur.and_then(|id| self.prev_slot(id));
            }
        }
        cur.ok_or(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // walks the list in both directions and checks every link against
    // the head, tail and length of the list
    macro_rules! assert_links {
        ($ll:ident) => {
            let mut forward = Vec::new();
            let mut prev = None;
            let mut cur = $ll.head;
            while let Some(id) = cur {
                assert_eq!($ll.prev_slot(id), prev);
                forward.push(id);
                prev = Some(id);
                cur = $ll.next_slot(id);
            }
            assert_eq!(prev, $ll.tail);
            assert_eq!(forward.len(), $ll.len());

            let mut backward = Vec::new();
            let mut cur = $ll.tail;
            while let Some(id) = cur {
                backward.push(id);
                cur = $ll.prev_slot(id);
            }
            backward.reverse();
            assert_eq!(forward, backward);
        };
    }

    macro_rules! assert_values {
        ($ll:ident, [$($v:expr),*]) => {
            assert_links!($ll);
            let expected: Vec<i32> = vec![$($v),*];
            assert_eq!($ll.values(), expected);
            assert_eq!($ll.len(), expected.len());
            assert_eq!($ll.front(), expected.first());
            assert_eq!($ll.back(), expected.last());
        };
    }

    macro_rules! assert_empty {
        ($ll:ident) => {
            assert!($ll.head.is_none());
            assert!($ll.tail.is_none());
            assert_eq!($ll.len(), 0);
            assert!($ll.is_empty());
        };
    }

    #[test]
    fn test_new() {
        let ll = DoublyLinkedList::<i32>::new();
        assert_empty!(ll);
        assert_eq!(ll.capacity(), DEFAULT_CAPACITY);
        let ll: DoublyLinkedList<i32> = Default::default();
        assert_empty!(ll);
    }

    #[test]
    fn test_push_front() {
        let mut ll = DoublyLinkedList::new();
        ll.push_front(11);
        assert_values!(ll, [11]);
        ll.push_front(12);
        assert_values!(ll, [12, 11]);
        ll.push_front(13);
        assert_values!(ll, [13, 12, 11]);
        ll.clear();
        assert_empty!(ll);
    }

    #[test]
    fn test_push_back() {
        let mut ll = DoublyLinkedList::new();
        ll.push_back(33);
        assert_values!(ll, [33]);
        ll.push_back(44);
        assert_values!(ll, [33, 44]);
        ll.push_back(55);
        assert_values!(ll, [33, 44, 55]);
    }

    #[test]
    fn test_pop() {
        let mut ll = DoublyLinkedList::from([1, 2, 3, 4]);
        assert_eq!(ll.pop_front(), Some(1));
        assert_values!(ll, [2, 3, 4]);
        assert_eq!(ll.pop_back(), Some(4));
        assert_values!(ll, [2, 3]);
        assert_eq!(ll.pop_back(), Some(3));
        assert_values!(ll, [2]);
        assert_eq!(ll.pop_front(), Some(2));
        assert_empty!(ll);
        assert_eq!(ll.pop_front(), None);
        assert_eq!(ll.pop_back(), None);
    }

    #[test]
    fn test_capacity() {
        let mut ll = DoublyLinkedList::with_capacity(4);
        ll.append([1, 2, 3, 4]);
        assert_eq!(ll.capacity(), 4);
        ll.push_back(5);
        assert_eq!(ll.capacity(), 8);
        assert_values!(ll, [1, 2, 3, 4, 5]);

        // removed slots are reused before the list grows again
        ll.remove(0).unwrap();
        ll.remove(0).unwrap();
        ll.append([6, 7, 8, 9, 10]);
        assert_eq!(ll.capacity(), 8);
        assert_values!(ll, [3, 4, 5, 6, 7, 8, 9, 10]);

        ll.clear();
        assert_eq!(ll.capacity(), 8);
        assert_empty!(ll);
    }

    #[test]
    fn test_capacity_zero() {
        let mut ll = DoublyLinkedList::with_capacity(0);
        assert_eq!(ll.capacity(), 0);
        ll.push_front(1);
        assert_eq!(ll.capacity(), 1);
        ll.push_front(2);
        assert_eq!(ll.capacity(), 2);
        ll.push_front(3);
        assert_eq!(ll.capacity(), 4);
        assert_values!(ll, [3, 2, 1]);
    }

    #[test]
    fn test_clear_releases_linked_slots() {
        use std::rc::Rc;
        let tracker = Rc::new(());
        let mut ll = DoublyLinkedList::with_capacity(16);
        ll.append([Rc::clone(&tracker), Rc::clone(&tracker), Rc::clone(&tracker)]);
        ll.remove(1).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);

        ll.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert_eq!(ll.fl.len(), 16);
        assert_eq!(ll.capacity(), 16);

        // every slot is free again, so refilling does not grow the list
        for _ in 0..16 {
            ll.push_back(Rc::clone(&tracker));
        }
        assert_eq!(ll.capacity(), 16);
        assert_eq!(ll.len(), 16);
        ll.clear();
        assert_empty!(ll);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_append() {
        let mut ll = DoublyLinkedList::new();
        ll.append(Vec::<i32>::new());
        assert_empty!(ll);
        ll.append([1, 2, 3]);
        assert_values!(ll, [1, 2, 3]);
        ll.extend(vec![4, 5]);
        assert_values!(ll, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_prepend() {
        let mut ll = DoublyLinkedList::new();
        ll.prepend([3, 4]);
        assert_values!(ll, [3, 4]);
        ll.prepend([1, 2]);
        assert_values!(ll, [1, 2, 3, 4]);
        ll.prepend(Vec::new());
        assert_values!(ll, [1, 2, 3, 4]);
        ll.prepend([0]);
        assert_values!(ll, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_get() {
        let ll = DoublyLinkedList::from([4, 1, 2, 3, 9]);
        for (i, v) in [4, 1, 2, 3, 9].iter().enumerate() {
            assert_eq!(ll.get(i), Ok(v));
        }
        assert_eq!(
            ll.get(5),
            Err(ListError::IndexOutOfRange { index: 5, len: 5 })
        );
        let empty = DoublyLinkedList::<i32>::new();
        assert!(empty.get(0).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn test_set() {
        let mut ll = DoublyLinkedList::from([1, 2, 3]);
        for i in 0..3 {
            assert!(ll.set(i, 10 * i as i32).is_ok());
            assert_eq!(ll.get(i), Ok(&(10 * i as i32)));
        }
        assert_values!(ll, [0, 10, 20]);
        assert!(ll.set(3, 7).is_err());
        assert_values!(ll, [0, 10, 20]);
    }

    #[test]
    fn test_remove() {
        let mut ll = DoublyLinkedList::from([4, 1, 2, 3]);
        assert_eq!(ll.remove(2), Ok(2));
        assert_values!(ll, [4, 1, 3]);
        assert_eq!(
            ll.remove(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_values!(ll, [4, 1, 3]);
        assert_eq!(ll.remove(2), Ok(3));
        assert_values!(ll, [4, 1]);
        assert_eq!(ll.remove(0), Ok(4));
        assert_values!(ll, [1]);
        assert_eq!(ll.remove(0), Ok(1));
        assert_empty!(ll);
        assert!(ll.remove(0).is_err());
    }

    #[test]
    fn test_contains() {
        let ll = DoublyLinkedList::from([4, 1, 3]);
        assert!(ll.contains(&1));
        assert!(!ll.contains(&2));
        assert!(ll.contains_all(&[]));
        assert!(ll.contains_all(&[4, 1]));
        assert!(ll.contains_all(&[4, 3]));
        assert!(!ll.contains_all(&[4, 1, 3, 5]));
    }

    #[test]
    fn test_swap() {
        let mut ll = DoublyLinkedList::from([4, 1, 3]);
        assert_eq!(ll.swap(0, 1), Ok(()));
        assert_values!(ll, [1, 4, 3]);
        assert_eq!(ll.swap(2, 0), Ok(()));
        assert_values!(ll, [3, 4, 1]);
        assert_eq!(ll.swap(1, 1), Ok(()));
        assert_values!(ll, [3, 4, 1]);
        assert!(ll.swap(0, 3).is_err());
        assert!(ll.swap(3, 3).is_err());
        assert_values!(ll, [3, 4, 1]);
    }

    #[test]
    fn test_insert() {
        let mut ll = DoublyLinkedList::from([1, 4, 3]);
        assert_eq!(ll.insert(1, [5, 6, 7, 8]), Ok(()));
        assert_values!(ll, [1, 4, 5, 6, 7, 8, 3]);
        assert_eq!(ll.insert(6, [9, 10]), Ok(()));
        assert_values!(ll, [1, 4, 5, 6, 7, 8, 3, 9, 10]);
        assert_eq!(ll.insert(0, [0]), Ok(()));
        assert_values!(ll, [1, 0, 4, 5, 6, 7, 8, 3, 9, 10]);
        assert_eq!(
            ll.insert(10, [12]),
            Err(ListError::IndexOutOfRange { index: 10, len: 10 })
        );
        assert_eq!(ll.len(), 10);

        let mut empty = DoublyLinkedList::<i32>::new();
        assert_eq!(empty.insert(3, Vec::new()), Ok(()));
        assert!(empty.insert(0, [1]).is_err());
        assert_empty!(empty);
    }

    #[test]
    fn test_index_of() {
        let ll = DoublyLinkedList::from([1, 4, 5, -1, 7, 8, 3]);
        assert_eq!(ll.index_of(&1), Ok(0));
        assert_eq!(ll.index_of(&8), Ok(5));
        assert_eq!(ll.index_of(&100), Err(ListError::ValueNotFound));
        for v in ll.values() {
            assert_eq!(ll.get(ll.index_of(&v).unwrap()), Ok(&v));
        }
    }

    #[test]
    fn test_reverse() {
        let mut ll = DoublyLinkedList::<i32>::new();
        ll.reverse();
        assert_empty!(ll);
        ll.push_back(1);
        ll.reverse();
        assert_values!(ll, [1]);
        ll.append([2, 3, 4]);
        ll.reverse();
        assert_values!(ll, [4, 3, 2, 1]);
        ll.reverse();
        assert_values!(ll, [1, 2, 3, 4]);
        ll.reverse();
        ll.push_back(0);
        ll.push_front(5);
        assert_values!(ll, [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_traits() {
        let ll = DoublyLinkedList::from([1, 2, 3]);
        let copy = ll.clone();
        assert_eq!(ll, copy);
        assert_ne!(ll, DoublyLinkedList::from([3, 2, 1]));
        assert_eq!(format!("{:?}", ll), "[1, 2, 3]");
        let collected: DoublyLinkedList<i32> = (1..=3).collect();
        assert_eq!(collected, ll);
    }

    #[test]
    fn test_macro() {
        let ll = dlist![1, 2, 3];
        assert_values!(ll, [1, 2, 3]);
        let ll: DoublyLinkedList<i32> = dlist![];
        assert_empty!(ll);
    }

    #[test]
    fn test_drop_values() {
        use std::rc::Rc;
        let tracker = Rc::new(());
        {
            let mut ll = DoublyLinkedList::with_capacity(2);
            for _ in 0..10 {
                ll.push_back(Rc::clone(&tracker));
            }
            drop(ll.remove(3));
            assert_eq!(Rc::strong_count(&tracker), 10);
            ll.pop_back();
            assert_eq!(Rc::strong_count(&tracker), 9);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);

        let mut ll = DoublyLinkedList::new();
        ll.push_back(Rc::clone(&tracker));
        ll.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_scenario() {
        let mut ll = DoublyLinkedList::new();
        ll.append([1]);
        ll.append([2]);
        ll.append([3]);
        ll.prepend([4]);
        assert_values!(ll, [4, 1, 2, 3]);
        assert_eq!(ll.get(0), Ok(&4));
        assert!(ll.get(999).is_err());
        assert_eq!(ll.remove(2), Ok(2));
        assert_values!(ll, [4, 1, 3]);
        assert_eq!(ll.swap(0, 1), Ok(()));
        assert_eq!(ll.insert(1, [5, 6, 7, 8]), Ok(()));
        assert_eq!(ll.set(3, -1), Ok(6));
        assert_values!(ll, [1, 4, 5, -1, 7, 8, 3]);
        assert_eq!(ll.index_of(&1), Ok(0));
        assert_eq!(ll.index_of(&8), Ok(5));
        assert!(ll.index_of(&100).unwrap_err().is_value_not_found());
        ll.reverse();
        assert_values!(ll, [3, 8, 7, -1, 5, 4, 1]);
        assert_eq!(ll.len(), 7);
        ll.clear();
        assert_empty!(ll);
    }
}
