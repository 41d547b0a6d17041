/*
   Singly Linked List: A singly linked list that owns its nodes
   through a chain of forward pointers and keeps a pointer to the
   tail so that values can be appended in constant time.

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
    error::{check_index, ListError},
    singlylinkedlist::iter::{Cursor, IntoIter, Iter, IterMut},
    singlylinkedlist::node::InternalNode,
};
use core::{fmt, iter::FromIterator, marker::PhantomData, mem, ptr};

/// A singly linked list that owns its nodes.
///
/// The list keeps a pointer to both the head and the tail, so values
/// can be added at either end in constant time. Index based
/// operations walk the list from the head and complete in *O*(*n*)
/// time. Indices are zero based and valid in `[0, len)`; every
/// operation that accepts an index returns
/// [`ListError::IndexOutOfRange`](ListError::IndexOutOfRange) for an
/// index outside that range and leaves the list unmodified.
///
/// # Getting Started
///
/// ```
/// use linkds::lists::{ListError, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.append([1, 2, 3]);
/// list.prepend([4]);
/// assert_eq!(list.values(), vec![4, 1, 2, 3]);
///
/// assert_eq!(list.get(0), Ok(&4));
/// assert!(list.get(999).is_err());
///
/// list.remove(2).unwrap();
/// list.swap(0, 1).unwrap();
/// list.insert(1, [5, 6, 7, 8]).unwrap();
/// list.set(3, -1).unwrap();
/// assert_eq!(list.values(), vec![1, 4, 5, -1, 7, 8, 3]);
///
/// assert_eq!(list.index_of(&8), Ok(5));
/// assert_eq!(list.index_of(&100), Err(ListError::ValueNotFound));
///
/// list.reverse();
/// assert_eq!(list.values(), vec![3, 8, 7, -1, 5, 4, 1]);
/// ```
pub struct SinglyLinkedList<T> {
    pub(super) head: *mut InternalNode<T>,
    pub(super) tail: *mut InternalNode<T>,
    len: usize,
    _marker: PhantomData<Box<InternalNode<T>>>,
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.append(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        IntoIterator::into_iter(values).collect()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let list = SinglyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over the values of the list from head to
    /// tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over the values of the list from head to
    /// tail with mutable references that allow the values to be
    /// modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a [`Cursor`](Cursor) positioned before the first
    /// element of the list.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 4, 5]);
    /// let mut cursor = list.cursor();
    /// let mut seen = Vec::new();
    /// while cursor.move_next() {
    ///     seen.push((cursor.index().unwrap(), *cursor.value().unwrap()));
    /// }
    /// assert_eq!(seen, vec![(0, 1), (1, 4), (2, 5)]);
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Removes and drops all the elements from this list.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        log::trace!("clearing singly linked list of length {}", self.len);
        self.release_all();
    }

    /// Returns a reference to the front (head) of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn front(&self) -> Option<&T> {
        unsafe { self.head.as_ref().map(|node| &node.val) }
    }

    /// Returns a mutable reference to the front (head) of the list or
    /// `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        unsafe { self.head.as_mut().map(|node| &mut node.val) }
    }

    /// Returns a reference to the back (tail) of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn back(&self) -> Option<&T> {
        unsafe { self.tail.as_ref().map(|node| &node.val) }
    }

    /// Returns a mutable reference to the back (tail) of the list or
    /// `None` if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        unsafe { self.tail.as_mut().map(|node| &mut node.val) }
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
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
        let ptr = InternalNode::alloc(elem);
        unsafe {
            (*ptr).next = self.head;
        }
        self.head = ptr;
        if self.tail.is_null() {
            self.tail = ptr;
        }
        self.len += 1;
    }

    /// Adds an element to the back (tail) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    pub fn push_back(&mut self, elem: T) {
        let ptr = InternalNode::alloc(elem);
        if self.tail.is_null() {
            self.head = ptr;
        } else {
            unsafe {
                (*self.tail).next = ptr;
            }
        }
        self.tail = ptr;
        self.len += 1;
    }

    /// Removes and returns the value at the front (head) of the list
    /// or `None` if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        let ptr = self.head;
        unsafe {
            self.head = (*ptr).next;
            if self.head.is_null() {
                self.tail = ptr::null_mut();
            }
            self.len -= 1;
            Some(InternalNode::release(ptr))
        }
    }

    /// Adds the values to the back (tail) of the list in the order
    /// they are yielded.
    ///
    /// This operation should complete in *O*(*1*) time per value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.append([1, 2]);
    /// list.append(vec![3]);
    /// assert_eq!(list.values(), vec![1, 2, 3]);
    /// ```
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for val in values {
            self.push_back(val);
        }
    }

    /// Adds the values to the front (head) of the list. The values
    /// keep their order, so the first value becomes the new head.
    ///
    /// This operation should complete in *O*(*1*) time per value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 2]);
    /// list.prepend([3, 4]);
    /// assert_eq!(list.values(), vec![3, 4, 1, 2]);
    /// ```
    pub fn prepend<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let segment: SinglyLinkedList<T> = values.into_iter().collect();
        self.splice_after(ptr::null_mut(), segment);
    }

    /// Returns a reference to the value at `index`.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::{ListError, SinglyLinkedList};
    /// let list = SinglyLinkedList::from([4, 1, 2]);
    /// assert_eq!(list.get(0), Ok(&4));
    /// assert_eq!(list.get(2), Ok(&2));
    /// assert_eq!(
    ///     list.get(999),
    ///     Err(ListError::IndexOutOfRange { index: 999, len: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.len)?;
        unsafe { Ok(&(*self.ptr_at(index)).val) }
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        check_index(index, self.len)?;
        unsafe { Ok(&mut (*self.ptr_at(index)).val) }
    }

    /// Replaces the value at `index` and returns the value that was
    /// replaced.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 4, 5]);
    /// assert_eq!(list.set(1, -1), Ok(4));
    /// assert_eq!(list.values(), vec![1, -1, 5]);
    /// assert!(list.set(3, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, elem: T) -> Result<T, ListError> {
        let val = self.get_mut(index)?;
        Ok(mem::replace(val, elem))
    }

    /// Unlinks the node at `index` and returns its value.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([4, 1, 2, 3]);
    /// assert_eq!(list.remove(2), Ok(2));
    /// assert_eq!(list.values(), vec![4, 1, 3]);
    /// assert!(list.remove(3).is_err());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len)?;
        unsafe {
            let ptr;
            if index == 0 {
                ptr = self.head;
                self.head = (*ptr).next;
                if self.tail == ptr {
                    self.tail = ptr::null_mut();
                }
            } else {
                let prev = self.ptr_at(index - 1);
                ptr = (*prev).next;
                (*prev).next = (*ptr).next;
                if self.tail == ptr {
                    self.tail = prev;
                }
            }
            self.len -= 1;
            Ok(InternalNode::release(ptr))
        }
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
    /// use linkds::lists::SinglyLinkedList;
    /// let list = SinglyLinkedList::from([4, 1, 3]);
    /// assert!(list.contains_all(&[]));
    /// assert!(list.contains_all(&[4, 1]));
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
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([4, 1, 3]);
    /// list.swap(0, 1).unwrap();
    /// assert_eq!(list.values(), vec![1, 4, 3]);
    /// assert!(list.swap(0, 3).is_err());
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ListError> {
        check_index(i, self.len)?;
        check_index(j, self.len)?;
        if i == j {
            return Ok(());
        }
        unsafe {
            let a = self.ptr_at(i);
            let b = self.ptr_at(j);
            mem::swap(&mut (*a).val, &mut (*b).val);
        }
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
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 4, 3]);
    /// list.insert(1, [5, 6, 7, 8]).unwrap();
    /// assert_eq!(list.values(), vec![1, 4, 5, 6, 7, 8, 3]);
    /// assert!(list.insert(7, [9]).is_err());
    /// ```
    pub fn insert<I>(&mut self, index: usize, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let segment: SinglyLinkedList<T> = values.into_iter().collect();
        if segment.is_empty() {
            return Ok(());
        }
        check_index(index, self.len)?;
        let at = self.ptr_at(index);
        self.splice_after(at, segment);
        Ok(())
    }

    /// Returns the index of the first element equal to the given
    /// value.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::{ListError, SinglyLinkedList};
    /// let list = SinglyLinkedList::from([1, 4, 5, 4]);
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

    /// Reverses the order of the elements by relinking the nodes.
    ///
    /// This operation should complete in *O*(*n*) time and uses
    /// constant additional space.
    ///
    /// # Examples
    /// ```
    /// use linkds::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.values(), vec![3, 2, 1]);
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    pub fn reverse(&mut self) {
        log::trace!("reversing singly linked list of length {}", self.len);
        let mut prev: *mut InternalNode<T> = ptr::null_mut();
        let mut cur = self.head;
        self.tail = self.head;
        while !cur.is_null() {
            unsafe {
                let next = (*cur).next;
                (*cur).next = prev;
                prev = cur;
                cur = next;
            }
        }
        self.head = prev;
    }

    /// Returns the values of the list in order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the pointer to the node at `index`, which must be less
    /// than the length of the list.
    fn ptr_at(&self, index: usize) -> *mut InternalNode<T> {
        if index + 1 == self.len {
            return self.tail;
        }
        let mut cur = self.head;
        for _ in 0..index {
            unsafe {
                cur = (*cur).next;
            }
        }
        cur
    }

    /// Moves all the nodes of `segment` into this list immediately
    /// after the node `at`, or to the front of the list if `at` is
    /// null. `at` must be null or a node of this list.
    fn splice_after(&mut self, at: *mut InternalNode<T>, mut segment: SinglyLinkedList<T>) {
        if segment.head.is_null() {
            return;
        }
        unsafe {
            if at.is_null() {
                (*segment.tail).next = self.head;
                self.head = segment.head;
                if self.tail.is_null() {
                    self.tail = segment.tail;
                }
            } else {
                (*segment.tail).next = (*at).next;
                (*at).next = segment.head;
                if self.tail == at {
                    self.tail = segment.tail;
                }
            }
        }
        self.len += segment.len;
        segment.head = ptr::null_mut();
        segment.tail = ptr::null_mut();
        segment.len = 0;
    }

    fn release_all(&mut self) {
        let mut cur = self.head;
        while !cur.is_null() {
            unsafe {
                let next = (*cur).next;
                drop(InternalNode::release(cur));
                cur = next;
            }
        }
        self.head = ptr::null_mut();
        self.tail = ptr::null_mut();
        self.len = 0;
    }
}
