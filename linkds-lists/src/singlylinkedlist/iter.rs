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
    cursor::Position, singlylinkedlist::list::SinglyLinkedList,
    singlylinkedlist::node::InternalNode,
};
use core::marker::PhantomData;

/// An iterator over the values of the
/// [`SinglyLinkedList`](SinglyLinkedList), from head to tail.
///
/// This struct is created by the
/// [`.iter()`](SinglyLinkedList#method.iter) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// # Examples
/// ```
/// use linkds::lists::SinglyLinkedList;
/// use linkds::lists::singlylinkedlist::Iter;
///
/// let list = SinglyLinkedList::from([1, 2, 3]);
/// let mut iter: Iter<i32> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: Option<&'a InternalNode<T>>,
    remaining: usize,
}

/// An iterator over the values of the
/// [`SinglyLinkedList`](SinglyLinkedList) with mutable references
/// that allow the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](SinglyLinkedList#method.iter_mut) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// # Examples
/// ```
/// use linkds::lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::from([1, 2, 3]);
/// for e in list.iter_mut() {
///     *e *= 10;
/// }
/// assert_eq!(list.values(), vec![10, 20, 30]);
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    cursor: *mut InternalNode<T>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

/// An owning iterator that moves the values out of the
/// [`SinglyLinkedList`](SinglyLinkedList) from head to tail.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

/// A cursor over the values of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// The cursor starts before the first element. Every successful call
/// to [`move_next()`](#method.move_next) moves it to the next element
/// and once the last element has been passed the cursor rests after
/// the last element. [`begin()`](#method.begin) and
/// [`end()`](#method.end) reset the cursor to either of those two
/// positions.
///
/// The cursor only moves forward. Use the
/// [`DoublyLinkedList`](crate::doublylinkedlist::list::DoublyLinkedList)
/// to walk a list from the tail to the head.
///
/// # Examples
/// ```
/// use linkds::lists::SinglyLinkedList;
///
/// let list = SinglyLinkedList::from(['a', 'b']);
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.index(), None);
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.index(), Some(0));
/// assert_eq!(cursor.value(), Some(&'a'));
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.value(), Some(&'b'));
///
/// assert!(!cursor.move_next());
/// assert_eq!(cursor.value(), None);
///
/// cursor.begin();
/// assert!(cursor.move_next());
/// assert_eq!(cursor.value(), Some(&'a'));
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a SinglyLinkedList<T>,
    pos: Position<*const InternalNode<T>>,
}

fn non_null<T>(ptr: *mut InternalNode<T>) -> Option<*const InternalNode<T>> {
    if ptr.is_null() {
        None
    } else {
        Some(ptr as *const InternalNode<T>)
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a SinglyLinkedList<T>) -> Iter<'a, T> {
        Iter {
            cursor: unsafe { list.head.as_ref() },
            remaining: list.len(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut SinglyLinkedList<T>) -> IterMut<'a, T> {
        IterMut {
            cursor: list.head,
            remaining: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: SinglyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = unsafe { node.next.as_ref() };
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.cursor.is_null() {
            return None;
        }
        let node_ptr = self.cursor;
        unsafe {
            self.cursor = (*node_ptr).next;
            self.remaining -= 1;
            Some(&mut (*node_ptr).val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a SinglyLinkedList<T>) -> Cursor<'a, T> {
        Cursor {
            list,
            pos: Position::BeforeFirst,
        }
    }

    /// Moves the cursor before the first element. The next call to
    /// [`move_next()`](#method.move_next) moves it to the head.
    pub fn begin(&mut self) {
        self.pos = Position::BeforeFirst;
    }

    /// Moves the cursor after the last element.
    pub fn end(&mut self) {
        self.pos = Position::AfterLast;
    }

    /// Advances the cursor by one element and returns `true` if the
    /// cursor now points to an element. Returns `false` once the
    /// cursor has moved past the tail; the cursor then rests after
    /// the last element.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn move_next(&mut self) -> bool {
        let first = non_null(self.list.head);
        self.pos = self
            .pos
            .forward(first, |node| unsafe { non_null((*node).next) });
        self.pos.is_at()
    }

    /// Returns the index of the element the cursor points to or
    /// `None` if the cursor is before the first or after the last
    /// element.
    pub fn index(&self) -> Option<usize> {
        self.pos.index()
    }

    /// Returns a reference to the element the cursor points to or
    /// `None` if the cursor is before the first or after the last
    /// element.
    pub fn value(&self) -> Option<&'a T> {
        self.pos.node().map(|n| unsafe { &(*n).val })
    }
}
