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
    cursor::Position, doublylinkedlist::list::DoublyLinkedList,
    doublylinkedlist::node::{Slot, SlotId},
};
use core::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IterDirection {
    HeadToTail,
    TailToHead,
}

/// A bidirectional iterator over the values of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// This struct is created by the
/// [`.iter()`](DoublyLinkedList#method.iter) method of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// # Examples
/// ```
/// use linkds::lists::DoublyLinkedList;
/// use linkds::lists::doublylinkedlist::Iter;
///
/// let list = DoublyLinkedList::from([1, 2, 3, 4, 5]);
///
/// let mut iter: Iter<i32> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&3));
/// iter = iter.reverse();
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
///
/// let backwards: Vec<&i32> = list.iter().reverse().collect();
/// assert_eq!(backwards, vec![&5, &4, &3, &2, &1]);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Option<SlotId>,
    index: usize,
    last: Option<(SlotId, usize)>,
    dir: IterDirection,
}

/// An iterator over the values of the
/// [`DoublyLinkedList`](DoublyLinkedList) from head to tail with
/// mutable references that allow the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](DoublyLinkedList#method.iter_mut) method of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// # Examples
/// ```
/// use linkds::lists::DoublyLinkedList;
/// use linkds::lists::doublylinkedlist::IterMut;
///
/// let mut list = DoublyLinkedList::from([1, 2, 3]);
/// let iter_mut: IterMut<i32> = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
/// assert_eq!(list.values(), vec![101, 102, 103]);
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    cursor: Option<SlotId>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

/// An owning iterator that moves the values out of the
/// [`DoublyLinkedList`](DoublyLinkedList). It can be consumed from
/// either end.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

/// A bidirectional cursor over the values of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// A cursor is either positioned on an element, before the first
/// element or after the last element. [`begin()`](#method.begin) and
/// [`end()`](#method.end) move the cursor to before the first and
/// after the last element. [`move_next()`](#method.move_next) and
/// [`move_prev()`](#method.move_prev) step one element towards the
/// tail or the head and return `false` once they step past the end of
/// the list, leaving the cursor after the last or before the first
/// element.
///
/// The cursor borrows the list, so the list cannot be modified while
/// a cursor is in use.
///
/// # Examples
/// ```
/// use linkds::lists::DoublyLinkedList;
///
/// let list = DoublyLinkedList::from(['a', 'b', 'c']);
/// let mut cursor = list.cursor();
///
/// assert!(cursor.move_next());
/// assert!(cursor.move_next());
/// assert_eq!(cursor.index(), Some(1));
/// assert_eq!(cursor.value(), Some(&'b'));
///
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.value(), Some(&'a'));
/// assert!(!cursor.move_prev());
/// assert_eq!(cursor.index(), None);
///
/// cursor.end();
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.index(), Some(2));
/// assert_eq!(cursor.value(), Some(&'c'));
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a DoublyLinkedList<T>,
    pos: Position<SlotId>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a DoublyLinkedList<T>) -> Iter<'a, T> {
        Iter {
            list,
            cursor: list.head,
            index: 0,
            last: None,
            dir: IterDirection::HeadToTail,
        }
    }

    /// Reverses the direction of the iterator. The iterator continues
    /// with the neighbor of the value it returned last, or from the
    /// opposite end of the list if it has not returned a value yet.
    pub fn reverse(mut self) -> Self {
        self.dir = match self.dir {
            IterDirection::HeadToTail => IterDirection::TailToHead,
            IterDirection::TailToHead => IterDirection::HeadToTail,
        };
        match self.last {
            Some((id, index)) => {
                self.cursor = self.step(id);
                self.index = self.step_index(index);
            }
            None => match self.dir {
                IterDirection::HeadToTail => {
                    self.cursor = self.list.head;
                    self.index = 0;
                }
                IterDirection::TailToHead => {
                    self.cursor = self.list.tail;
                    self.index = self.list.len().wrapping_sub(1);
                }
            },
        }
        self
    }

    fn step(&self, id: SlotId) -> Option<SlotId> {
        match self.dir {
            IterDirection::HeadToTail => self.list.next_slot(id),
            IterDirection::TailToHead => self.list.prev_slot(id),
        }
    }

    // the index is only read while the cursor points to a node, so
    // stepping back from the head may wrap
    fn step_index(&self, index: usize) -> usize {
        match self.dir {
            IterDirection::HeadToTail => index + 1,
            IterDirection::TailToHead => index.wrapping_sub(1),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut DoublyLinkedList<T>) -> IterMut<'a, T> {
        IterMut {
            cursor: list.head,
            remaining: list.len(),
            slots: list.slots_ptr(),
            _marker: PhantomData,
        }
    }
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: DoublyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let id = self.cursor?;
        self.cursor = self.step(id);
        self.last = Some((id, self.index));
        self.index = self.step_index(self.index);
        let list: &'a DoublyLinkedList<T> = self.list;
        Some(list.val(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.cursor, self.dir) {
            (None, _) => 0,
            (Some(_), IterDirection::HeadToTail) => self.list.len() - self.index,
            (Some(_), IterDirection::TailToHead) => self.index + 1,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        let id = self.cursor?;
        // only the slot being yielded is borrowed, the slots already
        // handed out are not touched again
        let slot = unsafe { &mut *self.slots.add(id) };
        match slot {
            Slot::Linked(node) => {
                self.cursor = node.next;
                self.remaining -= 1;
                Some(&mut node.val)
            }
            Slot::Free { .. } => unreachable!("slot {} is not linked", id),
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a DoublyLinkedList<T>) -> Cursor<'a, T> {
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

    /// Moves the cursor after the last element. The next call to
    /// [`move_prev()`](#method.move_prev) moves it to the tail.
    pub fn end(&mut self) {
        self.pos = Position::AfterLast;
    }

    /// Moves the cursor one element towards the tail and returns
    /// `true` if the cursor now points to an element. Returns `false`
    /// once the cursor has moved past the tail; the cursor then rests
    /// after the last element.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn move_next(&mut self) -> bool {
        let list = self.list;
        self.pos = self.pos.forward(list.head, |id| list.next_slot(id));
        self.pos.is_at()
    }

    /// Moves the cursor one element towards the head and returns
    /// `true` if the cursor now points to an element. Returns `false`
    /// once the cursor has moved past the head; the cursor then rests
    /// before the first element.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn move_prev(&mut self) -> bool {
        let list = self.list;
        let last = list.tail.map(|id| (list.len() - 1, id));
        self.pos = self.pos.backward(last, |id| list.prev_slot(id));
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
        let list = self.list;
        self.pos.node().map(|id| list.val(id))
    }
}
