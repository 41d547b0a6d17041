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

use crate::doublylinkedlist::node::{InternalNode, Slot, SlotId};
use core::mem;

/// The arena of slots that holds the nodes of a
/// [`DoublyLinkedList`](super::list::DoublyLinkedList). Slots that
/// are not linked into the list are chained together through their
/// `next` index and handed out again by [`acquire`](#method.acquire).
#[derive(Debug)]
pub(super) struct FreeList<T> {
    len: usize,
    head: Option<SlotId>,
    slots: Vec<Slot<T>>,
}

impl<T> FreeList<T> {
    pub(super) fn new(capacity: usize) -> FreeList<T> {
        let mut fl = FreeList {
            len: 0,
            head: None,
            slots: Vec::with_capacity(capacity),
        };
        fl.alloc(capacity);
        fl
    }

    /// Returns the number of free slots.
    pub(super) fn len(&self) -> usize {
        self.len
    }

    fn alloc(&mut self, size: usize) {
        for _ in 0..size {
            let id = self.slots.len();
            self.slots.push(Slot::Free { next: None });
            self.push_head(id);
        }
    }

    fn push_head(&mut self, id: SlotId) {
        self.slots[id] = Slot::Free { next: self.head };
        self.head = Some(id);
        self.len += 1;
    }

    fn pop_head(&mut self) -> Option<SlotId> {
        let id = self.head?;
        match self.slots[id] {
            Slot::Free { next } => self.head = next,
            Slot::Linked(_) => unreachable!("slot {} is linked but on the free list", id),
        }
        self.len -= 1;
        Some(id)
    }

    /// Moves `val` into a free slot and returns the id of that slot.
    /// The free list grows if there are no free slots left.
    pub(super) fn acquire(&mut self, val: T) -> SlotId {
        if self.head.is_none() {
            self.grow();
        }

        match self.pop_head() {
            Some(id) => {
                self.slots[id] = Slot::Linked(InternalNode::new(val));
                id
            }
            None => panic!("alloc failed on acquire"),
        }
    }

    /// Returns the slot to the free list and the value it held to
    /// the caller.
    pub(super) fn release(&mut self, id: SlotId) -> T {
        let slot = mem::replace(&mut self.slots[id], Slot::Free { next: None });
        self.push_head(id);
        match slot {
            Slot::Linked(node) => node.val,
            Slot::Free { .. } => unreachable!("slot {} released twice", id),
        }
    }

    pub(super) fn node(&self, id: SlotId) -> &InternalNode<T> {
        match &self.slots[id] {
            Slot::Linked(node) => node,
            Slot::Free { .. } => unreachable!("slot {} is not linked", id),
        }
    }

    pub(super) fn node_mut(&mut self, id: SlotId) -> &mut InternalNode<T> {
        match &mut self.slots[id] {
            Slot::Linked(node) => node,
            Slot::Free { .. } => unreachable!("slot {} is not linked", id),
        }
    }

    /// Returns a raw pointer to the first slot. Slots reached through
    /// the pointer stay valid until the free list is modified.
    pub(super) fn slots_ptr(&mut self) -> *mut Slot<T> {
        self.slots.as_mut_ptr()
    }

    /// Swaps the values held by two linked slots.
    pub(super) fn swap_vals(&mut self, a: SlotId, b: SlotId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (left, right) = self.slots.split_at_mut(hi);
        match (&mut left[lo], &mut right[0]) {
            (Slot::Linked(x), Slot::Linked(y)) => mem::swap(&mut x.val, &mut y.val),
            _ => unreachable!("cannot swap values of free slots {} and {}", a, b),
        }
    }

    fn grow(&mut self) {
        let extra = if self.slots.is_empty() {
            1
        } else {
            self.slots.len()
        };
        log::trace!(
            "growing free list from {} to {} slots",
            self.slots.len(),
            self.slots.len() + extra
        );
        self.alloc(extra);
    }
}
