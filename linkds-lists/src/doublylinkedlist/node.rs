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

/// Index of a slot in the [`FreeList`](super::fl::FreeList).
pub(super) type SlotId = usize;

#[derive(Debug, PartialEq, Eq)]
pub(super) struct InternalNode<T> {
    pub(super) val: T,
    pub(super) prev: Option<SlotId>,
    pub(super) next: Option<SlotId>,
}

/// A slot of the arena either holds a node that is linked into the
/// list or is part of the chain of free slots.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Slot<T> {
    Linked(InternalNode<T>),
    Free { next: Option<SlotId> },
}

impl<T> InternalNode<T> {
    pub(super) fn new(val: T) -> InternalNode<T> {
        InternalNode {
            val,
            prev: None,
            next: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let node = InternalNode::new(5u8);
        assert_eq!(node.val, 5);
        assert_eq!(node.prev, None);
        assert_eq!(node.next, None);
    }
}
