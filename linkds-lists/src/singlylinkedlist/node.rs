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

use std::ptr;

#[derive(Debug, PartialEq, Eq)]
pub(super) struct InternalNode<T> {
    pub(super) val: T,
    pub(super) next: *mut InternalNode<T>,
}

impl<T> InternalNode<T> {
    pub(super) fn new(val: T) -> InternalNode<T> {
        InternalNode {
            val,
            next: ptr::null_mut(),
        }
    }

    /// Moves a new unlinked node holding `val` to the heap and
    /// returns the owning raw pointer.
    pub(super) fn alloc(val: T) -> *mut InternalNode<T> {
        Box::into_raw(Box::new(InternalNode::new(val)))
    }

    /// Takes back ownership of a node returned by
    /// [`alloc`](#method.alloc), drops it and returns its value.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `alloc`, must not have been released
    /// before and must no longer be reachable from any list.
    pub(super) unsafe fn release(ptr: *mut InternalNode<T>) -> T {
        Box::from_raw(ptr).val
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_alloc_release() {
        let ptr = InternalNode::alloc(String::from("node"));
        unsafe {
            assert!((*ptr).next.is_null());
            assert_eq!((*ptr).val, "node");
            assert_eq!(InternalNode::release(ptr), "node");
        }
    }
}
