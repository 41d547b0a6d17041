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

//! A doubly linked list that owns its nodes and can pre-allocate
//! memory for them. Values can be added and removed at either end in
//! constant time. Index based operations walk the list from the end
//! closest to the index.
//!
//! The [`Cursor`](iter::Cursor) of this list moves in both
//! directions and the [`Iter`](iter::Iter) can be reversed at any
//! point of the iteration.
pub(super) mod fl;
pub mod iter;
pub mod list;
pub(super) mod node;
