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

//! A singly linked list that owns its nodes. Values can be appended
//! and prepended in constant time and every other index based
//! operation walks the list from the head.
//!
//! The list only links forward, so its [`Cursor`](iter::Cursor)
//! only moves from the head towards the tail.
pub mod iter;
pub mod list;
pub(super) mod node;
