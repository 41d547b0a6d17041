/*
   linkds-lists: Singly and doubly linked lists with index based
   access, in place reversal and cursors that walk the list in
   either direction.

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

#[macro_use]
mod macros;

pub(crate) mod cursor;
pub mod doublylinkedlist;
pub mod error;
pub mod singlylinkedlist;
