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

/// Creates a [`SinglyLinkedList`](crate::singlylinkedlist::list::SinglyLinkedList)
/// containing the arguments in order.
///
/// # Examples
/// ```
/// use linkds::lists::SinglyLinkedList;
/// use linkds::slist;
///
/// let list = slist![1, 2, 3];
/// assert_eq!(list.values(), vec![1, 2, 3]);
///
/// let empty: SinglyLinkedList<u8> = slist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! slist {
    () => {
        $crate::singlylinkedlist::list::SinglyLinkedList::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::singlylinkedlist::list::SinglyLinkedList::from([$($x),+])
    };
}

/// Creates a [`DoublyLinkedList`](crate::doublylinkedlist::list::DoublyLinkedList)
/// containing the arguments in order.
///
/// # Examples
/// ```
/// use linkds::lists::DoublyLinkedList;
/// use linkds::dlist;
///
/// let list = dlist![1, 2, 3];
/// assert_eq!(list.values(), vec![1, 2, 3]);
///
/// let empty: DoublyLinkedList<u8> = dlist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! dlist {
    () => {
        $crate::doublylinkedlist::list::DoublyLinkedList::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::doublylinkedlist::list::DoublyLinkedList::from([$($x),+])
    };
}
