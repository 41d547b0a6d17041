//! Singly and doubly linked lists with index based access, in place
//! reversal and cursors that walk the list in either direction.
//!
//! # Getting Started
//!
//! ```
//! use linkds::lists::{DoublyLinkedList, ListError};
//!
//! let mut list = DoublyLinkedList::new();
//! list.append([1, 2, 3]);
//! list.prepend([4]);
//! assert_eq!(list.get(0), Ok(&4));
//! assert!(list.get(999).unwrap_err().is_index_out_of_range());
//!
//! list.remove(2).unwrap();
//! assert!(list.contains_all(&[]));
//! assert!(list.contains_all(&[4, 1]));
//! assert!(!list.contains_all(&[4, 1, 3, 5]));
//!
//! list.swap(0, 1).unwrap();
//! list.insert(1, [5, 6, 7, 8]).unwrap();
//! list.set(3, -1).unwrap();
//! assert_eq!(list.values(), vec![1, 4, 5, -1, 7, 8, 3]);
//!
//! let mut cursor = list.cursor();
//! cursor.begin();
//! while cursor.move_next() {
//!     println!("{} {}", cursor.index().unwrap(), cursor.value().unwrap());
//! }
//! cursor.end();
//! while cursor.move_prev() {
//!     println!("{} {}", cursor.index().unwrap(), cursor.value().unwrap());
//! }
//!
//! assert_eq!(list.index_of(&1), Ok(0));
//! assert_eq!(list.index_of(&8), Ok(5));
//! assert_eq!(list.index_of(&100), Err(ListError::ValueNotFound));
//!
//! list.reverse();
//! assert!(!list.is_empty());
//! assert_eq!(list.len(), 7);
//! assert_eq!(list.values(), vec![3, 8, 7, -1, 5, 4, 1]);
//! list.clear();
//! ```

/// Singly and doubly linked lists and the error returned by their
/// index and value based operations.
pub mod lists {
    pub use linkds_lists::doublylinkedlist::list::DoublyLinkedList;
    pub use linkds_lists::error::ListError;
    pub use linkds_lists::singlylinkedlist::list::SinglyLinkedList;

    /// This module contains structs specific to the [`SinglyLinkedList`]
    pub mod singlylinkedlist {
        pub use linkds_lists::singlylinkedlist::iter::Cursor;
        pub use linkds_lists::singlylinkedlist::iter::IntoIter;
        pub use linkds_lists::singlylinkedlist::iter::Iter;
        pub use linkds_lists::singlylinkedlist::iter::IterMut;
    }

    /// This module contains structs specific to the [`DoublyLinkedList`]
    pub mod doublylinkedlist {
        pub use linkds_lists::doublylinkedlist::iter::Cursor;
        pub use linkds_lists::doublylinkedlist::iter::IntoIter;
        pub use linkds_lists::doublylinkedlist::iter::Iter;
        pub use linkds_lists::doublylinkedlist::iter::IterMut;
    }
}

pub use linkds_lists::dlist;
pub use linkds_lists::slist;
