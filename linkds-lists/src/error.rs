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

use core::fmt;

/// Error returned by the index and value based operations of the
/// [`SinglyLinkedList`](crate::singlylinkedlist::list::SinglyLinkedList)
/// and the
/// [`DoublyLinkedList`](crate::doublylinkedlist::list::DoublyLinkedList).
///
/// A list is never modified by an operation that returns an error.
///
/// # Examples
/// ```
/// use linkds::lists::{ListError, SinglyLinkedList};
///
/// let list = SinglyLinkedList::from([1, 2, 3]);
/// assert_eq!(
///     list.get(3),
///     Err(ListError::IndexOutOfRange { index: 3, len: 3 })
/// );
/// assert_eq!(list.index_of(&9), Err(ListError::ValueNotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index is not within `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// No element of the list is equal to the value searched for.
    ValueNotFound,
}

impl ListError {
    /// Returns `true` if this error is the `IndexOutOfRange` variant.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this error is the `ValueNotFound` variant.
    pub fn is_value_not_found(&self) -> bool {
        matches!(self, Self::ValueNotFound)
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for list of length {}", index, len)
            }
            Self::ValueNotFound => write!(f, "value not found in list"),
        }
    }
}

impl std::error::Error for ListError {}

/// Returns `Ok(())` if `index` addresses an element of a list with
/// `len` elements.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ListError> {
    if index < len {
        return Ok(());
    }
    log::debug!("rejecting index {} for list of length {}", index, len);
    Err(ListError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 7 is out of range for list of length 2"
        );
        assert_eq!(ListError::ValueNotFound.to_string(), "value not found in list");
    }

    #[test]
    fn test_predicates() {
        let err = ListError::IndexOutOfRange { index: 0, len: 0 };
        assert!(err.is_index_out_of_range());
        assert!(!err.is_value_not_found());
        assert!(ListError::ValueNotFound.is_value_not_found());
        assert!(!ListError::ValueNotFound.is_index_out_of_range());
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(check_index(4, 5), Ok(()));
        assert_eq!(
            check_index(5, 5),
            Err(ListError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            check_index(0, 0),
            Err(ListError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(ListError::ValueNotFound);
        assert_eq!(err.to_string(), "value not found in list");
    }
}
