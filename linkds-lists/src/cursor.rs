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

/// Position of a cursor within a list. `H` is the list specific
/// reference to the node at the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position<H> {
    BeforeFirst,
    At { index: usize, node: H },
    AfterLast,
}

impl<H: Copy> Position<H> {
    pub(crate) fn index(&self) -> Option<usize> {
        match self {
            Position::At { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn node(&self) -> Option<H> {
        match self {
            Position::At { node, .. } => Some(*node),
            _ => None,
        }
    }

    pub(crate) fn is_at(&self) -> bool {
        matches!(self, Position::At { .. })
    }

    /// Steps one element towards the tail. `first` is the head of the
    /// list and `next` resolves the successor of a node.
    pub(crate) fn forward<F>(self, first: Option<H>, next: F) -> Position<H>
    where
        F: FnOnce(H) -> Option<H>,
    {
        match self {
            Position::BeforeFirst => match first {
                Some(node) => Position::At { index: 0, node },
                None => Position::AfterLast,
            },
            Position::At { index, node } => match next(node) {
                Some(n) => Position::At {
                    index: index + 1,
                    node: n,
                },
                None => Position::AfterLast,
            },
            Position::AfterLast => Position::AfterLast,
        }
    }

    /// Steps one element towards the head. `last` is the index and
    /// node of the tail and `prev` resolves the predecessor of a
    /// node.
    pub(crate) fn backward<F>(self, last: Option<(usize, H)>, prev: F) -> Position<H>
    where
        F: FnOnce(H) -> Option<H>,
    {
        match self {
            Position::BeforeFirst => Position::BeforeFirst,
            Position::At { index, node } => match prev(node) {
                // a node with a predecessor is never at index 0
                Some(p) => Position::At {
                    index: index - 1,
                    node: p,
                },
                None => Position::BeforeFirst,
            },
            Position::AfterLast => match last {
                Some((index, node)) => Position::At { index, node },
                None => Position::BeforeFirst,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // positions over the list [10, 11, 12] where the node is the value
    fn next(n: u8) -> Option<u8> {
        if n < 12 {
            Some(n + 1)
        } else {
            None
        }
    }

    fn prev(n: u8) -> Option<u8> {
        if n > 10 {
            Some(n - 1)
        } else {
            None
        }
    }

    #[test]
    fn test_forward() {
        let mut pos = Position::BeforeFirst;
        let mut seen = Vec::new();
        loop {
            pos = pos.forward(Some(10u8), next);
            if !pos.is_at() {
                break;
            }
            seen.push((pos.index().unwrap(), pos.node().unwrap()));
        }
        assert_eq!(seen, vec![(0, 10), (1, 11), (2, 12)]);
        assert_eq!(pos, Position::AfterLast);
        assert_eq!(pos.forward(Some(10), next), Position::AfterLast);
    }

    #[test]
    fn test_backward() {
        let mut pos = Position::AfterLast;
        let mut seen = Vec::new();
        loop {
            pos = pos.backward(Some((2, 12u8)), prev);
            if !pos.is_at() {
                break;
            }
            seen.push((pos.index().unwrap(), pos.node().unwrap()));
        }
        assert_eq!(seen, vec![(2, 12), (1, 11), (0, 10)]);
        assert_eq!(pos, Position::BeforeFirst);
        assert_eq!(pos.backward(Some((2, 12)), prev), Position::BeforeFirst);
    }

    #[test]
    fn test_empty() {
        let pos: Position<u8> = Position::BeforeFirst;
        assert_eq!(pos.forward(None, next), Position::AfterLast);
        let pos: Position<u8> = Position::AfterLast;
        assert_eq!(pos.backward(None, prev), Position::BeforeFirst);
        assert_eq!(pos.index(), None);
        assert_eq!(pos.node(), None);
    }
}
