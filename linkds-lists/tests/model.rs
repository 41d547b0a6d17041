use linkds_lists::doublylinkedlist::list::DoublyLinkedList;
use linkds_lists::error::ListError;
use linkds_lists::singlylinkedlist::list::SinglyLinkedList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: u64 = 16;
const STEPS: usize = 2000;

fn model_insert(model: &mut Vec<i32>, index: usize, values: &[i32]) -> Result<(), ListError> {
    if values.is_empty() {
        return Ok(());
    }
    if index >= model.len() {
        return Err(ListError::IndexOutOfRange {
            index,
            len: model.len(),
        });
    }
    for (i, v) in values.iter().enumerate() {
        model.insert(index + 1 + i, *v);
    }
    Ok(())
}

fn out_of_range(index: usize, len: usize) -> ListError {
    ListError::IndexOutOfRange { index, len }
}

// Applies random operations to the list and to a Vec and checks that
// both always hold the same values. Indices are drawn from a range a
// little past the end so that failures are exercised too.
macro_rules! run_model {
    ($list_ty:ty, $seed:expr) => {{
        let mut rng = StdRng::seed_from_u64($seed);
        let mut list: $list_ty = <$list_ty>::new();
        let mut model: Vec<i32> = Vec::new();

        for _ in 0..STEPS {
            let len = model.len();
            let index = rng.gen_range(0..len + 2);
            let val = rng.gen_range(-50..50);
            match rng.gen_range(0..11) {
                0 => {
                    let count = rng.gen_range(0..4);
                    let values: Vec<i32> = (0..count).map(|_| rng.gen_range(-50..50)).collect();
                    list.append(values.clone());
                    model.extend(values);
                }
                1 => {
                    let count = rng.gen_range(0..4);
                    let values: Vec<i32> = (0..count).map(|_| rng.gen_range(-50..50)).collect();
                    list.prepend(values.clone());
                    model.splice(0..0, values);
                }
                2 => {
                    let expected = model.get(index).ok_or(out_of_range(index, len));
                    assert_eq!(list.get(index), expected);
                }
                3 => {
                    let expected = if index < len {
                        Ok(model.remove(index))
                    } else {
                        Err(out_of_range(index, len))
                    };
                    assert_eq!(list.remove(index), expected);
                }
                4 => {
                    let other = rng.gen_range(0..len + 2);
                    let expected = if index < len && other < len {
                        model.swap(index, other);
                        Ok(())
                    } else if index >= len {
                        Err(out_of_range(index, len))
                    } else {
                        Err(out_of_range(other, len))
                    };
                    assert_eq!(list.swap(index, other), expected);
                }
                5 => {
                    let count = rng.gen_range(0..4);
                    let values: Vec<i32> = (0..count).map(|_| rng.gen_range(-50..50)).collect();
                    let expected = model_insert(&mut model, index, &values);
                    assert_eq!(list.insert(index, values), expected);
                }
                6 => {
                    let expected = if index < len {
                        Ok(std::mem::replace(&mut model[index], val))
                    } else {
                        Err(out_of_range(index, len))
                    };
                    assert_eq!(list.set(index, val), expected);
                }
                7 => {
                    let expected = model
                        .iter()
                        .position(|e| *e == val)
                        .ok_or(ListError::ValueNotFound);
                    assert_eq!(list.index_of(&val), expected);
                    assert_eq!(list.contains(&val), expected.is_ok());
                }
                8 => {
                    let probe = [val, rng.gen_range(-50..50)];
                    let expected = probe.iter().all(|p| model.contains(p));
                    assert_eq!(list.contains_all(&probe), expected);
                }
                9 => {
                    list.reverse();
                    model.reverse();
                }
                _ => {
                    if rng.gen_range(0..20) == 0 {
                        list.clear();
                        model.clear();
                    }
                }
            }

            assert_eq!(list.len(), model.len());
            assert_eq!(list.is_empty(), model.is_empty());
            assert_eq!(list.front(), model.first());
            assert_eq!(list.back(), model.last());
            assert_eq!(list.values(), model);
        }
    }};
}

#[test]
fn singly_matches_vec() {
    for seed in 0..SEEDS {
        run_model!(SinglyLinkedList<i32>, seed);
    }
}

#[test]
fn doubly_matches_vec() {
    for seed in 0..SEEDS {
        run_model!(DoublyLinkedList<i32>, seed);
    }
}

#[test]
fn doubly_cursor_walks_both_ways() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(0..40);
        let list: DoublyLinkedList<u32> = (0..len).map(|_| rng.gen()).collect();
        let values = list.values();

        let mut cursor = list.cursor();
        cursor.begin();
        let mut forward = Vec::new();
        while cursor.move_next() {
            assert_eq!(cursor.index(), Some(forward.len()));
            forward.push(*cursor.value().unwrap());
        }
        assert_eq!(forward, values);

        cursor.end();
        let mut backward = Vec::new();
        while cursor.move_prev() {
            backward.push(*cursor.value().unwrap());
        }
        backward.reverse();
        assert_eq!(backward, values);
    }
}

#[test]
fn reverse_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let len = rng.gen_range(0..40);
        let values: Vec<i64> = (0..len).map(|_| rng.gen()).collect();

        let mut singly: SinglyLinkedList<i64> = values.iter().copied().collect();
        singly.reverse();
        singly.reverse();
        assert_eq!(singly.values(), values);

        let mut doubly: DoublyLinkedList<i64> = values.iter().copied().collect();
        doubly.reverse();
        doubly.reverse();
        assert_eq!(doubly.values(), values);
    }
}
