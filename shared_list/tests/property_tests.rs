//! Property tests: SharedList against a plain Vec model

use proptest::prelude::*;
use shared_list::SharedList;

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<u8>),
    Insert(usize, Vec<u8>),
    Remove(u8),
    Replace(u8, u8),
    RemoveAll(u8),
    ReplaceAll(u8, u8),
    RemoveAt(usize),
    Set(usize, u8),
    Clear,
}

// small value domain so duplicates and hits are common
fn value() -> impl Strategy<Value = u8> {
    0u8..6
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::collection::vec(value(), 0..4).prop_map(Op::Add),
        3 => (any::<usize>(), prop::collection::vec(value(), 0..4))
            .prop_map(|(at, v)| Op::Insert(at, v)),
        2 => value().prop_map(Op::Remove),
        2 => (value(), value()).prop_map(|(a, b)| Op::Replace(a, b)),
        1 => value().prop_map(Op::RemoveAll),
        1 => (value(), value()).prop_map(|(a, b)| Op::ReplaceAll(a, b)),
        2 => any::<usize>().prop_map(Op::RemoveAt),
        2 => (any::<usize>(), value()).prop_map(|(i, v)| Op::Set(i, v)),
        1 => Just(Op::Clear),
    ]
}

/// Apply `op` to both list and model. Index operands are reduced into range
/// first, since out-of-range indices are a caller error.
fn apply(list: &SharedList<u8>, model: &mut Vec<u8>, op: Op) {
    match op {
        Op::Add(values) => {
            list.add(values.clone());
            model.extend(values);
        }
        Op::Insert(at, values) => {
            let at = at % (model.len() + 1);
            list.insert(at, values.clone());
            model.splice(at..at, values);
        }
        Op::Remove(v) => {
            let found = model.iter().position(|x| *x == v);
            assert_eq!(list.remove(&v), found.is_some());
            if let Some(i) = found {
                model.remove(i);
            }
        }
        Op::Replace(old, new) => {
            let found = model.iter().position(|x| *x == old);
            assert_eq!(list.replace(&old, new), found.is_some());
            if let Some(i) = found {
                model[i] = new;
            }
        }
        Op::RemoveAll(v) => {
            let before = model.len();
            model.retain(|x| *x != v);
            assert_eq!(list.remove_all(&v), before - model.len());
        }
        Op::ReplaceAll(v, new) => {
            let mut replaced = 0;
            for x in model.iter_mut().filter(|x| **x == v) {
                *x = new;
                replaced += 1;
            }
            assert_eq!(list.replace_all(&v, new), replaced);
        }
        Op::RemoveAt(i) => {
            if !model.is_empty() {
                let i = i % model.len();
                assert_eq!(list.remove_at(i), model.remove(i));
            }
        }
        Op::Set(i, v) => {
            if !model.is_empty() {
                let i = i % model.len();
                assert_eq!(list.set(i, v), std::mem::replace(&mut model[i], v));
            }
        }
        Op::Clear => {
            list.clear();
            model.clear();
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_vec_model(ops in prop::collection::vec(op(), 0..64)) {
        let list = SharedList::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&list, &mut model, op);
            prop_assert_eq!(list.to_vec(), model.clone());
            prop_assert_eq!(list.len(), model.len());
        }
    }

    #[test]
    fn prop_index_of_is_lowest_match(data in prop::collection::vec(value(), 0..32), needle in value()) {
        let list = SharedList::from(data.clone());
        let expected = data.iter().position(|x| *x == needle);
        prop_assert_eq!(list.index_of(&needle), expected);
        prop_assert_eq!(list.contains(&needle), expected.is_some());
    }

    #[test]
    fn prop_remove_all_keeps_survivor_order(data in prop::collection::vec(value(), 0..32), v in value()) {
        let list = SharedList::from(data.clone());
        list.remove_all(&v);
        let survivors: Vec<u8> = data.into_iter().filter(|x| *x != v).collect();
        prop_assert_eq!(list.to_vec(), survivors);
    }

    #[test]
    fn prop_next_cycles(data in prop::collection::vec(any::<u16>(), 1..16), extra in 0usize..40) {
        let list = SharedList::from(data.clone());
        let calls = data.len() + extra;
        let visited: Vec<u16> = (0..calls).map(|_| list.next()).collect();
        let expected: Vec<u16> = data.iter().copied().cycle().take(calls).collect();
        prop_assert_eq!(visited, expected);
        prop_assert_eq!(list.cursor(), calls % data.len());
    }
}
