use arbitrary::{self, unstructured::Unstructured, Arbitrary};
use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};

use std::collections::BTreeMap;

use super::*;
use crate::rbtree::{First, Reverse};

fn load(values: &[u32]) -> RbTree<u32> {
    let mut tree = RbTree::new("test-index");
    for value in values.iter() {
        tree.insert_unique(*value);
    }
    tree
}

fn collect<V: Clone, X, C>(tree: &RbTree<V, X, C>) -> Vec<V> {
    tree.iter().cloned().collect()
}

#[test]
fn test_unique_insert() {
    let mut tree = load(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(collect(&tree), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.first(), Some(&1));
    assert_eq!(tree.last(), Some(&9));
    tree.validate().unwrap();

    // duplicate is rejected, cursor names the existing value.
    let at = tree.find(&4);
    assert_eq!(tree.insert_unique(4), (at, false));
    assert_eq!(tree.len(), 7);

    let (cur, ok) = tree.insert_unique(6);
    assert!(ok);
    assert_eq!(tree.get(cur), Some(&6));
    assert_eq!(tree.get(tree.next(cur)), Some(&7));
    assert_eq!(tree.get(tree.prev(cur)), Some(&5));
    tree.validate().unwrap();
}

#[test]
fn test_erase_one() {
    let mut tree = load(&[5, 3, 8, 1, 4, 7, 9]);
    let n = tree.erase_key(&5);
    assert_eq!(n, 1);
    assert_eq!(collect(&tree), vec![1, 3, 4, 7, 8, 9]);
    tree.validate().unwrap();

    assert_eq!(tree.erase_key(&5), 0);
    assert_eq!(tree.erase(Cursor::End), None);
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_equal_range() {
    let mut tree: RbTree<(u32, char), First, Natural> =
        RbTree::with_compare("test-equal-range", First, Natural);
    tree.insert_equal((1, 'x'));
    tree.insert_equal((2, 'a'));
    tree.insert_equal((3, 'y'));
    tree.insert_equal((2, 'b'));
    tree.insert_equal((2, 'c'));
    tree.validate().unwrap();

    let (first, last) = tree.equal_range(&2);
    let run: Vec<(u32, char)> = tree.range(first, last).cloned().collect();
    assert_eq!(run, vec![(2, 'a'), (2, 'b'), (2, 'c')]);
    assert_eq!(tree.count(&2), 3);
    assert_eq!(tree.count(&4), 0);
    assert_eq!(tree.find(&2), first);
    assert_eq!(tree.get(last), Some(&(3, 'y')));

    // unique insert rejects against the first equivalent.
    let (cur, ok) = tree.insert_unique((2, 'z'));
    assert!(!ok);
    assert_eq!(cur, first);
}

#[test]
fn test_unique_over_run() {
    let mut tree: RbTree<(u32, u32), First, Natural> =
        RbTree::with_compare("test-unique-over-run", First, Natural);
    for seqno in 0..8 {
        tree.insert_equal((1, seqno));
    }
    let first = tree.find(&1);
    assert_eq!(tree.get(first), Some(&(1, 0)));

    let (cur, ok) = tree.insert_unique((1, 99));
    assert!(!ok);
    assert_eq!(cur, first);
    // hint that does not fit falls back to the same path.
    let cur = tree.insert_unique_hint(tree.end(), (1, 100));
    assert_eq!(cur, first);
    let cur = tree.insert_unique_hint(first, (1, 101));
    assert_eq!(cur, first);
    assert_eq!(tree.len(), 8);
    tree.validate().unwrap();
}

#[test]
fn test_bounds() {
    let tree = load(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.lower_bound(&0), tree.begin());
    assert_eq!(tree.upper_bound(&100), tree.end());
    assert_eq!(tree.lower_bound(&100), Cursor::End);

    assert_eq!(tree.get(tree.lower_bound(&6)), Some(&7));
    assert_eq!(tree.get(tree.upper_bound(&6)), Some(&7));
    assert_eq!(tree.get(tree.lower_bound(&7)), Some(&7));
    assert_eq!(tree.get(tree.upper_bound(&7)), Some(&8));
    assert_eq!(tree.find(&6), Cursor::End);
    assert!(tree.contains(&9));
    assert!(!tree.contains(&10));

    let (first, last) = tree.equal_range(&6);
    assert_eq!(first, last);
    assert_eq!(tree.range(first, last).count(), 0);
}

#[test]
fn test_erase_all() {
    let values = vec![5, 3, 8, 1, 4, 7, 9];
    let mut tree = load(&values);
    for value in values.iter() {
        assert_eq!(tree.erase(tree.find(value)), Some(*value));
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.begin(), tree.end());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_empty() {
    let tree: RbTree<u32> = RbTree::new("test-empty");
    assert_eq!(tree.begin(), Cursor::End);
    assert_eq!(tree.prev(tree.end()), Cursor::End);
    assert_eq!(tree.find(&1), Cursor::End);
    assert_eq!(tree.lower_bound(&1), Cursor::End);
    assert_eq!(tree.count(&1), 0);
    assert_eq!(tree.random(&mut SmallRng::from_entropy()), None);
    tree.validate().unwrap();
}

#[test]
fn test_cursor_stability() {
    let mut tree = load(&(0..100).collect::<Vec<u32>>());
    let cursors: Vec<(Cursor, u32)> = (0..100).map(|v| (tree.find(&v), v)).collect();

    for v in (0..100).step_by(3) {
        tree.erase_key(&v);
    }
    for (cur, v) in cursors.into_iter() {
        match v % 3 {
            0 => assert_eq!(tree.get(cur), None),
            _ => assert_eq!(tree.get(cur), Some(&v)),
        }
    }
    tree.validate().unwrap();
}

#[test]
fn test_hint() {
    let mut tree: RbTree<u32> = RbTree::new("test-hint");
    // ascending with End hint, every hint is correct.
    for v in 0..100 {
        let cur = tree.insert_unique_hint(Cursor::End, v);
        assert_eq!(tree.get(cur), Some(&v));
    }
    // wrong hint falls back to normal insert.
    let cur = tree.insert_unique_hint(tree.begin(), 1000);
    assert_eq!(tree.get(cur), Some(&1000));
    assert_eq!(tree.last(), Some(&1000));
    // duplicate with hint gives existing value.
    let cur = tree.insert_unique_hint(tree.find(&50), 50);
    assert_eq!(cur, tree.find(&50));
    assert_eq!(tree.len(), 101);
    tree.validate().unwrap();

    let mut tree: RbTree<(u32, u32), First, Natural> =
        RbTree::with_compare("test-hint-equal", First, Natural);
    for seqno in 0..30 {
        let key = seqno % 3;
        let hint = tree.upper_bound(&key);
        tree.insert_equal_hint(hint, (key, seqno));
    }
    let (first, last) = tree.equal_range(&1);
    let seqnos: Vec<u32> = tree.range(first, last).map(|(_, s)| *s).collect();
    assert_eq!(seqnos, (0..30).filter(|s| s % 3 == 1).collect::<Vec<u32>>());
    // descending with begin hint.
    tree.clear();
    for key in (0..50).rev() {
        let hint = tree.begin();
        tree.insert_equal_hint(hint, (key, 0));
    }
    assert_eq!(tree.first(), Some(&(0, 0)));
    assert_eq!(tree.len(), 50);
    tree.validate().unwrap();
    // erased hint falls back as well.
    let stale = tree.find(&10);
    tree.erase(stale);
    tree.insert_equal_hint(stale, (10, 1));
    assert_eq!(tree.count(&10), 1);
    tree.validate().unwrap();
}

#[test]
fn test_extend() {
    let mut tree: RbTree<u32> = RbTree::new("test-extend");
    assert_eq!(tree.extend_unique(vec![3, 1, 2, 3, 1]), 3);
    assert_eq!(collect(&tree), vec![1, 2, 3]);

    tree.extend_equal(vec![2, 2, 4]);
    assert_eq!(collect(&tree), vec![1, 2, 2, 2, 3, 4]);
    assert_eq!(tree.count(&2), 3);
    tree.validate().unwrap();
}

#[test]
fn test_erase_range() {
    let mut tree = load(&(0..20).collect::<Vec<u32>>());
    let (first, last) = (tree.find(&5), tree.find(&10));
    assert_eq!(tree.erase_range(first, last), 5);
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.get(last), Some(&10));
    tree.validate().unwrap();

    assert_eq!(tree.erase_range(last, last), 0);
    assert_eq!(tree.erase_keys(vec![0, 1, 100].iter()), 2);
    assert_eq!(tree.first(), Some(&2));

    let begin = tree.begin();
    assert_eq!(tree.erase_range(begin, Cursor::End), 13);
    assert!(tree.is_empty());
    tree.validate().unwrap();
}

#[test]
fn test_copy() {
    let seed: u64 = random();
    println!("test_copy seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let values: Vec<u32> = (0..1000).map(|_| rng.gen::<u32>() % 10_000).collect();
    let mut tree = load(&values);
    let copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(copy.to_name(), tree.to_name());
    copy.validate().unwrap();

    // copies are independent.
    let v = *tree.first().unwrap();
    tree.erase_key(&v);
    tree.insert_unique(20_000);
    assert_ne!(copy, tree);
    assert_eq!(copy.first(), Some(&v));
    assert!(!copy.contains(&20_000));

    let mut other = load(&[1, 2, 3]);
    let name = other.to_name();
    other.assign(&copy);
    assert_eq!(other, copy);
    assert_eq!(other.to_name(), name);
    other.validate().unwrap();

    let mut other: RbTree<u32> = RbTree::new("clone-from");
    other.clone_from(&tree);
    assert_eq!(other, tree);
    assert_eq!(other.to_name(), tree.to_name());

    let empty: RbTree<u32> = RbTree::new("empty");
    other.assign(&empty);
    assert!(other.is_empty());
    other.validate().unwrap();
}

#[test]
fn test_swap() {
    let mut a = load(&[1, 2, 3]);
    let mut b: RbTree<u32> = RbTree::from_config(&Config::new("other"), Identity, Natural);
    b.insert_unique(10);
    let cur = a.find(&2);

    a.swap(&mut b);
    assert_eq!(collect(&a), vec![10]);
    assert_eq!(a.to_name(), "other".to_string());
    assert_eq!(collect(&b), vec![1, 2, 3]);
    // cursors travel with the contents.
    assert_eq!(b.get(cur), Some(&2));
    a.validate().unwrap();
    b.validate().unwrap();
}

#[test]
fn test_compare() {
    let a = load(&[1, 2, 3]);
    let b = load(&[1, 2, 4]);
    let c = load(&[1, 2]);
    assert!(a < b);
    assert!(c < a);
    assert!(a > c);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    assert_eq!(a, load(&[3, 2, 1]));
    assert_eq!(format!("{:?}", a), "[1, 2, 3]".to_string());

    let vc = a.value_compare();
    assert!(vc.less(&1, &2));
    assert!(!vc.less(&2, &2));
}

#[test]
fn test_reverse() {
    let mut tree: RbTree<u32, Identity, Reverse> =
        RbTree::with_compare("test-reverse", Identity, Reverse);
    tree.extend_unique(vec![5, 3, 8, 1]);
    assert_eq!(collect(&tree), vec![8, 5, 3, 1]);
    assert_eq!(tree.get(tree.lower_bound(&4)), Some(&3));
    assert_eq!(tree.get(tree.upper_bound(&5)), Some(&3));
    tree.validate().unwrap();

    let by_len = |a: &String, b: &String| a.len() < b.len();
    let mut tree: RbTree<String, Identity, _> =
        RbTree::with_compare("test-closure", Identity, by_len);
    tree.insert_equal("ccc".to_string());
    tree.insert_equal("a".to_string());
    tree.insert_equal("bb".to_string());
    tree.insert_equal("xx".to_string());
    let (first, last) = tree.equal_range(&"zz".to_string());
    let run: Vec<String> = tree.range(first, last).cloned().collect();
    assert_eq!(run, vec!["bb".to_string(), "xx".to_string()]);
    assert!(!tree.insert_unique("qqq".to_string()).1);
    tree.validate().unwrap();
}

#[test]
fn test_get_mut() {
    let mut tree: RbTree<(u32, String), First, Natural> =
        RbTree::with_compare("test-get-mut", First, Natural);
    tree.insert_unique((1, "one".to_string()));
    let cur = tree.find(&1);
    tree.get_mut(cur).unwrap().1.push_str("-more");
    assert_eq!(tree.get(cur).unwrap().1, "one-more".to_string());
    assert_eq!(tree.get_mut(Cursor::End), None);
}

#[test]
fn test_random() {
    let seed: u64 = random();
    println!("test_random seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let tree = load(&(0..1000).collect::<Vec<u32>>());
    for _ in 0..1000 {
        let value = tree.random(&mut rng).unwrap();
        assert!(tree.contains(value));
    }
}

#[test]
fn test_into_iter() {
    let tree = load(&[3, 1, 2]);
    let mut values = vec![];
    for value in &tree {
        values.push(*value);
    }
    assert_eq!(values, vec![1, 2, 3]);
    let values: Vec<u32> = tree.into_iter().rev().collect();
    assert_eq!(values, vec![3, 2, 1]);
}

#[derive(Clone, Debug, Arbitrary)]
enum Op<K, V> {
    InsertUnique(K, V),
    InsertEqual(K, V),
    HintUnique(K, V),
    HintEqual(K, V),
    EraseKey(K),
    EraseFirst,
    EraseLast,
    Find(K),
    Count(K),
    Bounds(K),
    Range(K, K),
    Iter,
    Reverse,
    Validate,
}

// model keeps, per key, values in insertion order.
fn model_values(model: &BTreeMap<u8, Vec<u64>>) -> Vec<(u8, u64)> {
    model
        .iter()
        .flat_map(|(k, vs)| vs.iter().map(move |v| (*k, *v)))
        .collect()
}

#[test]
fn test_rbtree_ops() {
    let seed: u64 = random();
    // let seed: u64 = 3061716992344767567;
    println!("test_rbtree_ops seed:{}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut tree: RbTree<(u8, u64), First, Natural> =
        RbTree::with_compare("test-rbtree-ops", First, Natural);
    let mut model: BTreeMap<u8, Vec<u64>> = BTreeMap::new();
    let mut counts = [0_usize; 14];

    for _i in 0..20_000 {
        let bytes = rng.gen::<[u8; 32]>();
        let mut uns = Unstructured::new(&bytes);

        let op: Op<u8, u64> = uns.arbitrary().unwrap();
        // println!("op -- {:?}", op);
        match op {
            Op::InsertUnique(key, val) => {
                let (cur, ok) = tree.insert_unique((key, val));
                let vals = model.entry(key).or_default();
                assert_eq!(ok, vals.is_empty());
                if ok {
                    vals.push(val);
                }
                assert_eq!(tree.get(cur), Some(&(key, vals[0])));
                counts[0] += 1;
            }
            Op::InsertEqual(key, val) => {
                let cur = tree.insert_equal((key, val));
                model.entry(key).or_default().push(val);
                assert_eq!(tree.get(cur), Some(&(key, val)));
                counts[1] += 1;
            }
            Op::HintUnique(key, val) => {
                let hint = tree.lower_bound(&key);
                let cur = tree.insert_unique_hint(hint, (key, val));
                let vals = model.entry(key).or_default();
                if vals.is_empty() {
                    vals.push(val);
                }
                assert_eq!(tree.get(cur), Some(&(key, vals[0])));
                counts[2] += 1;
            }
            Op::HintEqual(key, val) => {
                let hint = tree.upper_bound(&key);
                let cur = tree.insert_equal_hint(hint, (key, val));
                model.entry(key).or_default().push(val);
                assert_eq!(tree.get(cur), Some(&(key, val)));
                counts[3] += 1;
            }
            Op::EraseKey(key) => {
                let n = model.remove(&key).map(|vs| vs.len()).unwrap_or(0);
                assert_eq!(tree.erase_key(&key), n);
                counts[4] += 1;
            }
            Op::EraseFirst => {
                let first = model.keys().next().cloned();
                let val = first.map(|k| {
                    let vals = model.get_mut(&k).unwrap();
                    let val = vals.remove(0);
                    if vals.is_empty() {
                        model.remove(&k);
                    }
                    (k, val)
                });
                assert_eq!(tree.erase(tree.begin()), val);
                counts[5] += 1;
            }
            Op::EraseLast => {
                let last = model.keys().next_back().cloned();
                let val = last.map(|k| {
                    let vals = model.get_mut(&k).unwrap();
                    let val = vals.pop().unwrap();
                    if vals.is_empty() {
                        model.remove(&k);
                    }
                    (k, val)
                });
                assert_eq!(tree.erase(tree.prev(tree.end())), val);
                counts[6] += 1;
            }
            Op::Find(key) => {
                let val = model.get(&key).map(|vs| (key, vs[0]));
                assert_eq!(tree.get(tree.find(&key)).cloned(), val);
                assert_eq!(tree.contains(&key), val.is_some());
                counts[7] += 1;
            }
            Op::Count(key) => {
                let n = model.get(&key).map(|vs| vs.len()).unwrap_or(0);
                assert_eq!(tree.count(&key), n);
                counts[8] += 1;
            }
            Op::Bounds(key) => {
                let lb = model.range(key..).next().map(|(k, vs)| (*k, vs[0]));
                assert_eq!(tree.get(tree.lower_bound(&key)).cloned(), lb);
                let ub = model
                    .range(key..)
                    .find(|(k, _)| **k > key)
                    .map(|(k, vs)| (*k, vs[0]));
                assert_eq!(tree.get(tree.upper_bound(&key)).cloned(), ub);
                counts[9] += 1;
            }
            Op::Range(a, b) => {
                let (a, b) = if a <= b { (a, b) } else { (b, a) };
                let (first, last) = (tree.lower_bound(&a), tree.upper_bound(&b));
                let items: Vec<(u8, u64)> = tree.range(first, last).cloned().collect();
                let expected: Vec<(u8, u64)> = model_values(&model)
                    .into_iter()
                    .filter(|(k, _)| *k >= a && *k <= b)
                    .collect();
                assert_eq!(items, expected);
                let items: Vec<(u8, u64)> = tree.range(first, last).rev().cloned().collect();
                assert_eq!(items, expected.into_iter().rev().collect::<Vec<(u8, u64)>>());
                counts[10] += 1;
            }
            Op::Iter => {
                assert_eq!(collect(&tree), model_values(&model));
                counts[11] += 1;
            }
            Op::Reverse => {
                let items: Vec<(u8, u64)> = tree.iter().rev().cloned().collect();
                let mut expected = model_values(&model);
                expected.reverse();
                assert_eq!(items, expected);
                counts[12] += 1;
            }
            Op::Validate => {
                tree.validate().unwrap();
                counts[13] += 1;
            }
        };
        model.retain(|_, vs| !vs.is_empty());
        assert_eq!(tree.len(), model.values().map(|vs| vs.len()).sum::<usize>());
    }

    println!("test_rbtree_ops counts {:?}", counts);
    tree.validate().unwrap();
    assert_eq!(collect(&tree), model_values(&model));
}
