use super::*;
use crate::rbtree::raw::{check_raw, load_raw};

#[test]
fn test_cursor_walk() {
    let raw = load_raw(&[20_u32, 10, 30, 5, 15]);
    check_raw(&raw);

    let mut cur = raw.begin();
    let mut values = vec![];
    while !cur.is_end() {
        values.push(*raw.get(cur).unwrap());
        cur = raw.next(cur);
    }
    assert_eq!(values, vec![5, 10, 15, 20, 30]);
    // incrementing end stays at end.
    assert_eq!(raw.next(Cursor::End), Cursor::End);
    assert_eq!(raw.get(Cursor::End), None);

    // decrementing end gives the last value.
    let last = raw.prev(Cursor::End);
    assert_eq!(raw.get(last), Some(&30));
    let mut cur = last;
    let mut values = vec![];
    while !cur.is_end() {
        values.push(*raw.get(cur).unwrap());
        cur = raw.prev(cur);
    }
    assert_eq!(values, vec![30, 20, 15, 10, 5]);

    assert_eq!(raw.distance(raw.begin(), Cursor::End), 5);
    assert_eq!(raw.distance(Cursor::End, Cursor::End), 0);
    assert_eq!(raw.distance(raw.begin(), last), 4);
}

#[test]
fn test_cursor_empty() {
    let raw: RawTree<u32> = RawTree::with_capacity(0);
    assert_eq!(raw.begin(), Cursor::End);
    assert_eq!(raw.prev(Cursor::End), Cursor::End);
    assert_eq!(raw.distance(raw.begin(), Cursor::End), 0);
    assert_eq!(Cursor::from(None), Cursor::End);
}

#[test]
fn test_cursor_erased() {
    let mut raw = load_raw(&[1_u32, 2, 3]);
    let cur = raw.next(raw.begin());
    let id = cur.to_node().unwrap();
    assert_eq!(raw.unlink(id), 2);

    assert_eq!(raw.get(cur), None);
    assert_eq!(raw.get_mut(cur), None);
    assert_eq!(raw.next(cur), Cursor::End);
    assert_eq!(raw.prev(cur), Cursor::End);

    let first = raw.begin();
    *raw.get_mut(first).unwrap() = 0;
    assert_eq!(check_raw(&raw), vec![0, 3]);
}

#[test]
fn test_iter() {
    let values: Vec<u32> = (0..100).collect();
    let raw = load_raw(&values);

    let iter = Iter::new(&raw, raw.begin(), Cursor::End, raw.n_count);
    assert_eq!(iter.len(), 100);
    assert_eq!(iter.cursor(), raw.begin());
    assert_eq!(iter.clone().cloned().collect::<Vec<u32>>(), values);

    let rev: Vec<u32> = iter.rev().cloned().collect();
    let mut expected = values.clone();
    expected.reverse();
    assert_eq!(rev, expected);

    // meet in the middle.
    let mut iter = Iter::new(&raw, raw.begin(), Cursor::End, raw.n_count);
    let mut front = vec![];
    let mut back = vec![];
    loop {
        match (iter.next(), iter.next_back()) {
            (Some(x), Some(y)) => {
                front.push(*x);
                back.push(*y);
            }
            (Some(x), None) => front.push(*x),
            (None, _) => break,
        }
    }
    back.reverse();
    front.extend(back);
    assert_eq!(front, values);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    // sub range [10, 20)
    let mut lo = raw.begin();
    for _ in 0..10 {
        lo = raw.next(lo);
    }
    let mut hi = lo;
    for _ in 0..10 {
        hi = raw.next(hi);
    }
    let n = raw.distance(lo, hi);
    let iter = Iter::new(&raw, lo, hi, n);
    assert_eq!(iter.cloned().collect::<Vec<u32>>(), (10..20).collect::<Vec<u32>>());
    let iter = Iter::new(&raw, lo, hi, n);
    assert_eq!(iter.rev().cloned().collect::<Vec<u32>>(), (10..20).rev().collect::<Vec<u32>>());
}

#[test]
fn test_into_iter() {
    let raw = load_raw(&[3_u32, 1, 2, 2]);
    let mut iter = IntoIter::new(raw);
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.collect::<Vec<u32>>(), vec![2, 2]);
}
