#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::lang::{AsComparable, Comparable, ComparableComparator, StringComparator};
use crate::util::panic::assert_panics;

const UNSORTED: [i32; 10] = [5, 2, 8, 3, 9, 4, 6, 1, 7, 10];

fn fruits() -> ArrayList<&'static str> {
    ArrayList::from(vec!["apple", "banana", "pine", "banana", "ananas"])
}

#[derive(Debug, Clone, PartialEq)]
struct Letter(char);

impl Comparable for Letter {
    fn compare_to(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl AsComparable for Letter {
    fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Opaque(i32);

impl AsComparable for Opaque {}

#[test]
fn test_add_and_get() {
    let mut list = ArrayList::new();
    list.add("a");
    list.add_all(["b", "c"]);

    assert_eq!(list.get(0), Some(&"a"));
    assert_eq!(list.get(2), Some(&"c"));
    assert_eq!(list.get(3), None, "Out of bounds lookups should return None.");
    assert_eq!(list[1], "b");
}

#[test]
fn test_index_out_of_bounds_panics() {
    let list = ArrayList::from(vec![1, 2, 3]);
    assert_panics!({ list[3] }, "Index 3 is out of bounds");
}

#[test]
fn test_add_at() {
    let mut list = ArrayList::from(vec!["b", "d"]);

    assert_eq!(list.add_at("a", 0), Ok(()));
    assert_eq!(list.add_at("c", 2), Ok(()));
    assert_eq!(list.add_at("e", 4), Ok(()), "Inserting at the size should append.");
    assert_eq!(list.to_vec(), vec!["a", "b", "c", "d", "e"]);

    assert_eq!(
        list.add_at("x", 6),
        Err(IndexOutOfBounds { index: 6, len: 5 }),
        "Inserting past the end should fail."
    );
    assert_eq!(list.size(), 5, "A failed insert should leave the list unchanged.");
}

#[test]
fn test_index_of_and_remove() {
    let mut list = ArrayList::from(vec!["x", "y"]);
    assert_eq!(list.index_of(&"x"), Some(0));
    assert_eq!(list.index_of(&"y"), Some(1));
    assert_eq!(list.index_of(&"z"), None);

    list.add_at("z", 1).unwrap();
    assert_eq!(list.get(1), Some(&"z"));
    assert_eq!(list.get(2), Some(&"y"));

    assert_eq!(list.remove(&"x"), Some("x"));
    assert_eq!(list.remove(&"x"), None, "Removing a missing element should do nothing.");
    assert_eq!(list.index_of(&"y"), Some(1), "Later elements should shift forward.");

    let mut list = fruits();
    list.remove_all(&["banana", "pine"]);
    assert_eq!(
        list.to_vec(),
        vec!["apple", "banana", "ananas"],
        "remove_all should remove one occurrence per element."
    );
}

#[test]
fn test_find_index() {
    let fruits = fruits();
    let starts_with = |fruit: &&str, prefix: &str| fruit.starts_with(prefix);

    assert_eq!(fruits.find_index(|fruit| *fruit == "banana"), Some(1));
    assert_eq!(fruits.find_last_index(|fruit| *fruit == "banana"), Some(3));
    assert_eq!(fruits.find_index_by_query("pi", starts_with), Some(2));
    assert_eq!(fruits.find_last_index_by_query("a", starts_with), Some(4));
    assert_eq!(fruits.find_index_by_query("mango", starts_with), None);
}

#[test]
fn test_sort_and_reverse() {
    let mut list = ArrayList::from(UNSORTED.to_vec());
    list.sort();
    assert_eq!(list.to_vec(), (1..=10).collect::<Vec<_>>());

    list.reverse();
    assert_eq!(list.to_vec(), (1..=10).rev().collect::<Vec<_>>());

    let mut list = ArrayList::from(UNSORTED.to_vec());
    list.sort_by(Order::by(|a: &i32, b: &i32| a.cmp(b))).unwrap();
    assert_eq!(list.to_vec(), (1..=10).collect::<Vec<_>>());

    let mut list = ArrayList::from(UNSORTED.to_vec());
    list.sort_by(Order::natural()).unwrap();
    assert_eq!(list.to_vec(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_sort_with_comparators() {
    let mut list: ArrayList<Letter> = "xmcta".chars().map(Letter).collect();
    list.sort_by(Order::comparator(&ComparableComparator)).unwrap();
    assert_eq!(
        list.map(|letter| letter.0).to_vec(),
        vec!['a', 'c', 'm', 't', 'x']
    );

    let mut words = ArrayList::from(vec!["pear", "Fig", "apple"]);
    words.sort_by(Order::comparator(&StringComparator)).unwrap();
    assert_eq!(words.to_vec(), vec!["Fig", "apple", "pear"]);
}

#[test]
fn test_sort_failure_leaves_list_unchanged() {
    let mut list = ArrayList::from(vec![Opaque(3), Opaque(1), Opaque(2)]);
    let before = list.clone();

    let result = list.sort_by(Order::comparator(&ComparableComparator));
    assert!(result.is_err(), "Sorting values that can't compare themselves should fail.");
    assert_eq!(list, before, "A failed sort shouldn't reorder anything.");
}

#[test]
fn test_sort_is_stable() {
    let mut list = ArrayList::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
    list.sort_by(Order::by(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0))).unwrap();
    assert_eq!(list.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
}

#[test]
fn test_slice() {
    let fruits = fruits();

    assert_eq!(fruits.slice(1, Some(2)).to_vec(), vec!["banana", "pine"]);
    assert_eq!(fruits.slice(3, None).to_vec(), vec!["banana", "ananas"]);
    assert_eq!(fruits.slice(-2, None).to_vec(), vec!["banana", "ananas"]);
    assert_eq!(fruits.slice(1, Some(-2)).to_vec(), vec!["banana", "pine"]);
    assert!(fruits.slice(10, None).is_empty(), "Offsets past the end should clamp.");
    assert!(fruits.slice(3, Some(-4)).is_empty());
    assert_eq!(fruits.slice(-10, Some(1)).to_vec(), vec!["apple"]);
    assert_eq!(fruits.size(), 5, "slice shouldn't touch the list.");
}

#[test]
fn test_splice() {
    let mut list = fruits();
    let removed = list.splice(2, None, []);
    assert_eq!(list.to_vec(), vec!["apple", "banana"], "Delete to the end.");
    assert_eq!(removed.to_vec(), vec!["pine", "banana", "ananas"]);

    let mut list = fruits();
    let removed = list.splice(1, Some(-1), []);
    assert_eq!(list.to_vec(), vec!["apple", "ananas"], "Cut all but the last.");
    assert_eq!(removed.to_vec(), vec!["banana", "pine", "banana"]);

    let mut list = fruits();
    let len = list.size() as isize;
    list.splice(1, Some(len), ["orange"]);
    assert_eq!(list.to_vec(), vec!["apple", "orange"], "Replace to the end.");

    let mut list = fruits();
    list.splice(1, Some(2), ["strawberry", "blackberry"]);
    assert_eq!(
        list.to_vec(),
        vec!["apple", "strawberry", "blackberry", "banana", "ananas"],
        "Replace in the middle."
    );

    let mut list = fruits();
    let removed = list.splice(3, Some(0), ["orange", "strawberry"]);
    assert_eq!(
        list.to_vec(),
        vec!["apple", "banana", "pine", "orange", "strawberry", "banana", "ananas"],
        "Insert without removing."
    );
    assert!(removed.is_empty());

    let mut list = fruits();
    list.splice(-1, Some(1), ["orange"]);
    assert_eq!(list.to_vec(), vec!["apple", "banana", "pine", "banana", "orange"]);
}

#[test]
fn test_splice_round_trip() {
    let original = fruits();

    for offset in 0..=5 {
        for length in 0..=5 {
            let mut list = original.clone();
            let removed = list.splice(offset, Some(length), []);
            list.splice(offset, Some(0), removed);
            assert_eq!(list, original, "Splice at {offset} for {length} should round trip.");
        }
    }
}

#[test]
fn test_join() {
    let words = ArrayList::from(vec!["these", "are", "my", "items"]);
    assert_eq!(words.join(" "), "these are my items");
    assert_eq!(ArrayList::<i32>::new().join(", "), "");
}

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::new();
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.poll(), None, "Polling an empty queue should return None.");

    queue.enqueue(1);
    queue.enqueue_all([2, 3, 4]);
    assert_eq!(queue.peek(), Some(&1), "peek should return the earliest element.");
    assert_eq!(queue.size(), 4, "peek shouldn't remove anything.");

    let polled: Vec<i32> = std::iter::from_fn(|| queue.poll()).collect();
    assert_eq!(polled, vec![1, 2, 3, 4], "Elements should be polled in enqueue order.");
    assert!(queue.is_empty());

    queue.enqueue(5);
    queue.enqueue(6);
    assert_eq!(queue.poll(), Some(5));
    queue.enqueue(7);
    assert_eq!(queue.to_vec(), vec![6, 7]);
}

#[test]
fn test_stack_is_lifo() {
    let mut stack = Stack::new();
    assert_eq!(stack.pop(), None);

    stack.push_all(['a', 'b']);
    stack.push('c');
    assert_eq!(stack.peek(), Some(&'c'));
    assert_eq!(stack.pop(), Some('c'));
    assert_eq!(stack.pop(), Some('b'));
    assert_eq!(stack.pop(), Some('a'));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_set_uniqueness() {
    let mut set = Set::from(vec![1, 2, 2, 3, 1]);
    assert_eq!(set.to_vec(), vec![1, 2, 3], "Construction should drop duplicates.");

    set.add(2);
    assert_eq!(set.add_at(3, 0), Ok(()));
    assert_eq!(set.add_at(4, 10), Err(IndexOutOfBounds { index: 10, len: 3 }));
    set.add_all([4, 4, 5]);
    assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 5]);

    set.splice(0, Some(1), [5, 6]);
    assert_eq!(
        set.to_vec(),
        vec![6, 2, 3, 4, 5],
        "Replacements already in the set should be skipped."
    );

    let mapped = set.map(|n| n % 2);
    assert_eq!(mapped.to_vec(), vec![0, 1], "map should drop equal results.");

    let small = Set::from(vec![2, 4]);
    assert!(small.is_subset(&set));
    assert!(!set.is_subset(&small));
    assert!(set.is_superset(&small));
    assert!(!small.is_superset(&Set::from(vec![1, 2])));
}

#[test]
fn test_list_traits() {
    let list: ArrayList<i32> = (1..=3).collect();
    let doubled: Vec<i32> = (&list).into_iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(list.into_iter().sum::<i32>(), 6);

    let mut list = ArrayList::default();
    list.extend([1, 2]);
    assert_eq!(list.as_slice(), &[1, 2]);
}
