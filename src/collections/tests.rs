#![cfg(test)]

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    content: i32,
}

impl Item {
    fn new(content: i32) -> Item {
        Item { content }
    }
}

fn items() -> ArrayList<Item> {
    (1..=5).map(Item::new).collect()
}

fn has_content(item: &Item, query: &i32) -> bool {
    item.content == *query
}

#[test]
fn test_search_family() {
    let list = items();

    assert_eq!(list.find_by_query(&4, has_content), Some(&Item::new(4)));
    assert_eq!(list.find_by_query(&20, has_content), None, "A miss should be None.");
    assert!(list.search_by_query(&4, has_content));
    assert!(!list.search_by_query(&20, has_content));
    assert!(list.search(|item| item.content % 2 == 0));
    assert!(!list.search(|item| item.content > 5));
}

#[test]
fn test_find_first_and_last() {
    let fruits = ArrayList::from(vec!["apple", "banana", "pine", "banana", "ananas"]);

    assert_eq!(fruits.find(|fruit| fruit.starts_with('b')), Some(&"banana"));
    assert_eq!(fruits.find_last(|fruit| fruit.starts_with('a')), Some(&"ananas"));
    assert_eq!(
        fruits.find_last_by_query("mango", |fruit, query| *fruit == query),
        None,
        "A missing query should find nothing."
    );
}

#[test]
fn test_find_all() {
    let fruits = ArrayList::from(vec!["apple", "banana", "pine", "banana", "ananas"]);

    let apples = fruits.find_all_by_query("apple", |fruit, query| *fruit == query);
    assert_eq!(apples.size(), 1);

    let bananas = fruits.find_all(|fruit| *fruit == "banana");
    assert_eq!(bananas.to_vec(), vec!["banana", "banana"]);

    let mangoes = fruits.find_all(|fruit| *fruit == "mango");
    assert!(mangoes.is_empty(), "find_all should return an empty list on a miss.");
}

#[test]
fn test_some_and_every() {
    let list = items();

    assert!(list.some(|item| item.content == 3));
    assert!(!list.some(|item| item.content == 30));
    assert!(!ArrayList::<Item>::new().some(|_| true), "some should be false when empty.");

    assert!(list.every(|item| item.content > 0));
    assert!(!list.every(|item| item.content > 1));
    assert!(ArrayList::<Item>::new().every(|_| false), "every should be true when empty.");
}

#[test]
fn test_filter_keeps_order_and_satisfies_predicate() {
    let list = ArrayList::from(vec![5, 2, 8, 3, 9, 4]);
    let even = |n: &i32| n % 2 == 0;

    let filtered = list.filter(even);
    assert!(filtered.every(even));
    assert_eq!(filtered.to_vec(), vec![2, 8, 4]);
    assert_eq!(list.size(), 6, "filter shouldn't touch the original.");

    let set: Set<i32> = list.iter().copied().collect();
    assert_eq!(set.filter(even).to_vec(), vec![2, 8, 4]);

    let queue = Queue::from(vec![1, 2, 3, 4]);
    assert_eq!(queue.filter(even).poll(), Some(2));
}

#[test]
fn test_map_identity() {
    let list = ArrayList::from(vec!["a", "b", "c"]);
    assert_eq!(list.map(|item| *item), list);

    let set = Set::from(vec![3, 1, 2]);
    assert_eq!(set.map(|item| *item), set);

    let stack = Stack::from(vec![1, 2]);
    assert_eq!(stack.map(|item| item * 10).to_vec(), vec![10, 20]);

    let map = Map::from(vec![("a", 1), ("b", 2)]);
    assert_eq!(map.map(|value| *value), map);
}

#[test]
fn test_contains_and_clear() {
    let mut list = items();
    assert!(list.contains(&Item::new(2)));
    assert!(!list.contains(&Item::new(9)));

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);

    list.add(Item::new(7));
    assert_eq!(list.size(), 1, "A cleared list should still be usable.");
}

#[test]
fn test_cursor() {
    let list = ArrayList::from(vec!['x', 'y', 'z']);
    let mut cursor = list.cursor();

    assert!(cursor.valid());
    assert_eq!(cursor.key(), Some(0));
    assert_eq!(cursor.current(), Some(&'x'));
    assert_eq!(cursor.advance(), Some(&'y'));
    assert_eq!(cursor.key(), Some(1));
    assert_eq!(cursor.advance(), Some(&'z'));
    assert_eq!(cursor.advance(), None);
    assert!(!cursor.valid());
    assert_eq!(cursor.key(), None);
    assert_eq!(cursor.advance(), None, "An exhausted cursor should stay exhausted.");

    assert_eq!(cursor.rewind(), Some(&'x'));
    assert_eq!(
        cursor.collect::<Vec<_>>(),
        vec![(0, &'x'), (1, &'y'), (2, &'z')],
        "The cursor should iterate from its position."
    );

    let empty = ArrayList::<char>::new();
    let mut cursor = empty.cursor();
    assert!(!cursor.valid());
    assert_eq!(cursor.rewind(), None);
}

#[test]
fn test_clone_is_independent() {
    let fruits = ArrayList::from(vec!["apple", "banana"]);
    let mut cloned = fruits.clone();

    assert_eq!(fruits, cloned);
    cloned.add("pine");
    assert_eq!(fruits.size(), 2, "Changes to a clone shouldn't affect the original.");
    assert_eq!(cloned.size(), 3);
}

#[test]
fn test_error_conversion() {
    let error: crate::Error = IndexOutOfBounds { index: 3, len: 1 }.into();
    assert!(error.is_index_out_of_bounds());
    assert_eq!(error.to_string(), "Index 3 is out of bounds for a list of 1 elements!");
}
