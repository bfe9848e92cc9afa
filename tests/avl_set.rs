use std::borrow::Borrow;

use avl_tree::avl_set::DefaultAvlSet;

#[test]
fn avl_set_works() {
    let mut set = DefaultAvlSet::<i32>::new();
    assert!(set.is_empty());

    for i in 0..1000 {
        assert!(set.insert(i));
    }
    assert_eq!(set.len(), 1000);
    assert!(!set.insert(12));

    assert!(set.remove(&12));
    assert!(!set.contains(&12));
    assert!(!set.remove(&12));
    assert!(set.insert(12));

    for i in 0..1000 {
        assert!(set.contains(&i));
    }
    assert_eq!(set.first(), Some(&0));
    assert_eq!(set.last(), Some(&999));
    set.as_tree().verify();
}

#[test]
fn works_on_pointer_types() {
    let mut set = DefaultAvlSet::<String>::new();
    assert!(!set.contains(&"test".into()));
    set.insert("test".into());
    assert!(set.contains(&"test".into()));
    for i in 0..100 {
        set.insert(i.to_string());
    }
    for i in 0..100 {
        assert!(set.contains(i.to_string().borrow()));
    }
    assert_eq!(set.len(), 101);
}

#[test]
fn collect_and_iterate() {
    let set: DefaultAvlSet<u8> = [9, 3, 7, 3, 1].into_iter().collect();
    assert_eq!(set.len(), 4);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
    assert_eq!(format!("{:?}", set), "{1, 3, 7, 9}");

    let mut total = 0;
    for key in &set {
        total += *key as u32;
    }
    assert_eq!(total, 20);

    let mut set = set;
    set.extend([2, 9]);
    assert_eq!(set.len(), 5);
    set.clear();
    assert!(set.is_empty());
}
