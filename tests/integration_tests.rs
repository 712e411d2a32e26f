use stripedmap::{Error, StripedMap, StripedMapBuilder};

#[test]
fn test_basic_insert_get() {
    let map = StripedMap::new();

    map.insert("key1", "value1");
    assert_eq!(map.get(&"key1"), Some("value1"));

    // Upsert: same key overwrites the value in place
    map.insert("key1", "value2");
    assert_eq!(map.get(&"key1"), Some("value2"));
}

#[test]
fn test_missing_keys() {
    let map: StripedMap<&str, i32> = StripedMap::new();

    assert_eq!(map.get(&"never_inserted"), None);
    assert!(!map.contains_key(&"never_inserted"));
}

#[test]
fn test_overwrite_counts_once() {
    let map = StripedMap::new();

    map.insert("key", 1);
    map.insert("key", 2);

    assert_eq!(map.get(&"key"), Some(2));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_remove() {
    let map = StripedMap::new();

    map.insert("key1", "value1");
    assert!(map.remove(&"key1"));
    assert_eq!(map.get(&"key1"), None);
    assert!(!map.contains_key(&"key1"));

    // Removing again is a normal miss, not an error
    assert!(!map.remove(&"key1"));
}

#[test]
fn test_remove_absent_leaves_len_unchanged() {
    let map = StripedMap::new();

    map.insert("key1", "value1");
    map.insert("key2", "value2");

    assert!(!map.remove(&"absent"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_len_after_distinct_inserts() {
    let map = StripedMap::new();

    for i in 0..500 {
        map.insert(i, i * 2);
    }
    assert_eq!(map.len(), 500);
}

#[test]
fn test_len_and_is_empty() {
    let map = StripedMap::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);

    map.insert("key1", "value1");
    assert!(!map.is_empty());
    assert_eq!(map.len(), 1);

    map.insert("key2", "value2");
    assert_eq!(map.len(), 2);

    map.remove(&"key1");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_clear() {
    let map = StripedMap::new();

    for i in 0..100 {
        map.insert(i, format!("value_{}", i));
    }
    assert_eq!(map.len(), 100);

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    for i in 0..100 {
        assert_eq!(map.get(&i), None);
    }
}

#[test]
fn test_worked_example() {
    // Default construction: 1024 buckets
    let map = StripedMap::new();
    assert_eq!(map.bucket_count(), 1024);

    map.insert(1, "A");
    map.insert(2, "B");
    assert_eq!(map.len(), 2);

    assert!(map.remove(&1));
    assert_eq!(map.get(&1), None);
    assert!(map.contains_key(&2));

    map.clear();
    assert_eq!(map.len(), 0);
}

#[test]
fn test_stats() {
    let map = StripedMap::new();

    map.insert("key1", "value1");
    map.insert("key2", "value2");
    map.get(&"key1");
    map.get(&"key2");
    map.remove(&"key1");

    let stats = map.stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.bucket_sizes.len(), 1024); // Default 1024 buckets
    assert_eq!(stats.operations.len(), 1024);
}

#[test]
fn test_builder() {
    let map = StripedMapBuilder::new()
        .bucket_count(64)
        .unwrap()
        .capacity_per_bucket(4)
        .build::<String, i32>()
        .unwrap();

    map.insert("test".to_string(), 42);
    assert_eq!(map.get(&"test".to_string()), Some(42));
    assert_eq!(map.bucket_count(), 64);
}

#[test]
fn test_builder_invalid_bucket_count() {
    // Zero is rejected
    assert_eq!(
        StripedMapBuilder::new().bucket_count(0).unwrap_err(),
        Error::InvalidBucketCount
    );

    // Any positive count is fine, power of two or not
    assert!(StripedMapBuilder::new().bucket_count(7).is_ok());
    assert!(StripedMapBuilder::new().bucket_count(1).is_ok());
}

#[test]
fn test_single_bucket_map() {
    // With one bucket every key shares one chain; semantics must not change.
    let map = StripedMapBuilder::new()
        .bucket_count(1)
        .unwrap()
        .build::<i32, i32>()
        .unwrap();

    for i in 0..50 {
        map.insert(i, -i);
    }
    assert_eq!(map.len(), 50);
    assert_eq!(map.get(&25), Some(-25));
    assert!(map.remove(&25));
    assert_eq!(map.len(), 49);
}
