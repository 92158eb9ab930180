use std::num::NonZeroUsize;

use chaintable::{hash, HashTable, TableError};

#[test]
fn test_retrieved_values_are_independent_of_caller_strings() {
    let mut t = HashTable::new(4).unwrap();

    let mut key = String::from("name");
    let mut value = String::from("chaintable");
    t.insert(&key, &value).unwrap();

    // Вызывающая сторона меняет свои строки — таблица хранит копии
    key.push('!');
    value.clear();

    assert_eq!(t.retrieve("name"), Some("chaintable"));
    assert_eq!(t.retrieve(&key), None);
}

#[test]
fn test_multiple_shared_borrows() {
    let mut t = HashTable::new(2).unwrap();

    t.insert("x", "10").unwrap();
    t.insert("y", "20").unwrap();
    t.insert("z", "30").unwrap();

    // Все три ссылки живут одновременно
    let vx = t.retrieve("x").unwrap();
    let vy = t.retrieve("y").unwrap();
    let vz = t.retrieve("z").unwrap();

    assert_eq!(format!("{vx}{vy}{vz}"), "102030");
}

#[test]
fn test_overwrite_many_times_keeps_single_entry() {
    let mut t = HashTable::new(3).unwrap();

    for i in 0..100 {
        t.insert("counter", &i.to_string()).unwrap();
    }

    assert_eq!(t.len(), 1);
    assert_eq!(t.retrieve("counter"), Some("99"));
    assert_eq!(t.chain_len(t.bucket_index("counter")), Some(1));
}

#[test]
fn test_remove_then_reinsert() {
    let mut t = HashTable::new(2).unwrap();

    t.insert("k", "v1").unwrap();
    assert!(t.remove("k"));
    assert_eq!(t.retrieve("k"), None);

    assert!(t.insert("k", "v2").unwrap());
    assert_eq!(t.retrieve("k"), Some("v2"));
    assert_eq!(t.len(), 1);
}

#[test]
fn test_remove_in_reverse_order() {
    let mut t = HashTable::new(7).unwrap();

    for i in 0..1_000u32 {
        t.insert(&i.to_string(), &(i * 2).to_string()).unwrap();
    }

    for i in (0..1_000u32).rev() {
        assert!(t.remove(&i.to_string()), "key {i} not found while deleting");
        if i > 0 {
            let prev = (i - 1).to_string();
            let expected = ((i - 1) * 2).to_string();
            assert_eq!(t.retrieve(&prev), Some(expected.as_str()));
        }
    }

    assert!(t.is_empty());
}

#[test]
fn test_entries_stay_in_their_hash_bucket() {
    let mut t = HashTable::new(5).unwrap();
    let keys: Vec<String> = (0..200).map(|i| format!("key-{i}")).collect();

    for k in &keys {
        t.insert(k, "v").unwrap();
    }

    let capacity = NonZeroUsize::new(t.capacity()).unwrap();
    let mut per_bucket = vec![0usize; t.capacity()];
    for k in &keys {
        let b = hash(k, capacity);
        assert_eq!(t.bucket_index(k), b);
        per_bucket[b] += 1;
    }

    for (b, expected) in per_bucket.into_iter().enumerate() {
        assert_eq!(t.chain_len(b), Some(expected), "bucket {b}");
    }
}

#[test]
fn test_repeated_resize() {
    let mut t = HashTable::new(1).unwrap();
    for i in 0..64 {
        t.insert(&format!("k{i}"), &format!("v{i}")).unwrap();
    }

    for expected_capacity in [2, 4, 8, 16, 32] {
        let next = t.resize().unwrap();
        assert_eq!(next.capacity(), expected_capacity);
        assert_eq!(next.len(), 64);
        t = next;
    }

    assert_eq!(t.load_factor(), 2.0);
    for i in 0..64 {
        assert_eq!(t.retrieve(&format!("k{i}")), Some(format!("v{i}").as_str()));
    }
}

#[test]
fn test_resize_redistributes_chains() {
    let mut t = HashTable::new(1).unwrap();
    for i in 0..32 {
        t.insert(&format!("k{i}"), "v").unwrap();
    }
    assert_eq!(t.chain_len(0), Some(32));

    let r = t.resize().unwrap();
    let total: usize = (0..r.capacity()).filter_map(|b| r.chain_len(b)).sum();
    assert_eq!(total, 32);
    assert_eq!(r.chain_len(2), None);

    // исходная таблица не тронута
    assert_eq!(t.chain_len(0), Some(32));
}

#[test]
fn test_zero_capacity_is_invalid_argument() {
    assert_eq!(
        HashTable::new(0).unwrap_err(),
        TableError::InvalidCapacity { capacity: 0 }
    );
}

#[test]
fn test_error_status_codes() {
    use chaintable::{ErrorExt, StatusCode};

    let err = HashTable::new(0).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::InvalidArgs);
    assert!(err.status_code().is_client_error());

    let overflow = TableError::CapacityOverflow {
        capacity: usize::MAX,
    };
    assert_eq!(overflow.status_code(), StatusCode::InvalidArgs);
    assert!(overflow.status_code().is_client_error());
}
