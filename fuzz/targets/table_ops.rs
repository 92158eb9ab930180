#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use chaintable::HashTable;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Insert { key: String, value: String },
    Remove { key: String },
    Retrieve { key: String },
    Resize,
}

#[derive(Debug, Arbitrary)]
struct TableFuzzInput {
    /// Начальная ёмкость (0 — проверка отказа)
    capacity: u8,
    ops: Vec<FuzzOp>,
}

fuzz_target!(|input: TableFuzzInput| {
    let Ok(mut table) = HashTable::new(input.capacity as usize) else {
        assert_eq!(input.capacity, 0);
        return;
    };
    let mut model = HashMap::new();

    for op in input.ops {
        match op {
            FuzzOp::Insert { key, value } => {
                let was_new = table.insert(&key, &value).unwrap();
                assert_eq!(was_new, model.insert(key, value).is_none());
            }
            FuzzOp::Remove { key } => {
                assert_eq!(table.remove(&key), model.remove(&key).is_some());
            }
            FuzzOp::Retrieve { key } => {
                assert_eq!(table.retrieve(&key), model.get(&key).map(String::as_str));
            }
            FuzzOp::Resize => {
                // держим таблицу небольшой
                if table.capacity() < 4096 {
                    table = table.resize().unwrap();
                }
            }
        }
        assert_eq!(table.len(), model.len());
    }
});
