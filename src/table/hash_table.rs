//! Хеш-таблица с фиксированным числом бакетов и цепочками коллизий.
//!
//! Ёмкость меняется только явным вызовом [`HashTable::resize`], который
//! строит новую таблицу вдвое большего размера и оставляет исходную
//! нетронутой.

use std::{fmt, num::NonZeroUsize};

use chaintable_error::{ErrorExt, LogLevel, TableError, TableResult};
use tracing::{debug, error, info, trace};

use super::{
    hash::hash,
    pair::{Chain, Pair},
};

/// Хеш-таблица `String -> String` с раздельными цепочками.
///
/// **ИНВАРИАНТЫ:**
///
/// - `buckets.len() == capacity`
/// - каждая пара лежит в бакете `hash(key, capacity)`
/// - ключи во всей таблице попарно различны
/// - `len` равно общему числу пар во всех цепочках
pub struct HashTable {
    capacity: NonZeroUsize,
    buckets: Vec<Chain>,
    len: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl HashTable {
    /// Создаёт таблицу из `capacity` пустых бакетов.
    ///
    /// Нулевая ёмкость — ошибка [`TableError::InvalidCapacity`].
    pub fn new(capacity: usize) -> TableResult<Self> {
        let Some(capacity) = NonZeroUsize::new(capacity) else {
            let err = TableError::InvalidCapacity { capacity };
            log_error(&err);
            return Err(err);
        };

        let buckets = alloc_buckets(capacity).inspect_err(log_error)?;

        debug!(capacity = capacity.get(), "hash table created");

        Ok(HashTable {
            capacity,
            buckets,
            len: 0,
        })
    }

    /// Вставляет пару `(key, value)`.
    ///
    /// Существующая пара с тем же ключом удаляется, новая встаёт в начало
    /// цепочки. Возвращает `true`, если ключа раньше не было.
    pub fn insert(
        &mut self,
        key: &str,
        value: &str,
    ) -> TableResult<bool> {
        // копии выделяются до любых изменений таблицы
        let mut pair = Pair::new(key, value, None).inspect_err(log_error)?;

        let slot = self.bucket_index(key);
        let replaced = Self::unlink(&mut self.buckets[slot], key).is_some();

        pair.next = self.buckets[slot].take();
        self.buckets[slot] = Some(pair);

        if !replaced {
            self.len += 1;
        }

        trace!(key, bucket = slot, replaced, "insert");
        Ok(!replaced)
    }

    /// Возвращает значение для `key` или `None`, если ключа нет.
    pub fn retrieve(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.find(key).map(Pair::value)
    }

    /// Проверяет наличие ключа.
    pub fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.find(key).is_some()
    }

    /// Удаляет `key`. Возвращает `true`, если пара была удалена; отсутствие
    /// ключа не ошибка.
    pub fn remove(
        &mut self,
        key: &str,
    ) -> bool {
        let slot = self.bucket_index(key);
        let removed = Self::unlink(&mut self.buckets[slot], key).is_some();

        if removed {
            self.len -= 1;
        }

        trace!(key, bucket = slot, removed, "remove");
        removed
    }

    /// Строит новую таблицу удвоенной ёмкости и переносит в неё все пары
    /// обычной вставкой.
    ///
    /// Исходная таблица не меняется. Порядок пар внутри цепочек не
    /// сохраняется.
    pub fn resize(&self) -> TableResult<HashTable> {
        let capacity = self.capacity.get();
        let doubled = capacity.checked_mul(2).ok_or_else(|| {
            let err = TableError::CapacityOverflow { capacity };
            log_error(&err);
            err
        })?;

        let mut resized = HashTable::new(doubled)?;

        for bucket in &self.buckets {
            let mut cur = bucket.as_deref();
            while let Some(pair) = cur {
                resized.insert(pair.key(), pair.value())?;
                cur = pair.next.as_deref();
            }
        }

        debug!(
            from = capacity,
            to = doubled,
            entries = resized.len,
            "hash table resized"
        );

        Ok(resized)
    }

    /// Явно уничтожает таблицу вместе со всеми парами.
    ///
    /// Эквивалентно `drop(table)`.
    pub fn destroy(self) {
        debug!(
            capacity = self.capacity.get(),
            entries = self.len,
            "hash table destroyed"
        );
    }

    /// Число бакетов.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Число хранимых пар.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Отношение числа пар к числу бакетов.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity.get() as f64
    }

    /// Бакет, в который попадает `key` при текущей ёмкости.
    #[inline]
    pub fn bucket_index(
        &self,
        key: &str,
    ) -> usize {
        hash(key, self.capacity)
    }

    /// Длина цепочки бакета `bucket`, `None` для индекса вне таблицы.
    pub fn chain_len(
        &self,
        bucket: usize,
    ) -> Option<usize> {
        let mut cur = self.buckets.get(bucket)?.as_deref();
        let mut n = 0;
        while let Some(pair) = cur {
            n += 1;
            cur = pair.next.as_deref();
        }
        Some(n)
    }

    fn find(
        &self,
        key: &str,
    ) -> Option<&Pair> {
        let mut cur = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(pair) = cur {
            if pair.key() == key {
                return Some(pair);
            }
            cur = pair.next.as_deref();
        }
        None
    }

    /// Вынимает из цепочки первое звено с ключом `key`, подставляя вместо
    /// него его хвост.
    fn unlink(
        head: &mut Chain,
        key: &str,
    ) -> Option<Box<Pair>> {
        let mut cur = head;
        while cur.as_ref().is_some_and(|pair| pair.key() != key) {
            cur = &mut cur.as_mut()?.next;
        }

        let mut removed = cur.take()?;
        *cur = removed.next.take();
        Some(removed)
    }
}

/// Выделяет массив пустых бакетов с явной проверкой памяти.
fn alloc_buckets(capacity: NonZeroUsize) -> TableResult<Vec<Chain>> {
    let mut buckets = Vec::new();
    buckets
        .try_reserve_exact(capacity.get())
        .map_err(|_| TableError::AllocationFailed {
            what: "buckets",
            requested: capacity.get(),
        })?;
    buckets.resize_with(capacity.get(), || None);
    Ok(buckets)
}

fn log_error(err: &TableError) {
    let code = err.status_code();
    match err.log_level() {
        LogLevel::Error => error!(%code, "{err}"),
        LogLevel::Info => info!(%code, "{err}"),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для HashTable
////////////////////////////////////////////////////////////////////////////////

impl Drop for HashTable {
    fn drop(&mut self) {
        // цепочки разбираются итеративно, без рекурсии по `next`
        for bucket in self.buckets.iter_mut() {
            let mut cur = bucket.take();
            while let Some(mut pair) = cur {
                cur = pair.next.take();
            }
        }
    }
}

impl fmt::Debug for HashTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("capacity", &self.capacity.get())
            .field("len", &self.len)
            .field("load_factor", &self.load_factor())
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
