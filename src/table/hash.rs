use std::num::NonZeroUsize;

/// Начальное значение аккумулятора djb2.
const DJB2_SEED: u64 = 5381;

/// Хеш djb2 по байтам ключа.
///
/// Аккумулятор 64-битный, переполнение заворачивается (`wrapping_*`), так что
/// один и тот же ключ всегда даёт одно и то же значение на любой платформе.
#[inline]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |acc, &b| {
        (acc << 5).wrapping_add(acc).wrapping_add(u64::from(b))
    })
}

/// Индекс бакета для `key` в таблице из `modulus` бакетов.
///
/// Размещение ключей зависит только от этой функции: менять её нельзя, иначе
/// разойдутся индексы между реализациями.
#[inline]
pub fn hash(
    key: &str,
    modulus: NonZeroUsize,
) -> usize {
    (djb2(key.as_bytes()) % modulus.get() as u64) as usize
}
