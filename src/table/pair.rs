use chaintable_error::{TableError, TableResult};

/// Звено цепочки коллизий: собственные копии ключа и значения и ссылка на
/// следующее звено того же бакета.
pub(crate) struct Pair {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) next: Option<Box<Pair>>,
}

/// Голова цепочки одного бакета.
pub(crate) type Chain = Option<Box<Pair>>;

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Pair {
    /// Создаёт новое звено, копируя `key` и `value`.
    ///
    /// Нехватка памяти возвращается как [`TableError::AllocationFailed`].
    pub(crate) fn new(
        key: &str,
        value: &str,
        next: Chain,
    ) -> TableResult<Box<Self>> {
        let key = duplicate(key, "key")?;
        let value = duplicate(value, "value")?;

        Ok(Box::new(Pair { key, value, next }))
    }

    #[inline]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

/// Копирует строку с явной проверкой выделения памяти.
fn duplicate(
    src: &str,
    what: &'static str,
) -> TableResult<String> {
    let mut out = String::new();
    out.try_reserve_exact(src.len())
        .map_err(|_| TableError::AllocationFailed {
            what,
            requested: src.len(),
        })?;
    out.push_str(src);
    Ok(out)
}
