/// Транзакция, привязанная к артикулу продавца.
///
/// По этому ключу агрегатор выбирает накопитель, в который попадёт транзакция.
pub trait SkuKeyed {
    /// Артикул продавца (SKU)
    fn sku(&self) -> &str;

    /// Номер строки исходного файла (для сообщений об ошибках)
    fn source_line(&self) -> usize;
}
