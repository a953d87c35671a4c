pub use data::{idna, IdnaTableData};
pub use entry::{Mapping16, Mapping32, StatusRange};
pub use mapping::{MappingError, ProcessingOptions};
pub use status::IdnaStatus;

mod data;
mod entry;
mod mapping;
mod status;

/// последний кодпоинт Unicode
pub const LAST_CODE_POINT: u32 = 0x10FFFF;
/// последний кодпоинт, который может попасть в 16-битную таблицу замен
pub const LAST_16_BIT_CODE_POINT: u32 = 0xFFFF;

/// таблица статусов и замен IDNA
///
/// только чтение: таблицу можно использовать из нескольких потоков без синхронизации
#[derive(Debug, Clone, Copy)]
pub struct IdnaTable<'a>
{
    /// отсортированные непересекающиеся диапазоны, valid не записываются
    ranges: &'a [u64],
    /// замены для кодпоинтов до U+FFFF включительно, с заменой до U+FFFF
    mapped_16: &'a [u32],
    /// все остальные замены
    mapped_32: &'a [u64],
}

impl<'a> From<IdnaTableData<'a>> for IdnaTable<'a>
{
    fn from(source: IdnaTableData<'a>) -> Self
    {
        Self {
            ranges: source.ranges,
            mapped_16: source.mapped_16,
            mapped_32: source.mapped_32,
        }
    }
}

impl<'a> IdnaTable<'a>
{
    /// заранее подготовленные данные
    pub fn from_baked(source: IdnaTableData<'a>) -> Self
    {
        Self::from(source)
    }

    /// таблица из data/idna_table.rs.txt
    pub fn new() -> Self
    {
        Self::from_baked(data::idna())
    }

    /// статус кодпоинта
    ///
    /// ищем первый диапазон, последний кодпоинт которого не меньше искомого. если кодпоинт
    /// в него не входит - он попал в промежуток между диапазонами, т.е. в удаленный valid
    #[inline]
    pub fn classify(&self, code: u32) -> IdnaStatus
    {
        let index = self
            .ranges
            .partition_point(|&entry| StatusRange::from_baked(entry).last() < code);

        match self.ranges.get(index) {
            Some(&entry) => {
                let range = StatusRange::from_baked(entry);

                match range.first() <= code {
                    true => range.status(),
                    false => IdnaStatus::Valid,
                }
            }
            None => IdnaStatus::Valid,
        }
    }

    /// статус кодпоинта с учетом правил STD3
    #[inline]
    pub fn effective_status(&self, code: u32, use_std3_ascii_rules: bool) -> IdnaStatus
    {
        self.classify(code).resolve(use_std3_ascii_rules)
    }

    /// замена кодпоинта, или сам кодпоинт, если замены нет
    ///
    /// результат не зависит от статуса: кодпоинт без записи в таблицах замен отображается сам в себя
    #[inline]
    pub fn map_code_point(&self, code: u32) -> u32
    {
        if code <= LAST_16_BIT_CODE_POINT {
            if let Some(mapped) = self.map_code_point_16(code as u16) {
                return mapped as u32;
            }
        }

        // кодпоинт из BMP с заменой за пределами BMP хранится в 32-битной таблице
        self.map_code_point_32(code).unwrap_or(code)
    }

    #[inline(always)]
    fn map_code_point_16(&self, code: u16) -> Option<u16>
    {
        self.mapped_16
            .binary_search_by_key(&code, |&entry| Mapping16::from_baked(entry).code())
            .ok()
            .map(|index| Mapping16::from_baked(self.mapped_16[index]).mapped())
    }

    #[inline(always)]
    fn map_code_point_32(&self, code: u32) -> Option<u32>
    {
        self.mapped_32
            .binary_search_by_key(&code, |&entry| Mapping32::from_baked(entry).code())
            .ok()
            .map(|index| Mapping32::from_baked(self.mapped_32[index]).mapped())
    }

    /// количество записей в таблицах: диапазоны, 16-битные и 32-битные замены
    pub fn len(&self) -> (usize, usize, usize)
    {
        (self.ranges.len(), self.mapped_16.len(), self.mapped_32.len())
    }

    pub fn is_empty(&self) -> bool
    {
        self.ranges.is_empty() && self.mapped_16.is_empty() && self.mapped_32.is_empty()
    }
}

impl Default for IdnaTable<'_>
{
    fn default() -> Self
    {
        Self::new()
    }
}
