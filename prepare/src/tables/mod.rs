use idna_mapping_source::{CodePointRange, TableError};
use idna_table::{IdnaTable, IdnaTableData, Mapping16, Mapping32, StatusRange};

use crate::coalesce::coalesce;
use crate::output::stats::StatusGroups;
use crate::partition::partition;

/// подготовленные таблицы в том виде, в котором они будут записаны
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IdnaTables
{
    /// схлопнутые диапазоны без valid, см. StatusRange
    pub ranges: Vec<u64>,
    /// 16-битные замены, см. Mapping16
    pub mapped_16: Vec<u32>,
    /// 32-битные замены, см. Mapping32
    pub mapped_32: Vec<u64>,
}

impl IdnaTables
{
    /// данные в формате рантайм-таблицы
    pub fn as_data(&self) -> IdnaTableData<'_>
    {
        IdnaTableData {
            ranges: self.ranges.as_slice(),
            mapped_16: self.mapped_16.as_slice(),
            mapped_32: self.mapped_32.as_slice(),
        }
    }

    /// таблица для поиска, без записи в файл
    pub fn table(&self) -> IdnaTable<'_>
    {
        IdnaTable::from_baked(self.as_data())
    }
}

/// подготавливаем таблицы статусов и замен
///
/// таблица статусов и таблицы замен строятся независимо друг от друга из одних и тех же записей
pub fn prepare(ranges: &[CodePointRange], stats: &mut StatusGroups) -> Result<IdnaTables, TableError>
{
    let coalesced = coalesce(ranges)?;
    let mapped = partition(ranges)?;

    for range in coalesced.iter() {
        stats
            .entry(range.status)
            .or_default()
            .push(format!("{}\n", range));
    }

    Ok(IdnaTables {
        ranges: coalesced
            .iter()
            .map(|range| u64::from(StatusRange::new(range.first, range.last, range.status)))
            .collect(),
        mapped_16: mapped
            .narrow
            .iter()
            .map(|&(code, mapped)| u32::from(Mapping16::new(code, mapped)))
            .collect(),
        mapped_32: mapped
            .wide
            .iter()
            .map(|&(code, mapped)| u64::from(Mapping32::new(code, mapped)))
            .collect(),
    })
}
