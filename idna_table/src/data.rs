/// структура хранимых данных таблицы IDNA
///
/// в таком виде таблицу выводит prepare
pub struct IdnaTableData<'a>
{
    /// диапазоны кодпоинтов со статусом, отличным от valid (см. StatusRange)
    pub ranges: &'a [u64],
    /// замены, где исходный кодпоинт и замена укладываются в 16 бит (см. Mapping16)
    pub mapped_16: &'a [u32],
    /// остальные замены (см. Mapping32)
    pub mapped_32: &'a [u64],
}

/// таблицы, собранные из поставляемой с idna_mapping_source сокращенной IdnaMappingTable.txt
///
/// для рабочей таблицы нужно пересобрать data/idna_table.rs.txt из полного файла:
/// `prepare <IdnaMappingTable.txt> ./../data/idna_table.rs.txt`
pub fn idna<'a>() -> IdnaTableData<'a>
{
    include!("./../../data/idna_table.rs.txt")
}
