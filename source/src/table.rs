use crate::{parse_table, CodePointRange};

lazy_static! {
    /// сокращенная таблица IDNA, поставляемая вместе с крейтом
    pub static ref IDNA_MAPPING_TABLE: Vec<CodePointRange> = idna_mapping_table();
}

/// сокращенная IdnaMappingTable.txt: отдельные блоки перенесены дословно, остальное схлопнуто
/// в диапазоны-заглушки (см. заголовок файла). для сборки рабочей таблицы prepare получает полный файл
pub const DATA: &str = include_str!("./../data/idna/IdnaMappingTable.txt");

/// заголовок таблицы (комментарии до первой записи) помечает её как сокращенную
pub fn is_abridged(text: &str) -> bool
{
    text.lines()
        .map(str::trim)
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .any(|line| line.contains("(abridged)"))
}

/// разбор поставляемой таблицы
fn idna_mapping_table() -> Vec<CodePointRange>
{
    match parse_table(DATA) {
        Ok(ranges) => ranges,
        Err(error) => panic!("поставляемая IdnaMappingTable.txt повреждена: {}", error),
    }
}

#[test]
fn abridged_header()
{
    assert!(is_abridged(DATA));

    assert!(!is_abridged("# IdnaMappingTable.txt\n\n0000..10FFFF ; valid\n"));
    assert!(!is_abridged(""));

    // пометка после первой записи - уже не заголовок
    assert!(!is_abridged("0000..10FFFF ; valid\n# (abridged)\n"));
}
