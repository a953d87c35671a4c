use std::collections::HashSet;

use idna_mapping_source::{verify_partition, IDNA_MAPPING_TABLE};
use idna_table::{IdnaTable, IdnaTableData, Mapping16, Mapping32, StatusRange, LAST_CODE_POINT};
use idna_table_prepare::{coalesce, partition};

use crate::data::{bundled, reference_status, uncoalesced_ranges};

/// до схлопывания записи покрывают все кодпоинты ровно один раз
#[test]
fn records_form_partition()
{
    assert_eq!(verify_partition(&IDNA_MAPPING_TABLE), Ok(()));
}

/// повторное схлопывание ничего не меняет
#[test]
fn coalescing_is_idempotent()
{
    let once = coalesce(&IDNA_MAPPING_TABLE).unwrap();
    let twice = coalesce(&once).unwrap();

    assert_eq!(once, twice);
    assert!(once.len() < IDNA_MAPPING_TABLE.len());
}

/// диапазоны таблицы статусов не пересекаются и идут по возрастанию
#[test]
fn ranges_are_disjoint()
{
    let tables = bundled();

    for pair in tables.ranges.windows(2) {
        let (a, b) = (StatusRange::from_baked(pair[0]), StatusRange::from_baked(pair[1]));

        assert!(a.first() <= a.last());
        assert!(a.last() < b.first(), "{:04X}..{:04X} / {:04X}", a.first(), a.last(), b.first());
    }
}

/// схлопнутая таблица даёт те же статусы, что и записи как есть, для любого кодпоинта
#[test]
fn coalescing_preserves_statuses()
{
    let tables = bundled();
    let coalesced = tables.table();

    let ranges = uncoalesced_ranges(&IDNA_MAPPING_TABLE);
    let uncoalesced = IdnaTable::from_baked(IdnaTableData {
        ranges: &ranges,
        mapped_16: &[],
        mapped_32: &[],
    });

    for code in 0 ..= LAST_CODE_POINT + 1 {
        assert_eq!(coalesced.classify(code), uncoalesced.classify(code), "U+{:04X}", code);
    }

    // и обе совпадают с перебором записей
    for range in IDNA_MAPPING_TABLE.iter() {
        for code in [range.first, range.last] {
            assert_eq!(coalesced.classify(code), range.status, "U+{:04X}", code);
        }
    }
}

/// статус вне всех диапазонов таблицы - valid
#[test]
fn gaps_are_valid()
{
    const TEXT: &str = "\
        0000..002C ; disallowed_STD3_valid\n\
        002F ; disallowed_STD3_valid\n\
        0041 ; mapped ; 0061\n\
        E01F0..10FFFF ; disallowed\n";

    let (records, tables) = idna_table_prepare::compile(TEXT).unwrap();
    let table = tables.table();

    for code in (0 ..= 0x1_0000).chain(0xE01EF ..= 0xE01F0) {
        assert_eq!(table.classify(code), reference_status(&records, code), "U+{:04X}", code);
    }
}

/// 16- и 32-битные замены не пересекаются и вместе дают все замены из записей
#[test]
fn mappings_are_complete()
{
    let mapped = partition(&IDNA_MAPPING_TABLE).unwrap();

    let narrow: HashSet<(u32, u32)> = mapped
        .narrow
        .iter()
        .map(|&(code, mapped)| (code as u32, mapped as u32))
        .collect();
    let wide: HashSet<(u32, u32)> = mapped.wide.iter().copied().collect();

    assert!(narrow.is_disjoint(&wide));

    let expected: HashSet<(u32, u32)> = IDNA_MAPPING_TABLE
        .iter()
        .filter(|range| range.is_mapped())
        .flat_map(|range| (range.first ..= range.last).map(move |code| (code, range.mapped.unwrap())))
        .collect();

    assert_eq!(narrow.union(&wide).copied().collect::<HashSet<_>>(), expected);

    // разрядность определяется исходным кодпоинтом и заменой
    for &(code, mapped) in expected.iter() {
        let fits = code <= 0xFFFF && mapped <= 0xFFFF;

        assert_eq!(narrow.contains(&(code, mapped)), fits, "U+{:04X}", code);
        assert_eq!(wide.contains(&(code, mapped)), !fits, "U+{:04X}", code);
    }
}

/// записанные таблицы замен отсортированы и совпадают с разбиением
#[test]
fn mapping_tables_are_sorted()
{
    let tables = bundled();

    let narrow: Vec<u16> = tables.mapped_16.iter().map(|&e| Mapping16::from_baked(e).code()).collect();
    let wide: Vec<u32> = tables.mapped_32.iter().map(|&e| Mapping32::from_baked(e).code()).collect();

    assert!(narrow.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(wide.windows(2).all(|pair| pair[0] < pair[1]));
}

/// замены по таблицам совпадают с записями, всё остальное отображается само в себя
#[test]
fn mapping_lookup()
{
    let tables = bundled();
    let table = tables.table();

    let mut expected = vec![None; (LAST_CODE_POINT + 1) as usize];

    for range in IDNA_MAPPING_TABLE.iter().filter(|range| range.is_mapped()) {
        for code in range.first ..= range.last {
            expected[code as usize] = range.mapped;
        }
    }

    for code in 0 ..= LAST_CODE_POINT {
        let mapped = expected[code as usize].unwrap_or(code);

        assert_eq!(table.map_code_point(code), mapped, "U+{:04X}", code);
    }

    assert_eq!(table.map_code_point(LAST_CODE_POINT + 1), LAST_CODE_POINT + 1);
}

/// data/idna_table.rs.txt собран из текущей поставляемой таблицы текущим prepare
#[test]
fn baked_table_is_current()
{
    let tables = bundled();
    let baked = idna_table::idna();

    assert_eq!(baked.ranges, tables.ranges.as_slice());
    assert_eq!(baked.mapped_16, tables.mapped_16.as_slice());
    assert_eq!(baked.mapped_32, tables.mapped_32.as_slice());

    assert_eq!(
        idna_table_prepare::output::format_tables(&tables),
        include_str!("./../../data/idna_table.rs.txt")
    );
}

/// таблица из data/idna_table.rs.txt и таблица, собранная в памяти, дают одно и то же для любого кодпоинта
#[test]
fn baked_table_lookup()
{
    let tables = bundled();
    let prepared = tables.table();
    let baked = IdnaTable::new();

    assert_eq!(baked.len(), prepared.len());

    for code in 0 ..= LAST_CODE_POINT + 1 {
        assert_eq!(baked.classify(code), prepared.classify(code), "U+{:04X}", code);
        assert_eq!(baked.map_code_point(code), prepared.map_code_point(code), "U+{:04X}", code);
    }
}
