use idna_mapping_source::{IdnaStatus, TableError};
use idna_table::StatusRange;
use idna_table_prepare::compile;

/// valid не попадают в таблицу статусов, замена берётся по первому кодпоинту
#[test]
fn valid_records_are_dropped()
{
    let (_, tables) = compile(
        "0041 ; valid\n\
         0042..0043 ; valid\n\
         00DF ; mapped ; 0073 0073\n",
    )
    .unwrap();

    assert!(tables.ranges.iter().all(|&entry| StatusRange::from_baked(entry).first() == 0xDF));

    let table = tables.table();

    assert_eq!(table.classify(0x41), IdnaStatus::Valid);
    assert_eq!(table.classify(0x43), IdnaStatus::Valid);
    assert_eq!(table.map_code_point(0xDF), 0x73);
    assert_eq!(table.len(), (1, 1, 0));
}

/// смежные диапазоны с одним статусом схлопываются
#[test]
fn adjacent_ranges_are_merged()
{
    let (_, tables) = compile(
        "3400..4DBF ; disallowed\n\
         4DC0..4DFF ; disallowed\n",
    )
    .unwrap();

    assert_eq!(
        tables.ranges,
        vec![u64::from(StatusRange::new(0x3400, 0x4DFF, IdnaStatus::Disallowed))]
    );

    let table = tables.table();

    assert_eq!(table.classify(0x33FF), IdnaStatus::Valid);
    assert_eq!(table.classify(0x3400), IdnaStatus::Disallowed);
    assert_eq!(table.classify(0x4DC0), IdnaStatus::Disallowed);
    assert_eq!(table.classify(0x4DFF), IdnaStatus::Disallowed);
    assert_eq!(table.classify(0x4E00), IdnaStatus::Valid);
}

/// кодпоинт без записей - valid и отображается сам в себя
#[test]
fn supplementary_valid()
{
    let (_, tables) = compile("10000..10FFFF ; valid\n").unwrap();
    let table = tables.table();

    assert!(table.is_empty());
    assert_eq!(table.classify(0x10500), IdnaStatus::Valid);
    assert_eq!(table.map_code_point(0x10500), 0x10500);
}

/// замена за пределами BMP попадает только в 32-битную таблицу
#[test]
fn supplementary_mapping()
{
    let (_, tables) = compile("1E900 ; mapped ; 1E922\n").unwrap();

    assert!(tables.mapped_16.is_empty());
    assert_eq!(tables.mapped_32.len(), 1);

    let table = tables.table();

    assert_eq!(table.classify(0x1E900), IdnaStatus::Mapped);
    assert_eq!(table.map_code_point(0x1E900), 0x1E922);
    assert_eq!(table.map_code_point(0x1E901), 0x1E901);
}

#[test]
fn malformed_code_point()
{
    assert_eq!(
        compile("00ZZ ; valid\n").map(|_| ()),
        Err(TableError::MalformedCodePoint("00ZZ".to_owned()))
    );
}

#[test]
fn empty_input()
{
    assert_eq!(compile("").map(|_| ()), Err(TableError::EmptyTable));
    assert_eq!(
        compile("# IdnaMappingTable.txt\n\n# EOF\n").map(|_| ()),
        Err(TableError::EmptyTable)
    );
}

#[test]
fn invalid_status()
{
    assert_eq!(
        compile("0041 ; mapped ; 0061\n0042 ; remapped ; 0062\n").map(|_| ()),
        Err(TableError::InvalidStatus("remapped".to_owned()))
    );
}

/// значения на границах пространства кодпоинтов
#[test]
fn bundled_boundaries()
{
    let tables = crate::data::bundled();
    let table = tables.table();

    assert_eq!(table.classify(0x0000), IdnaStatus::DisallowedStd3Valid);
    assert_eq!(table.classify(0x002D), IdnaStatus::Valid);
    assert_eq!(table.classify(0x10FFFD), IdnaStatus::Disallowed);
    assert_eq!(table.classify(0x10FFFF), IdnaStatus::Disallowed);
    assert_eq!(table.classify(0x110000), IdnaStatus::Valid);

    assert_eq!(table.classify(0x00AD), IdnaStatus::Ignored);
    assert_eq!(table.classify(0x00DF), IdnaStatus::Deviation);
    assert_eq!(table.classify(0x200D), IdnaStatus::Deviation);
    assert_eq!(table.classify(0xFF01), IdnaStatus::DisallowedStd3Mapped);
    assert_eq!(table.classify(0xE0100), IdnaStatus::Ignored);

    assert_eq!(table.map_code_point(0x0041), 0x0061);
    assert_eq!(table.map_code_point(0x00A0), 0x0020);
    assert_eq!(table.map_code_point(0x00BC), 0x0031);
    assert_eq!(table.map_code_point(0xFF21), 0x0061);
    assert_eq!(table.map_code_point(0x1D400), 0x0061);
    assert_eq!(table.map_code_point(0x1E900), 0x1E922);

    // у deviation замены в таблицах нет
    assert_eq!(table.map_code_point(0x00DF), 0x00DF);
}
