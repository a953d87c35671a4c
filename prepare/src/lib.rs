pub mod coalesce;
pub mod output;
pub mod partition;
pub mod tables;

pub use coalesce::coalesce;
pub use partition::{partition, MappedCodePoints};
pub use tables::{prepare, IdnaTables};

use idna_mapping_source::{is_abridged, parse_table, CodePointRange, TableError};

/// разбор текста IdnaMappingTable.txt и подготовка таблиц за один проход
pub fn compile(text: &str) -> Result<(Vec<CodePointRange>, IdnaTables), TableError>
{
    let records = parse_table(text)?;
    let tables = prepare(&records, &mut output::stats::StatusGroups::new())?;

    Ok((records, tables))
}

/// сокращенная таблица годится только для тестов: собираем её лишь по явному разрешению
pub fn check_source(text: &str, allow_abridged: bool) -> Result<(), TableError>
{
    match is_abridged(text) && !allow_abridged {
        true => Err(TableError::AbridgedTable),
        false => Ok(()),
    }
}

#[test]
fn compile_errors()
{
    assert_eq!(
        compile("00ZZ ; valid\n"),
        Err(TableError::MalformedCodePoint("00ZZ".to_owned()))
    );
    assert_eq!(compile(""), Err(TableError::EmptyTable));
    assert_eq!(
        compile("0041 ; mapped ; 0061\n0040 ; valid\n"),
        Err(TableError::UnorderedRanges {
            previous: 0x41,
            first: 0x40
        })
    );
}

#[test]
fn abridged_source()
{
    use idna_mapping_source::DATA;

    assert_eq!(check_source(DATA, false), Err(TableError::AbridgedTable));
    assert_eq!(check_source(DATA, true), Ok(()));
    assert_eq!(check_source("0000..10FFFF ; valid\n", false), Ok(()));
}
