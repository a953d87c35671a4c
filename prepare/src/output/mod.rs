use std::fs::File;
use std::io::{self, Write};

use idna_mapping_source::CodePointRange;

use self::stats::{format_status_groups, StatusGroups};
use crate::tables::IdnaTables;

pub use self::format::format_num_vec;

pub mod format;
pub mod stats;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// текст таблиц для подключения через include!
pub fn format_tables(tables: &IdnaTables) -> String
{
    format!(
        "IdnaTableData {{\n  \
            ranges: &[{}  ],\n  \
            mapped_16: &[{}  ],\n  \
            mapped_32: &[{}  ],\n\
        }}\n",
        format_num_vec(tables.ranges.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(tables.mapped_16.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(tables.mapped_32.as_slice(), FORMAT_STRING_LENGTH),
    )
}

/// пишем таблицы IDNA и, если нужно, диапазоны по статусам
pub fn write(
    name: &str,
    records: &[CodePointRange],
    tables: &IdnaTables,
    stats: &StatusGroups,
    file: &mut File,
    stats_file: Option<&mut File>,
) -> io::Result<()>
{
    write!(file, "{}", format_tables(tables))?;

    if let Some(stats_file) = stats_file {
        write!(stats_file, "{}", format_status_groups(stats))?;
    }

    stats::print(
        name,
        records.len(),
        tables.ranges.as_slice(),
        tables.mapped_16.as_slice(),
        tables.mapped_32.as_slice(),
    );
    stats::print_groups(stats);

    Ok(())
}

#[test]
fn tables_text()
{
    use idna_table::{IdnaStatus, Mapping16, Mapping32, StatusRange};

    let tables = IdnaTables {
        ranges: vec![u64::from(StatusRange::new(0xAD, 0xAD, IdnaStatus::Ignored))],
        mapped_16: vec![u32::from(Mapping16::new(0x41, 0x61))],
        mapped_32: vec![u64::from(Mapping32::new(0x1E900, 0x1E922))],
    };

    assert_eq!(
        format_tables(&tables),
        concat!(
            "IdnaTableData {\n",
            "  ranges: &[\n    0xAD0000AD04, \n  ],\n",
            "  mapped_16: &[\n    0x410061, \n  ],\n",
            "  mapped_32: &[\n    0x1E9000001E922, \n  ],\n",
            "}\n"
        )
    );
}
