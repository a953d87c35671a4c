use idna_table::LAST_CODE_POINT;

use crate::{CodePointRange, TableError};

/// проверка, что диапазоны покрывают U+0000 ..= U+10FFFF ровно один раз, без дыр и пересечений
///
/// для компиляции таблицы это не обязательно (промежутки считаются valid), но полная
/// IdnaMappingTable.txt всегда является таким разбиением
pub fn verify_partition(ranges: &[CodePointRange]) -> Result<(), TableError>
{
    if ranges.is_empty() {
        return Err(TableError::EmptyTable);
    }

    // следующий ожидаемый кодпоинт; u64 - чтобы не переполниться после U+10FFFF
    let mut expected: u64 = 0;

    for range in ranges {
        let first = range.first as u64;

        if first < expected {
            return Err(TableError::UnorderedRanges {
                previous: (expected - 1) as u32,
                first: range.first,
            });
        }

        if first > expected {
            return Err(TableError::CoverageGap {
                expected: expected as u32,
                found: range.first,
            });
        }

        expected = range.last as u64 + 1;
    }

    match expected > LAST_CODE_POINT as u64 {
        true => Ok(()),
        false => Err(TableError::CoverageGap {
            expected: expected as u32,
            found: LAST_CODE_POINT + 1,
        }),
    }
}
