use idna_mapping_source::{CodePointRange, TableError};
use idna_table::LAST_CODE_POINT;

/// схлопываем идущие подряд диапазоны с одинаковым статусом и убираем valid
///
/// входные диапазоны должны идти по возрастанию и не пересекаться, иначе - UnorderedRanges.
/// диапазон с first > last или за пределами U+10FFFF - MalformedCodePoint.
/// сливаются только смежные диапазоны (first == last + 1): если между диапазонами с одним
/// статусом есть промежуток, он так и остаётся промежутком (т.е. valid)
///
/// замены в таблицу статусов не попадают
pub fn coalesce(ranges: &[CodePointRange]) -> Result<Vec<CodePointRange>, TableError>
{
    if ranges.is_empty() {
        return Err(TableError::EmptyTable);
    }

    let merged = ranges.iter().try_fold(
        Vec::<CodePointRange>::new(),
        |mut merged, range| -> Result<_, TableError> {
            if range.first > range.last || range.last > LAST_CODE_POINT {
                return Err(TableError::MalformedCodePoint(range.to_string()));
            }

            if let Some(last) = merged.last_mut() {
                if range.first <= last.last {
                    return Err(TableError::UnorderedRanges {
                        previous: last.last,
                        first: range.first,
                    });
                }

                if last.status == range.status && last.last + 1 == range.first {
                    last.last = range.last;
                    return Ok(merged);
                }
            }

            merged.push(CodePointRange::new(range.first, range.last, range.status));

            Ok(merged)
        },
    )?;

    Ok(merged
        .into_iter()
        .filter(|range| !range.is_valid())
        .collect())
}
