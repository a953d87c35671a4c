use idna_mapping_source::{CodePointRange, TableError};

/// замены, разделенные по разрядности
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MappedCodePoints
{
    /// исходный кодпоинт и замена не больше U+FFFF
    pub narrow: Vec<(u16, u16)>,
    /// все остальные
    pub wide: Vec<(u32, u32)>,
}

impl MappedCodePoints
{
    pub fn len(&self) -> usize
    {
        self.narrow.len() + self.wide.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.narrow.is_empty() && self.wide.is_empty()
    }
}

/// раскладываем замены (mapped, disallowed_STD3_mapped) по 16- и 32-битным таблицам
///
/// замена всегда относится к одному кодпоинту: диапазон с заменой раскладывается на отдельные
/// кодпоинты с одной и той же заменой. порядок сохраняется, поэтому исходные кодпоинты должны
/// строго возрастать - иначе бинарный поиск по таблицам будет некорректен
pub fn partition(ranges: &[CodePointRange]) -> Result<MappedCodePoints, TableError>
{
    let mut result = MappedCodePoints::default();
    let mut previous: Option<u32> = None;

    for range in ranges.iter().filter(|range| range.is_mapped()) {
        let mapped = match range.mapped {
            Some(mapped) => mapped,
            None => return Err(TableError::MalformedCodePoint(range.to_string())),
        };

        if let Some(previous) = previous {
            if range.first <= previous {
                return Err(TableError::UnorderedRanges {
                    previous,
                    first: range.first,
                });
            }
        }

        for code in range.first ..= range.last {
            let single = CodePointRange::mapping(code, range.status, mapped);

            match single.fits_16_bit() {
                true => result.narrow.push((code as u16, mapped as u16)),
                false => result.wide.push((code, mapped)),
            }
        }

        previous = Some(range.last);
    }

    Ok(result)
}
