use idna_table::{IdnaStatus, LAST_CODE_POINT};

use crate::{CodePointRange, TableError};

/// разбор строки IdnaMappingTable.txt
///
/// формат: `<cp>[..<cp>] ; <status> [; <mapped-cp> [<cp>...]] [# комментарий]`
/// пустые строки и строки, состоящие только из комментария, записей не дают
pub fn parse_line(line: &str) -> Result<Option<CodePointRange>, TableError>
{
    let line = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    }
    .trim();

    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(';').map(str::trim);

    // диапазон
    let (first, last) = parse_range(fields.next().unwrap_or_default())?;

    // статус
    let status = fields.next().unwrap_or_default();
    let status = IdnaStatus::from_tag(status)
        .ok_or_else(|| TableError::InvalidStatus(status.to_owned()))?;

    // замена: берём только первый кодпоинт, остальные (и пометки IDNA2008 в 4й колонке) отбрасываем.
    // у deviation тоже бывает замена, но в таблицы замен она не попадает
    let mapped = match status.is_mapped() {
        true => {
            let mapping = fields.next().unwrap_or_default();

            match mapping.split_whitespace().next() {
                Some(code) => Some(parse_code_point(code)?),
                None => return Err(TableError::MalformedCodePoint(line.to_owned())),
            }
        }
        false => None,
    };

    Ok(Some(CodePointRange {
        first,
        last,
        status,
        mapped,
    }))
}

/// разбор всего текста таблицы, с сохранением порядка записей
pub fn parse_table(text: &str) -> Result<Vec<CodePointRange>, TableError>
{
    let mut ranges = vec![];

    for line in text.lines() {
        if let Some(range) = parse_line(line)? {
            ranges.push(range);
        }
    }

    Ok(ranges)
}

/// кодпоинт или диапазон `first..last`
fn parse_range(value: &str) -> Result<(u32, u32), TableError>
{
    let (first, last) = match value.split_once("..") {
        Some((first, last)) => (parse_code_point(first)?, parse_code_point(last)?),
        None => {
            let code = parse_code_point(value)?;
            (code, code)
        }
    };

    match first <= last {
        true => Ok((first, last)),
        false => Err(TableError::MalformedCodePoint(value.to_owned())),
    }
}

/// шестнадцатеричный кодпоинт без префикса 0x
fn parse_code_point(value: &str) -> Result<u32, TableError>
{
    let malformed = || TableError::MalformedCodePoint(value.to_owned());

    // from_str_radix пропускает знак "+", поэтому проверяем символы сами
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    match u32::from_str_radix(value, 16) {
        Ok(code) if code <= LAST_CODE_POINT => Ok(code),
        _ => Err(malformed()),
    }
}
