use crate::{IdnaStatus, IdnaTable};

/// параметры обработки доменного имени
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingOptions
{
    /// применять правила STD3: disallowed_STD3_* становятся disallowed
    pub use_std3_ascii_rules: bool,
    /// переходная обработка: deviation заменяются
    pub transitional_processing: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MappingError
{
    /// кодпоинт запрещен (с учетом правил STD3)
    DisallowedCodePoint(u32),
    /// замена кодпоинта не является скалярным значением Unicode
    InvalidMapping(u32),
}

impl core::fmt::Display for MappingError
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Self::DisallowedCodePoint(code) => write!(f, "запрещенный кодпоинт U+{:04X}", code),
            Self::InvalidMapping(code) => write!(f, "некорректная замена кодпоинта U+{:04X}", code),
        }
    }
}

impl std::error::Error for MappingError {}

impl<'a> IdnaTable<'a>
{
    /// замена кодпоинтов строки в соответствии с их статусами
    ///
    /// первый запрещенный кодпоинт прерывает обработку
    pub fn map_code_points(
        &self,
        input: &str,
        options: ProcessingOptions,
    ) -> Result<String, MappingError>
    {
        let mut result = String::with_capacity(input.len());

        for char in input.chars() {
            let code = u32::from(char);

            let code = match self.effective_status(code, options.use_std3_ascii_rules) {
                IdnaStatus::Valid => code,
                IdnaStatus::Ignored => continue,
                IdnaStatus::Mapped => self.map_code_point(code),
                IdnaStatus::Deviation => match options.transitional_processing {
                    true => self.map_code_point(code),
                    false => code,
                },
                IdnaStatus::Disallowed
                | IdnaStatus::DisallowedStd3Valid
                | IdnaStatus::DisallowedStd3Mapped => {
                    return Err(MappingError::DisallowedCodePoint(code))
                }
            };

            match char::from_u32(code) {
                Some(char) => result.push(char),
                None => return Err(MappingError::InvalidMapping(code)),
            }
        }

        Ok(result)
    }
}
