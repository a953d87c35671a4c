use idna_table::{IdnaStatus, LAST_16_BIT_CODE_POINT};

/// диапазон кодпоинтов из IdnaMappingTable.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange
{
    /// первый кодпоинт
    pub first: u32,
    /// последний кодпоинт (включительно)
    pub last: u32,
    /// статус
    pub status: IdnaStatus,
    /// замена - может быть только у mapped и disallowed_STD3_mapped
    pub mapped: Option<u32>,
}

impl CodePointRange
{
    /// диапазон без замены
    #[inline]
    pub fn new(first: u32, last: u32, status: IdnaStatus) -> Self
    {
        Self {
            first,
            last,
            status,
            mapped: None,
        }
    }

    /// одиночный кодпоинт с заменой
    #[inline]
    pub fn mapping(code: u32, status: IdnaStatus, mapped: u32) -> Self
    {
        Self {
            first: code,
            last: code,
            status,
            mapped: Some(mapped),
        }
    }

    #[inline]
    pub fn is_mapped(&self) -> bool
    {
        self.status.is_mapped()
    }

    #[inline]
    pub fn is_valid(&self) -> bool
    {
        self.status.is_valid()
    }

    /// исходный кодпоинт и замена укладываются в 16 бит
    #[inline]
    pub fn fits_16_bit(&self) -> bool
    {
        self.first <= LAST_16_BIT_CODE_POINT
            && matches!(self.mapped, Some(mapped) if mapped <= LAST_16_BIT_CODE_POINT)
    }

    /// количество кодпоинтов в диапазоне
    #[inline]
    pub fn size(&self) -> u32
    {
        self.last - self.first + 1
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.first <= code && code <= self.last
    }
}

impl core::fmt::Display for CodePointRange
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self.first == self.last {
            true => write!(f, "{:04X} ; {}", self.first, self.status)?,
            false => write!(f, "{:04X}..{:04X} ; {}", self.first, self.last, self.status)?,
        }

        match self.mapped {
            Some(mapped) => write!(f, " ; {:04X}", mapped),
            None => Ok(()),
        }
    }
}

#[test]
fn fits_16_bit()
{
    use IdnaStatus::*;

    assert!(CodePointRange::mapping(0x00DF, Mapped, 0x0073).fits_16_bit());
    assert!(CodePointRange::mapping(0xFFFF, Mapped, 0xFFFF).fits_16_bit());
    assert!(!CodePointRange::mapping(0x1E900, Mapped, 0x1E922).fits_16_bit());
    assert!(!CodePointRange::mapping(0x1D400, Mapped, 0x0061).fits_16_bit());
    assert!(!CodePointRange::mapping(0xFFF0, Mapped, 0x10000).fits_16_bit());
    assert!(!CodePointRange::new(0x0041, 0x0041, Mapped).fits_16_bit());
}

#[test]
fn display()
{
    use IdnaStatus::*;

    assert_eq!(CodePointRange::new(0x3400, 0x4DBF, Disallowed).to_string(), "3400..4DBF ; disallowed");
    assert_eq!(
        CodePointRange::mapping(0xFF01, DisallowedStd3Mapped, 0x21).to_string(),
        "FF01 ; disallowed_STD3_mapped ; 0021"
    );
}
