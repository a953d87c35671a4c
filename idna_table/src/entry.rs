use crate::IdnaStatus;

/// диапазон кодпоинтов с общим статусом, упакованный в u64:
/// первый кодпоинт - старшие 32 бита, последний - биты 8..32, статус - младший байт
///
/// диапазоны в таблице не пересекаются, поэтому упорядочены как по первому, так и по последнему кодпоинту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRange(u64);

impl StatusRange
{
    #[inline(always)]
    pub fn new(first: u32, last: u32, status: IdnaStatus) -> Self
    {
        // на последний кодпоинт - 24 бита
        debug_assert!(last <= crate::LAST_CODE_POINT, "U+{:04X} за пределами Unicode", last);

        Self((first as u64) << 32 | (last as u64) << 8 | u8::from(status) as u64)
    }

    #[inline(always)]
    pub fn from_baked(value: u64) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn first(&self) -> u32
    {
        (self.0 >> 32) as u32
    }

    #[inline(always)]
    pub fn last(&self) -> u32
    {
        (self.0 >> 8) as u32 & 0xFF_FFFF
    }

    #[inline(always)]
    pub fn status(&self) -> IdnaStatus
    {
        IdnaStatus::from_baked(self.0 as u8)
    }

    /// входит-ли кодпоинт в диапазон
    #[inline(always)]
    pub fn contains(&self, code: u32) -> bool
    {
        self.first() <= code && code <= self.last()
    }
}

impl From<StatusRange> for u64
{
    #[inline(always)]
    fn from(value: StatusRange) -> Self
    {
        value.0
    }
}

/// замена кодпоинта, где оба значения укладываются в 16 бит: исходный - старшие 16 бит, замена - младшие
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping16(u32);

impl Mapping16
{
    #[inline(always)]
    pub fn new(code: u16, mapped: u16) -> Self
    {
        Self((code as u32) << 16 | mapped as u32)
    }

    #[inline(always)]
    pub fn from_baked(value: u32) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn code(&self) -> u16
    {
        (self.0 >> 16) as u16
    }

    #[inline(always)]
    pub fn mapped(&self) -> u16
    {
        self.0 as u16
    }
}

impl From<Mapping16> for u32
{
    #[inline(always)]
    fn from(value: Mapping16) -> Self
    {
        value.0
    }
}

/// замена кодпоинта в 32-битном виде: исходный - старшие 32 бита, замена - младшие
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping32(u64);

impl Mapping32
{
    #[inline(always)]
    pub fn new(code: u32, mapped: u32) -> Self
    {
        Self((code as u64) << 32 | mapped as u64)
    }

    #[inline(always)]
    pub fn from_baked(value: u64) -> Self
    {
        Self(value)
    }

    #[inline(always)]
    pub fn code(&self) -> u32
    {
        (self.0 >> 32) as u32
    }

    #[inline(always)]
    pub fn mapped(&self) -> u32
    {
        self.0 as u32
    }
}

impl From<Mapping32> for u64
{
    #[inline(always)]
    fn from(value: Mapping32) -> Self
    {
        value.0
    }
}

#[test]
fn packing()
{
    let range = StatusRange::new(0xE01F0, 0x10FFFF, IdnaStatus::Disallowed);

    assert_eq!(range.first(), 0xE01F0);
    assert_eq!(range.last(), 0x10FFFF);
    assert_eq!(range.status(), IdnaStatus::Disallowed);
    assert!(range.contains(0x10FFFD));
    assert!(!range.contains(0xE01EF));

    let m16 = Mapping16::new(0xFF21, 0x0061);
    assert_eq!((m16.code(), m16.mapped()), (0xFF21, 0x0061));

    let m32 = Mapping32::new(0x1E900, 0x1E922);
    assert_eq!((m32.code(), m32.mapped()), (0x1E900, 0x1E922));
}

#[test]
fn range_order_follows_first()
{
    let a = u64::from(StatusRange::new(0x0000, 0x002C, IdnaStatus::DisallowedStd3Valid));
    let b = u64::from(StatusRange::new(0x002F, 0x002F, IdnaStatus::DisallowedStd3Valid));
    let c = u64::from(StatusRange::new(0x0041, 0x0041, IdnaStatus::Mapped));

    assert!(a < b && b < c);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn range_out_of_code_space()
{
    StatusRange::new(0x10FFF0, 0x110000, IdnaStatus::Disallowed);
}
