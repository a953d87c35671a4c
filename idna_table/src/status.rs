/// статус кодпоинта в таблице IDNA (UTS #46, IdnaMappingTable.txt)
/// 7 вариантов, в таблице хранится как u8
///
/// valid в таблицу не записывается - всё, что не найдено, считается допустимым
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum IdnaStatus
{
    /// кодпоинт запрещен
    Disallowed = 1,
    /// запрещен при использовании правил STD3, иначе - допустим
    DisallowedStd3Valid = 2,
    /// запрещен при использовании правил STD3, иначе - заменяется другим кодпоинтом
    DisallowedStd3Mapped = 3,
    /// игнорируется - то же самое, что замена на пустую строку
    Ignored = 4,
    /// заменяется другим кодпоинтом
    Mapped = 5,
    /// заменяется или остаётся как есть, в зависимости от переходной (transitional) обработки
    Deviation = 6,
    /// допустимый кодпоинт
    Valid = 7,
}

impl IdnaStatus
{
    /// все статусы, в порядке значений
    pub const ALL: [IdnaStatus; 7] = [
        Self::Disallowed,
        Self::DisallowedStd3Valid,
        Self::DisallowedStd3Mapped,
        Self::Ignored,
        Self::Mapped,
        Self::Deviation,
        Self::Valid,
    ];

    /// статус по тегу из IdnaMappingTable.txt
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self>
    {
        Some(match tag {
            "valid" => Self::Valid,
            "mapped" => Self::Mapped,
            "disallowed" => Self::Disallowed,
            "disallowed_STD3_valid" => Self::DisallowedStd3Valid,
            "disallowed_STD3_mapped" => Self::DisallowedStd3Mapped,
            "ignored" => Self::Ignored,
            "deviation" => Self::Deviation,
            _ => return None,
        })
    }

    /// тег статуса в том виде, в котором он записан в IdnaMappingTable.txt
    #[inline]
    pub fn tag(&self) -> &'static str
    {
        match self {
            Self::Valid => "valid",
            Self::Mapped => "mapped",
            Self::Disallowed => "disallowed",
            Self::DisallowedStd3Valid => "disallowed_STD3_valid",
            Self::DisallowedStd3Mapped => "disallowed_STD3_mapped",
            Self::Ignored => "ignored",
            Self::Deviation => "deviation",
        }
    }

    /// статус из запечённых данных
    /// неизвестное значение может быть только в испорченной таблице - считаем такой кодпоинт запрещенным
    #[inline(always)]
    pub fn from_baked(value: u8) -> Self
    {
        match value {
            2 => Self::DisallowedStd3Valid,
            3 => Self::DisallowedStd3Mapped,
            4 => Self::Ignored,
            5 => Self::Mapped,
            6 => Self::Deviation,
            7 => Self::Valid,
            _ => Self::Disallowed,
        }
    }

    /// кодпоинт с этим статусом имеет замену в таблицах маппинга
    #[inline]
    pub fn is_mapped(&self) -> bool
    {
        matches!(self, Self::Mapped | Self::DisallowedStd3Mapped)
    }

    #[inline]
    pub fn is_valid(&self) -> bool
    {
        *self == Self::Valid
    }

    /// статус с учетом правил STD3
    #[inline]
    pub fn resolve(self, use_std3_ascii_rules: bool) -> Self
    {
        match self {
            Self::DisallowedStd3Valid => match use_std3_ascii_rules {
                true => Self::Disallowed,
                false => Self::Valid,
            },
            Self::DisallowedStd3Mapped => match use_std3_ascii_rules {
                true => Self::Disallowed,
                false => Self::Mapped,
            },
            status => status,
        }
    }
}

impl From<IdnaStatus> for u8
{
    #[inline]
    fn from(value: IdnaStatus) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for IdnaStatus
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.tag())
    }
}

#[test]
fn tags()
{
    for status in IdnaStatus::ALL {
        assert_eq!(IdnaStatus::from_tag(status.tag()), Some(status));
        assert_eq!(IdnaStatus::from_baked(u8::from(status)), status);
    }

    assert_eq!(IdnaStatus::from_tag("Valid"), None);
    assert_eq!(IdnaStatus::from_tag("disallowed_STD3"), None);
    assert_eq!(IdnaStatus::from_baked(0), IdnaStatus::Disallowed);
}

#[test]
fn std3_resolution()
{
    use IdnaStatus::*;

    assert_eq!(DisallowedStd3Valid.resolve(true), Disallowed);
    assert_eq!(DisallowedStd3Valid.resolve(false), Valid);
    assert_eq!(DisallowedStd3Mapped.resolve(true), Disallowed);
    assert_eq!(DisallowedStd3Mapped.resolve(false), Mapped);
    assert_eq!(Deviation.resolve(true), Deviation);
    assert_eq!(Ignored.resolve(false), Ignored);
}
