/// ошибки разбора и компиляции таблицы IDNA
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TableError
{
    /// статус отсутствует или не является одним из семи известных тегов
    InvalidStatus(String),
    /// не шестнадцатеричное число, кодпоинт за пределами U+10FFFF,
    /// диапазон first > last или отсутствующая замена у mapped-статуса
    MalformedCodePoint(String),
    /// диапазоны идут не по возрастанию или пересекаются
    UnorderedRanges
    {
        previous: u32,
        first: u32,
    },
    /// в разбиении пространства кодпоинтов есть дыра: ожидали `expected`, встретили `found`
    CoverageGap
    {
        expected: u32,
        found: u32,
    },
    /// во входных данных нет ни одной записи
    EmptyTable,
    /// заголовок помечает таблицу как сокращенную: часть статусов в ней - заглушки
    AbridgedTable,
}

impl core::fmt::Display for TableError
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Self::InvalidStatus(status) => write!(f, "неизвестный статус: \"{}\"", status),
            Self::MalformedCodePoint(code) => write!(f, "некорректный кодпоинт: \"{}\"", code),
            Self::UnorderedRanges { previous, first } => write!(
                f,
                "диапазон U+{:04X} начинается не после предыдущего (U+{:04X})",
                first, previous
            ),
            Self::CoverageGap { expected, found } => write!(
                f,
                "пропущены кодпоинты: ожидали U+{:04X}, встретили U+{:04X}",
                expected, found
            ),
            Self::EmptyTable => write!(f, "таблица пуста"),
            Self::AbridgedTable => write!(
                f,
                "сокращенная таблица (abridged): статусы части кодпоинтов в ней не настоящие"
            ),
        }
    }
}

impl std::error::Error for TableError {}
