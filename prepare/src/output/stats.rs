use std::collections::HashMap;

use idna_table::IdnaStatus;

/// схлопнутые диапазоны, сгруппированные по статусу
pub type StatusGroups = HashMap<IdnaStatus, Vec<String>>;

/// информация о размере таблиц
pub fn print(filename: &str, records: usize, ranges: &[u64], mapped_16: &[u32], mapped_32: &[u64])
{
    println!(
        "\n{}:\n  \
        записей во входных данных: {}\n  \
        диапазонов после схлопывания: {} ({} байт)\n  \
        16-битных замен: {} ({} байт)\n  \
        32-битных замен: {} ({} байт)\n  \
        общий размер: {}\n",
        filename,
        records,
        ranges.len(),
        ranges.len() * 8,
        mapped_16.len(),
        mapped_16.len() * 4,
        mapped_32.len(),
        mapped_32.len() * 8,
        (ranges.len() * 8) + (mapped_16.len() * 4) + (mapped_32.len() * 8),
    );
}

/// количество диапазонов каждого статуса
pub fn print_groups(stats: &StatusGroups)
{
    for status in IdnaStatus::ALL {
        if let Some(group) = stats.get(&status) {
            println!("  {}: {}", status, group.len());
        }
    }

    println!();
}

/// диапазоны по статусам
pub fn format_status_groups(stats: &StatusGroups) -> String
{
    let mut output = String::new();

    for status in IdnaStatus::ALL {
        let data = match stats.get(&status) {
            Some(data) => data,
            None => continue,
        };

        output.push_str(
            format!(
                "{}\n\n{} \n",
                status,
                data.iter().map(|e| e.as_str()).collect::<String>()
            )
            .as_str(),
        );
    }

    output
}

#[test]
fn groups()
{
    let mut stats = StatusGroups::new();

    stats
        .entry(IdnaStatus::Ignored)
        .or_default()
        .push("00AD ; ignored\n".to_owned());
    stats
        .entry(IdnaStatus::Disallowed)
        .or_default()
        .push("0080..009F ; disallowed\n".to_owned());

    assert_eq!(
        format_status_groups(&stats),
        "disallowed\n\n0080..009F ; disallowed\n \nignored\n\n00AD ; ignored\n \n"
    );
}
