use std::fs::{self, File};
use std::process::ExitCode;

use idna_mapping_source::{parse_table, verify_partition};
use idna_table_prepare::output::stats::StatusGroups;
use idna_table_prepare::{check_source, output, prepare};

/// таблицы для подключения через include!
const DEFAULT_OUTPUT: &str = "./../data/idna_table.rs.txt";
/// разрешение собирать таблицы из сокращенной IdnaMappingTable.txt
const ABRIDGED_FLAG: &str = "--abridged";

const USAGE: &str = "prepare INPUT [OUTPUT] [STATS] [--abridged]\n  \
    INPUT - IdnaMappingTable.txt, https://www.unicode.org/Public/idna/";

fn main() -> ExitCode
{
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let allow_abridged = match args.iter().position(|arg| arg == ABRIDGED_FLAG) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    };

    let input = match args.first() {
        Some(input) => input.as_str(),
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    let output_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let stats = args.get(2).map(String::as_str);

    match run(input, output_path, stats, allow_abridged) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}: {}", input, error);
            ExitCode::FAILURE
        }
    }
}

fn run(
    input: &str,
    output_path: &str,
    stats_path: Option<&str>,
    allow_abridged: bool,
) -> Result<(), Box<dyn std::error::Error>>
{
    let text = fs::read_to_string(input)?;

    check_source(&text, allow_abridged)?;

    let records = parse_table(&text)?;

    // промежутки в таблице допустимы (считаются valid), но в полной таблице их быть не должно
    if let Err(error) = verify_partition(&records) {
        eprintln!("внимание: {}: {}", input, error);
    }

    let mut stats = StatusGroups::new();
    let tables = prepare(&records, &mut stats)?;

    // файлы создаём только после успешной компиляции
    let mut file = File::create(output_path)?;
    let mut stats_file = match stats_path {
        Some(path) => Some(File::create(path)?),
        None => None,
    };

    output::write(output_path, &records, &tables, &stats, &mut file, stats_file.as_mut())?;

    Ok(())
}
