use std::collections::HashMap;

use idna_mapping_source::{CodePointRange, IdnaStatus, IDNA_MAPPING_TABLE};

/// сколько записей и кодпоинтов приходится на каждый статус?
/// сколько замен укладывается в 16 бит?
fn main()
{
    let table: &Vec<CodePointRange> = &IDNA_MAPPING_TABLE;

    let mut records: HashMap<IdnaStatus, (usize, u32)> = HashMap::new();

    let mut narrow = 0;
    let mut wide = 0;

    for range in table.iter() {
        let entry = records.entry(range.status).or_default();

        entry.0 += 1;
        entry.1 += range.size();

        if !range.is_mapped() {
            continue;
        }

        match range.fits_16_bit() {
            true => narrow += range.size(),
            false => wide += range.size(),
        }
    }

    println!("\nзаписей: {}\n", table.len());

    for status in IdnaStatus::ALL {
        let (count, codes) = records.get(&status).copied().unwrap_or_default();

        println!("{:<24} записей: {:>4}, кодпоинтов: {:>7}", status.tag(), count, codes);
    }

    println!("\nзамены: 16 бит - {}, 32 бита - {}\n", narrow, wide);
}

/*

результат (сокращенная таблица из data/idna):

записей: 208

disallowed               записей:   16, кодпоинтов:  916658
disallowed_STD3_valid    записей:    5, кодпоинтов:      64
disallowed_STD3_mapped   записей:    8, кодпоинтов:      18
ignored                  записей:    5, кодпоинтов:     259
mapped                   записей:  132, кодпоинтов:     132
deviation                записей:    2, кодпоинтов:       3
valid                    записей:   40, кодпоинтов:  196978

замены: 16 бит - 113, 32 бита - 37

*/
