/// числа через запятую в шестнадцатеричном виде; строка, включая отступ, не длиннее `boundary`
///
/// каждое число начинается с новой строки, если не помещается в текущую, поэтому список
/// всегда открывается переводом строки и им же заканчивается
pub fn format_num_vec<T: Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    let mut output = String::new();
    let mut line_len = boundary;

    for value in input.iter().map(|&value| value.into()) {
        let value = match value {
            0 => "0, ".to_owned(),
            _ => format!("0x{:X}, ", value),
        };

        if line_len + value.len() > boundary {
            output.push_str("\n    ");
            line_len = 0;
        }

        line_len += value.len();
        output.push_str(&value);
    }

    output.push('\n');

    output
}

#[test]
fn wraps_lines()
{
    assert_eq!(format_num_vec::<u32>(&[], 20), "\n");
    assert_eq!(format_num_vec(&[0u32, 0x41, 0xFF21], 120), "\n    0, 0x41, 0xFF21, \n");
    assert_eq!(
        format_num_vec(&[0x1E900u64, 0x1E901, 0x1E902], 20),
        "\n    0x1E900, 0x1E901, \n    0x1E902, \n"
    );
}
