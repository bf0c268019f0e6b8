//! Result text

/// Fixed-point rendering with comma thousands separators: `1234.5` -> `1,234.50`
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// `"<value> <from> = <result> <to>"`
pub fn format_conversion(
    value: f64,
    from_unit: &str,
    result: f64,
    to_unit: &str,
    value_decimals: usize,
    result_decimals: usize,
) -> String {
    format!(
        "{} {} = {} {}",
        format_grouped(value, value_decimals),
        from_unit,
        format_grouped(result, result_decimals),
        to_unit
    )
}
