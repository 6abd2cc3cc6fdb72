use gdp_api_types::ValueFormat;

const UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// One decimal place with a thousands suffix, ie. 1.2B
fn short_number(value: f64) -> String {
    let mut scaled = value;
    let mut unit = 0;
    while scaled >= 1000.0 && unit < UNITS.len() - 1 {
        scaled /= 1000.0;
        unit += 1;
    }
    // 999_960 rounds up to 1000.0K, which reads better as 1.0M
    if format!("{scaled:.1}").starts_with("1000") && unit < UNITS.len() - 1 {
        scaled /= 1000.0;
        unit += 1;
    }
    format!("{:.1}{}", scaled, UNITS[unit])
}

pub fn format_value(format: ValueFormat, value: f64) -> String {
    match format {
        ValueFormat::CurrencyAbbreviated => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{sign}${}", short_number(value.abs()))
        }
        ValueFormat::Plain => value.to_string(),
    }
}
