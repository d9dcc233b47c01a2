//! Number formatting used by tables and metric cards.

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Inserts `,` between groups of three digits: `1561120` -> `1,561,120`.
pub fn group_thousands(v: i64) -> String {
    let grouped = group_digits(&v.unsigned_abs().to_string());
    if v < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Fixed two-decimal dollar amount: `1561120.0` -> `$1,561,120.00`.
pub fn format_usd(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if v < 0. && fixed != "0.00" { "-" } else { "" };

    format!("{sign}${}.{frac}", group_digits(int))
}

/// Ratio as a two-decimal percentage: `0.235684` -> `23.57%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.)
}

/// Count with an explicit sign: `+1,234` / `-1,234`.
pub fn format_signed(v: i64) -> String {
    if v < 0 {
        group_thousands(v)
    } else {
        format!("+{}", group_thousands(v))
    }
}

/// Whole dollars with an explicit sign: `+$1,234` / `-$1,234`.
pub fn format_signed_usd(v: i64) -> String {
    let sign = if v < 0 { '-' } else { '+' };
    format!("{sign}${}", group_thousands(v.abs()))
}

/// Whole dollars: `$45,120`.
pub fn format_whole_usd(v: i64) -> String {
    if v < 0 {
        format!("-${}", group_thousands(v.abs()))
    } else {
        format!("${}", group_thousands(v))
    }
}
