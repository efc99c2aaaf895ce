//! Duration strings such as `"300ms"`, `"-1.5h"` or `"2h45m"`.
//!
//! A duration is an optional sign followed by one or more decimal numbers,
//! each with an optional fraction and a unit suffix. Valid units are `ns`,
//! `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0` is also accepted.

use chrono::Duration;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TristateError};

lazy_static! {
    static ref DURATION: Regex =
        Regex::new(r"^[-+]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:ns|us|µs|μs|ms|s|m|h))+$").unwrap();
    static ref COMPONENT: Regex =
        Regex::new(r"([0-9]*)(?:\.([0-9]*))?(ns|us|µs|μs|ms|s|m|h)").unwrap();
}

// fraction digits beyond this cannot change a nanosecond count
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_nanos(unit: &str) -> u64 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        _ => 60 * 60 * 1_000_000_000,
    }
}

pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = |reason: &str| TristateError::convert("text", "duration", format!("{}: {:?}", reason, input));
    let unsigned = input.strip_prefix(['-', '+']).unwrap_or(input);
    if unsigned == "0" {
        return Ok(Duration::zero());
    }
    if !DURATION.is_match(input) {
        return Err(invalid("invalid duration"));
    }
    let negative = input.starts_with('-');
    let mut total: u64 = 0;
    for component in COMPONENT.captures_iter(unsigned) {
        let unit = unit_nanos(&component[3]);
        let whole = match &component[1] {
            "" => 0,
            digits => digits.parse::<u64>().map_err(|_| invalid("overflow"))?,
        };
        let mut nanos = whole.checked_mul(unit).ok_or_else(|| invalid("overflow"))?;
        if let Some(fraction) = component.get(2).map(|m| m.as_str()).filter(|f| !f.is_empty()) {
            let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            let scale = 10f64.powi(fraction.len() as i32);
            let digits = fraction.parse::<u64>().map_err(|_| invalid("overflow"))?;
            nanos = nanos
                .checked_add((digits as f64 * (unit as f64 / scale)) as u64)
                .ok_or_else(|| invalid("overflow"))?;
        }
        total = total.checked_add(nanos).ok_or_else(|| invalid("overflow"))?;
    }
    // the negative range reaches one nanosecond further than the positive one
    let signed = if negative { -i128::from(total) } else { i128::from(total) };
    let nanos = i64::try_from(signed).map_err(|_| invalid("overflow"))?;
    Ok(Duration::nanoseconds(nanos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units_and_fractions() {
        assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("2h45m").unwrap(), Duration::minutes(165));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::milliseconds(300));
        assert_eq!(parse_duration("-1.5s").unwrap(), Duration::milliseconds(-1500));
        assert_eq!(parse_duration("+.5us").unwrap(), Duration::nanoseconds(500));
        assert_eq!(parse_duration("1µs1ns").unwrap(), Duration::nanoseconds(1001));
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("1.s").unwrap(), Duration::seconds(1));
    }

    #[test]
    fn rejects_bad_input() {
        for input in ["", "1", "h", "1x", "1h-2m", ".s", "9999999999999999999h"] {
            assert!(parse_duration(input).is_err(), "{input}");
        }
    }
}
