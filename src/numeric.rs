use serde::{Deserialize, Deserializer};
use serde_json::Value;

// "12.7" reads as 12, "42abc" as 42; anything unreadable is 0.
pub fn int_or_zero(value: Option<&str>) -> i64 {
    let text = match value {
        Some(text) => text.trim_start(),
        None => return 0,
    };
    let bytes = text.as_bytes();
    let mut end = sign_len(bytes);
    let digits_start = end;
    end += digit_run(&bytes[end..]);
    if end == digits_start {
        return 0;
    }
    text[..end].parse::<i64>().unwrap_or(0)
}

pub fn float_or_zero(value: Option<&str>) -> f64 {
    let text = match value {
        Some(text) => text.trim_start(),
        None => return 0.0,
    };
    let bytes = text.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

// Overflow pins to the largest finite value.
pub fn saturating_sum(total: f64, value: f64) -> f64 {
    let sum = total + value;
    if sum.is_finite() {
        sum
    } else if sum == f64::INFINITY {
        f64::MAX
    } else if sum == f64::NEG_INFINITY {
        f64::MIN
    } else {
        0.0
    }
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// String, number or null; any other JSON shape counts as absent.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
