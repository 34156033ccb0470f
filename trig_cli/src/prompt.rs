//! Line-oriented prompts. Every numeric answer goes through the core parser,
//! so `π/4`, `√2` and `1/3` are accepted wherever a number is.

use std::io::{self, BufRead, Write};

use trig_core::expression::{parse_field, parse_field_or, parse_optional_field};
use trig_core::{TrigError, TrigResult};

/// Print `prompt` and read one line. `None` on end of input.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn answer(field: &str, prompt: &str) -> TrigResult<String> {
    required(field, read_line(prompt))
}

/// End of input is a missing answer, never a blank one.
fn required(field: &str, line: Option<String>) -> TrigResult<String> {
    line.ok_or_else(|| TrigError::missing_field(field))
}

/// A required number.
pub fn number(field: &str, prompt: &str) -> TrigResult<f64> {
    parse_field(field, &answer(field, prompt)?)
}

/// A number that may be left blank.
pub fn optional_number(field: &str, prompt: &str) -> TrigResult<Option<f64>> {
    parse_optional_field(field, &answer(field, prompt)?)
}

/// A number with a default for blank input.
pub fn number_or(field: &str, prompt: &str, default: f64) -> TrigResult<f64> {
    default_or_number(field, answer(field, prompt)?, default)
}

fn default_or_number(field: &str, text: String, default: f64) -> TrigResult<f64> {
    parse_field_or(field, &text, default)
}

/// Free text that must not be blank.
pub fn text(field: &str, prompt: &str) -> TrigResult<String> {
    let text = answer(field, prompt)?;
    if text.is_empty() {
        return Err(TrigError::missing_field(field));
    }
    Ok(text)
}

/// Numbered choice from `options`. Blank input picks the first option.
pub fn choice<T: Copy>(field: &str, title: &str, options: &[(&str, T)]) -> TrigResult<T> {
    println!("{}:", title);
    for (i, (label, _)) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }
    let text = answer(field, "Choice [1]: ")?;
    if text.is_empty() {
        return options
            .first()
            .map(|(_, value)| *value)
            .ok_or_else(|| TrigError::missing_field(field));
    }
    text.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(|(_, value)| *value)
        .ok_or_else(|| TrigError::invalid_input(field, text, "Not one of the listed options"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_is_missing() {
        let err = required("g", None).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_blank_answer_takes_default() {
        let text = required("h0", Some(String::new())).unwrap();
        assert_eq!(default_or_number("h0", text, 0.0).unwrap(), 0.0);
        let text = required("h0", Some("π/2".to_string())).unwrap();
        assert!((default_or_number("h0", text, 0.0).unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
