use crate::models::{CalculationResult, CalorieInputs};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your Name and a positive Daily Calorie Goal.")]
    MissingOrInvalidGoal,

    #[error("Calorie inputs cannot be negative.")]
    NegativeMealValue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInputs {
    pub goal: f64,
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
}

impl ValidInputs {
    fn meals(&self) -> [f64; 4] {
        [self.breakfast, self.lunch, self.dinner, self.snacks]
    }
}

pub fn parse_goal(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = skip_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn parse_meal(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn validate(inputs: &CalorieInputs) -> Result<ValidInputs, ValidationError> {
    let goal = parse_goal(&inputs.daily_goal);
    let valid = ValidInputs {
        goal: goal.unwrap_or(0.0),
        breakfast: parse_meal(&inputs.breakfast),
        lunch: parse_meal(&inputs.lunch),
        dinner: parse_meal(&inputs.dinner),
        snacks: parse_meal(&inputs.snacks),
    };

    if inputs.name.trim().is_empty() || !goal.is_some_and(|goal| goal > 0.0) {
        return Err(ValidationError::MissingOrInvalidGoal);
    }

    if valid.meals().iter().any(|meal| *meal < 0.0) {
        return Err(ValidationError::NegativeMealValue);
    }

    Ok(valid)
}

pub fn calculate(valid: &ValidInputs) -> CalculationResult {
    let total_consumed: f64 = valid.meals().iter().sum();
    CalculationResult {
        total_consumed,
        remaining_calories: valid.goal - total_consumed,
    }
}

pub fn evaluate(inputs: &CalorieInputs) -> Result<CalculationResult, ValidationError> {
    validate(inputs).map(|valid| calculate(&valid))
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}
