use crate::calculator::evaluate;
use crate::models::{CalculationResult, CalorieInputs};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    DailyGoal,
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::DailyGoal,
        Field::Breakfast,
        Field::Lunch,
        Field::Dinner,
        Field::Snacks,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Empty,
    ErrorShown(String),
    ResultShown(CalculationResult),
}

/// View-model for one mounted calorie form.
///
/// Field setters store text verbatim. Only [`CalorieForm::calculate`] touches
/// the result and the error, and it always clears one of the two.
#[derive(Debug, Clone, Default)]
pub struct CalorieForm {
    inputs: CalorieInputs,
    result: Option<CalculationResult>,
    error: String,
}

impl CalorieForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &CalorieInputs {
        &self.inputs
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.inputs.name,
            Field::DailyGoal => &self.inputs.daily_goal,
            Field::Breakfast => &self.inputs.breakfast,
            Field::Lunch => &self.inputs.lunch,
            Field::Dinner => &self.inputs.dinner,
            Field::Snacks => &self.inputs.snacks,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.inputs.name,
            Field::DailyGoal => &mut self.inputs.daily_goal,
            Field::Breakfast => &mut self.inputs.breakfast,
            Field::Lunch => &mut self.inputs.lunch,
            Field::Dinner => &mut self.inputs.dinner,
            Field::Snacks => &mut self.inputs.snacks,
        };
        *slot = value.into();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set(Field::Name, value);
    }

    pub fn set_daily_goal(&mut self, value: impl Into<String>) {
        self.set(Field::DailyGoal, value);
    }

    pub fn set_breakfast(&mut self, value: impl Into<String>) {
        self.set(Field::Breakfast, value);
    }

    pub fn set_lunch(&mut self, value: impl Into<String>) {
        self.set(Field::Lunch, value);
    }

    pub fn set_dinner(&mut self, value: impl Into<String>) {
        self.set(Field::Dinner, value);
    }

    pub fn set_snacks(&mut self, value: impl Into<String>) {
        self.set(Field::Snacks, value);
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn calculate(&mut self) -> Outcome {
        match evaluate(&self.inputs) {
            Ok(result) => {
                debug!(
                    total = result.total_consumed,
                    remaining = result.remaining_calories,
                    "calculation succeeded"
                );
                self.error.clear();
                self.result = Some(result);
            }
            Err(err) => {
                debug!(?err, "calculation rejected");
                self.error = err.to_string();
                self.result = None;
            }
        }
        self.outcome()
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(result) = self.result {
            Outcome::ResultShown(result)
        } else if !self.error.is_empty() {
            Outcome::ErrorShown(self.error.clone())
        } else {
            Outcome::Empty
        }
    }
}

impl From<CalorieInputs> for CalorieForm {
    fn from(inputs: CalorieInputs) -> Self {
        let mut form = CalorieForm::new();
        form.set_name(inputs.name);
        form.set_daily_goal(inputs.daily_goal);
        form.set_breakfast(inputs.breakfast);
        form.set_lunch(inputs.lunch);
        form.set_dinner(inputs.dinner);
        form.set_snacks(inputs.snacks);
        form
    }
}
