use crate::form::CalorieForm;
use crate::models::{format_number, CalculationResult, CalorieInputs};
use askama::Template;

const EXCEEDED_MESSAGE: &str = "GOAL EXCEEDED! (Negative Remaining Calories)";
const WITHIN_GOAL_MESSAGE: &str = "You are within your daily goal!";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    inputs: &'a CalorieInputs,
    error: &'a str,
    result: Option<CalculationResult>,
}

pub fn render_index(form: &CalorieForm) -> Result<String, askama::Error> {
    IndexTemplate {
        inputs: form.inputs(),
        error: form.error(),
        result: form.result().copied(),
    }
    .render()
}

pub fn format_kcal(value: f64) -> String {
    format!("{} kcal", format_number(value))
}

impl CalculationResult {
    fn total_label(&self) -> String {
        format_kcal(self.total_consumed)
    }

    fn remaining_label(&self) -> String {
        format_kcal(self.remaining_calories)
    }

    fn state_class(&self) -> &'static str {
        if self.is_exceeded() { "exceeded" } else { "within" }
    }

    fn verdict(&self) -> &'static str {
        if self.is_exceeded() {
            EXCEEDED_MESSAGE
        } else {
            WITHIN_GOAL_MESSAGE
        }
    }
}
