use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CalorieInputs {
    pub name: String,
    pub daily_goal: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    WithinGoal,
    Exceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_consumed: f64,
    pub remaining_calories: f64,
}

impl CalculationResult {
    pub fn status(&self) -> GoalStatus {
        if self.remaining_calories < 0.0 {
            GoalStatus::Exceeded
        } else {
            GoalStatus::WithinGoal
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.status() == GoalStatus::Exceeded
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    #[serde(serialize_with = "serialize_kcal")]
    pub total_consumed: f64,
    #[serde(serialize_with = "serialize_kcal")]
    pub remaining_calories: f64,
    pub exceeded: bool,
}

impl From<CalculationResult> for CalculateResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            exceeded: result.is_exceeded(),
            total_consumed: result.total_consumed,
            remaining_calories: result.remaining_calories,
        }
    }
}

pub fn format_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Avoid rendering "-0".
        "0".to_string()
    } else {
        value.to_string()
    }
}

// JSON has no infinity, so an overflowed sum is sent as text.
fn serialize_kcal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_number(*value))
    }
}
