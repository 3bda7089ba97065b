use crate::calculator::evaluate;
use crate::errors::AppError;
use crate::form::CalorieForm;
use crate::models::{CalculateResponse, CalorieInputs};
use crate::ui::render_index;
use axum::{extract::rejection::JsonRejection, response::Html, Form, Json};
use tracing::debug;

pub async fn index() -> Result<Html<String>, AppError> {
    Ok(Html(render_index(&CalorieForm::new())?))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn calculate_form(Form(inputs): Form<CalorieInputs>) -> Result<Html<String>, AppError> {
    let mut form = CalorieForm::from(inputs);
    form.calculate();
    Ok(Html(render_index(&form)?))
}

pub async fn calculate_api(
    payload: Result<Json<CalorieInputs>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let Json(inputs) = payload?;
    let result = evaluate(&inputs).inspect_err(|err| debug!(?err, "api calculation rejected"))?;
    debug!(
        total = result.total_consumed,
        remaining = result.remaining_calories,
        "api calculation succeeded"
    );
    Ok(Json(result.into()))
}
