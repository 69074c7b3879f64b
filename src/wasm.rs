//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::OptimizerError;
use crate::optimize::{OptimizedWorkflow, Optimizer};

/// Validate a workflow JSON: parse + graph validation.
/// Returns a JSON array of OptimizerError objects.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> Vec<ErrorDto> {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    let errors = crate::validate::validate_graph(&workflow);
    errors.into_iter().map(ErrorDto::from).collect()
}

/// Full pipeline: parse → optimize.
/// Returns a JSON object with either the optimized graph (success) or
/// `errors` (failure). The editor is expected to run `validate_workflow`
/// first; the optimizer itself stays tolerant of questionable graphs.
#[wasm_bindgen]
pub fn optimize_workflow(json: &str) -> JsValue {
    let result = optimize_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn optimize_workflow_inner(json: &str) -> OptimizeResult {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(errors) => {
            return OptimizeResult::Errors {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
            };
        }
    };

    match Optimizer::new().optimize(&workflow) {
        Ok(optimized) => OptimizeResult::Success(optimized),
        Err(e) => OptimizeResult::Errors {
            errors: vec![ErrorDto::from(OptimizerError::from(e))],
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_id: Option<String>,
}

impl From<OptimizerError> for ErrorDto {
    fn from(e: OptimizerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            node_id: e.node_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum OptimizeResult {
    #[serde(rename = "success")]
    Success(OptimizedWorkflow),
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
