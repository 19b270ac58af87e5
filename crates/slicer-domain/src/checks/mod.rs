use serde_json::Value;
use slicer_types::ValidationFinding;

pub mod cubes;
pub mod dimensions;
pub mod model_structure;
pub mod utils;

#[cfg(test)]
mod tests;

pub fn run_all(model: &Value, out: &mut Vec<ValidationFinding>) {
    model_structure::run(model, out);
    if !model.is_object() {
        return;
    }
    cubes::run(model, out);
    dimensions::run(model, out);
}
