use super::utils::{duplicates, list};
use serde_json::Value;
use slicer_types::{Scope, ValidationFinding};

pub fn run(model: &Value, out: &mut Vec<ValidationFinding>) {
    let Some(map) = model.as_object() else {
        out.push(ValidationFinding::error(
            Scope::Model,
            "model metadata must be a JSON object",
        ));
        return;
    };

    for key in ["cubes", "dimensions"] {
        if let Some(v) = map.get(key)
            && !v.is_array()
        {
            out.push(
                ValidationFinding::error(Scope::Model, format!("'{key}' must be a list"))
                    .property(key),
            );
        }
    }

    let cubes = list(model, "cubes");
    if cubes.is_empty() {
        out.push(ValidationFinding::warning(Scope::Model, "model has no cubes"));
    }

    for name in duplicates(cubes) {
        out.push(ValidationFinding::error(
            Scope::Model,
            format!("duplicate cube '{name}'"),
        ));
    }

    for name in duplicates(list(model, "dimensions")) {
        out.push(ValidationFinding::error(
            Scope::Model,
            format!("duplicate dimension '{name}'"),
        ));
    }
}
