use super::utils::{duplicates, list, name_of, names};
use serde_json::Value;
use slicer_types::{Scope, ValidationFinding};
use std::collections::BTreeSet;

pub fn run(model: &Value, out: &mut Vec<ValidationFinding>) {
    let defined_dimensions = names(list(model, "dimensions"));

    for cube in list(model, "cubes") {
        if !cube.is_object() {
            out.push(ValidationFinding::error(
                Scope::Cube,
                "cube definition must be an object",
            ));
            continue;
        }
        check_cube(cube, &defined_dimensions, out);
    }
}

fn check_cube(cube: &Value, defined_dimensions: &BTreeSet<&str>, out: &mut Vec<ValidationFinding>) {
    let name = name_of(cube);
    if name.is_none() {
        out.push(ValidationFinding::error(Scope::Cube, "cube has no name"));
    }

    let measures = list(cube, "measures");
    let aggregates = list(cube, "aggregates");

    if measures.is_empty() && aggregates.is_empty() {
        out.push(
            ValidationFinding::warning(Scope::Cube, "cube has no measures or aggregates")
                .object(name),
        );
    }

    if cube.get("fact").is_none() {
        out.push(
            ValidationFinding::default_used(
                Scope::Cube,
                "fact table not specified, cube name will be used",
            )
            .object(name)
            .property("fact"),
        );
    }

    for dim in list(cube, "dimensions") {
        match name_of(dim) {
            Some(d) if !defined_dimensions.contains(d) => out.push(
                ValidationFinding::error(
                    Scope::Cube,
                    format!("dimension '{d}' is not defined in the model"),
                )
                .object(name)
                .property("dimensions"),
            ),
            Some(_) => {}
            None => out.push(
                ValidationFinding::error(Scope::Cube, "dimension reference has no name")
                    .object(name)
                    .property("dimensions"),
            ),
        }
    }

    let cube_label = name.unwrap_or("?");

    for measure in measures {
        if name_of(measure).is_none() {
            out.push(ValidationFinding::error(
                Scope::Measure,
                format!("measure in cube '{cube_label}' has no name"),
            ));
        }
    }
    for dup in duplicates(measures) {
        out.push(
            ValidationFinding::error(
                Scope::Measure,
                format!("duplicate measure in cube '{cube_label}'"),
            )
            .object(Some(dup)),
        );
    }

    let measure_names = names(measures);
    for aggregate in aggregates {
        let agg_name = name_of(aggregate);
        if agg_name.is_none() {
            out.push(ValidationFinding::error(
                Scope::Aggregate,
                format!("aggregate in cube '{cube_label}' has no name"),
            ));
        }
        if let Some(measure) = aggregate.get("measure").and_then(Value::as_str)
            && !measure_names.contains(measure)
        {
            out.push(
                ValidationFinding::error(
                    Scope::Aggregate,
                    format!("aggregate refers to unknown measure '{measure}'"),
                )
                .object(agg_name)
                .property("measure"),
            );
        }
    }
}
