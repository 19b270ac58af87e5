use super::utils::{list, name_of, names};
use serde_json::Value;
use slicer_types::{Scope, ValidationFinding};

pub fn run(model: &Value, out: &mut Vec<ValidationFinding>) {
    for dim in list(model, "dimensions") {
        match dim {
            Value::String(name) => out.push(
                ValidationFinding::default_used(
                    Scope::Dimension,
                    "dimension defined only by name, flat dimension with a single level will be created",
                )
                .object(Some(name.as_str())),
            ),
            Value::Object(_) => check_dimension(dim, out),
            _ => out.push(ValidationFinding::error(
                Scope::Dimension,
                "dimension definition must be an object or a name",
            )),
        }
    }
}

fn check_dimension(dim: &Value, out: &mut Vec<ValidationFinding>) {
    let name = name_of(dim);
    if name.is_none() {
        out.push(ValidationFinding::error(
            Scope::Dimension,
            "dimension has no name",
        ));
    }

    let levels = list(dim, "levels");
    let mut level_names = names(levels);
    if levels.is_empty() {
        out.push(
            ValidationFinding::default_used(
                Scope::Dimension,
                "dimension has no levels, a single level named after the dimension will be created",
            )
            .object(name)
            .property("levels"),
        );
        if let Some(n) = name {
            level_names.insert(n);
        }
    }

    for level in levels {
        check_level(level, name.unwrap_or("?"), out);
    }

    let hierarchies = list(dim, "hierarchies");
    for hierarchy in hierarchies {
        let h_name = name_of(hierarchy);
        if h_name.is_none() {
            out.push(ValidationFinding::error(
                Scope::Hierarchy,
                format!(
                    "hierarchy in dimension '{}' has no name",
                    name.unwrap_or("?")
                ),
            ));
        }
        for level in list(hierarchy, "levels").iter().filter_map(name_of) {
            if !level_names.contains(level) {
                out.push(
                    ValidationFinding::error(
                        Scope::Hierarchy,
                        format!("hierarchy refers to unknown level '{level}'"),
                    )
                    .object(h_name)
                    .property("levels"),
                );
            }
        }
    }

    let hierarchy_names = names(hierarchies);
    match dim.get("default_hierarchy_name").and_then(Value::as_str) {
        Some(default) if !hierarchy_names.contains(default) => out.push(
            ValidationFinding::error(
                Scope::Dimension,
                format!("default hierarchy '{default}' does not exist"),
            )
            .object(name)
            .property("default_hierarchy_name"),
        ),
        Some(_) => {}
        None if hierarchies.len() > 1 && !hierarchy_names.contains("default") => out.push(
            ValidationFinding::error(
                Scope::Dimension,
                "dimension has more than one hierarchy but no default_hierarchy_name",
            )
            .object(name)
            .property("default_hierarchy_name"),
        ),
        None => {}
    }
}

fn check_level(level: &Value, dimension: &str, out: &mut Vec<ValidationFinding>) {
    let name = name_of(level);
    if name.is_none() {
        out.push(ValidationFinding::error(
            Scope::Level,
            format!("level in dimension '{dimension}' has no name"),
        ));
    }

    let attributes = list(level, "attributes");
    if attributes.is_empty() {
        out.push(
            ValidationFinding::default_used(
                Scope::Level,
                "level has no attributes, level name will be used as attribute",
            )
            .object(name)
            .property("attributes"),
        );
        return;
    }

    for attribute in attributes {
        if name_of(attribute).is_none() {
            out.push(ValidationFinding::error(
                Scope::Attribute,
                format!("attribute in level '{}' has no name", name.unwrap_or("?")),
            ));
        }
    }

    let attribute_names = names(attributes);
    match level.get("key").and_then(Value::as_str) {
        Some(key) if !attribute_names.contains(key) => out.push(
            ValidationFinding::error(
                Scope::Level,
                format!("key attribute '{key}' is not an attribute of the level"),
            )
            .object(name)
            .property("key"),
        ),
        Some(_) => {}
        None if attributes.len() > 1 => out.push(
            ValidationFinding::default_used(
                Scope::Level,
                "key attribute not specified, first attribute will be used",
            )
            .object(name)
            .property("key"),
        ),
        None => {}
    }
}
