use serde_json::{Value, json};

pub fn model(cubes: Vec<Value>, dimensions: Vec<Value>) -> Value {
    json!({
        "name": "test_model",
        "cubes": cubes,
        "dimensions": dimensions,
    })
}

/// A complete cube: fact table, dimension links and named measures.
pub fn cube(name: &str, dimensions: &[&str], measures: &[&str]) -> Value {
    let measures: Vec<Value> = measures.iter().map(|m| json!({ "name": m })).collect();
    json!({
        "name": name,
        "fact": format!("{name}_fact"),
        "dimensions": dimensions,
        "measures": measures,
    })
}

/// A dimension whose levels each carry one attribute named after the level.
pub fn dimension(name: &str, levels: &[&str]) -> Value {
    let levels: Vec<Value> = levels
        .iter()
        .map(|l| json!({ "name": l, "attributes": [l] }))
        .collect();
    json!({
        "name": name,
        "levels": levels,
    })
}
