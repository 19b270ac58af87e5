use super::{cubes, dimensions, model_structure, run_all};
use crate::classify::render_scope;
use crate::test_support::{cube, dimension, model};
use serde_json::json;
use slicer_types::{Scope, Severity, ValidationFinding};

fn run(check: fn(&serde_json::Value, &mut Vec<ValidationFinding>), doc: serde_json::Value) -> Vec<ValidationFinding> {
    let mut out = Vec::new();
    check(&doc, &mut out);
    out
}

#[test]
fn non_object_model_stops_after_structure_check() {
    let mut out = Vec::new();
    run_all(&json!(["not", "a", "model"]), &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Error);
    assert_eq!(out[0].scope, Scope::Model);
}

#[test]
fn structure_reports_wrong_list_types_and_duplicates() {
    let doc = json!({
        "cubes": [{"name": "sales"}, {"name": "sales"}],
        "dimensions": "date",
    });
    let out = run(model_structure::run, doc);
    let messages: Vec<&str> = out.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(messages, vec!["'dimensions' must be a list", "duplicate cube 'sales'"]);
    assert_eq!(render_scope(&out[0]), "model property 'dimensions'");
}

#[test]
fn empty_model_is_only_a_warning() {
    let out = run(model_structure::run, json!({}));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(out[0].message, "model has no cubes");
}

#[test]
fn duplicate_dimensions_are_errors() {
    let doc = model(
        vec![cube("sales", &[], &["amount"])],
        vec![dimension("date", &["year"]), json!("date")],
    );
    let out = run(model_structure::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "duplicate dimension 'date'");
}

#[test]
fn cube_without_fact_uses_default() {
    let doc = model(
        vec![json!({"name": "sales", "measures": ["amount"]})],
        vec![],
    );
    let out = run(cubes::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Default);
    assert_eq!(render_scope(&out[0]), "cube 'sales' property 'fact'");
}

#[test]
fn cube_referencing_unknown_dimension() {
    let doc = model(
        vec![cube("sales", &["date", "product"], &["amount"])],
        vec![dimension("date", &["year"])],
    );
    let out = run(cubes::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Error);
    assert_eq!(out[0].message, "dimension 'product' is not defined in the model");
    assert_eq!(render_scope(&out[0]), "cube 'sales' property 'dimensions'");
}

#[test]
fn cube_measure_and_aggregate_problems() {
    let doc = model(
        vec![json!({
            "name": "sales",
            "fact": "f",
            "measures": [{"name": "amount"}, {"label": "No name"}, "amount"],
            "aggregates": [
                {"name": "amount_sum", "measure": "amount", "function": "sum"},
                {"name": "price_avg", "measure": "price", "function": "avg"},
                {"function": "count"}
            ]
        })],
        vec![],
    );
    let out = run(cubes::run, doc);
    let rendered: Vec<(Severity, String, &str)> = out
        .iter()
        .map(|f| (f.severity, render_scope(f), f.message.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            (
                Severity::Error,
                "unknown measure".to_string(),
                "measure in cube 'sales' has no name"
            ),
            (
                Severity::Error,
                "measure 'amount'".to_string(),
                "duplicate measure in cube 'sales'"
            ),
            (
                Severity::Error,
                "aggregate 'price_avg' property 'measure'".to_string(),
                "aggregate refers to unknown measure 'price'"
            ),
            (
                Severity::Error,
                "unknown aggregate".to_string(),
                "aggregate in cube 'sales' has no name"
            ),
        ]
    );
}

#[test]
fn nameless_cube_without_measures() {
    let doc = model(vec![json!({"fact": "f"})], vec![]);
    let out = run(cubes::run, doc);
    assert_eq!(out.len(), 2);
    assert_eq!(render_scope(&out[0]), "unknown cube");
    assert_eq!(out[1].severity, Severity::Warning);
    assert_eq!(render_scope(&out[1]), "unknown cube");
}

#[test]
fn dimension_given_by_name_is_a_default() {
    let doc = model(vec![], vec![json!("flag")]);
    let out = run(dimensions::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Default);
    assert_eq!(render_scope(&out[0]), "dimension 'flag'");
}

#[test]
fn dimension_without_levels_accepts_hierarchy_on_implicit_level() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "flag",
            "hierarchies": [{"name": "default", "levels": ["flag"]}]
        })],
    );
    let out = run(dimensions::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].severity, Severity::Default);
    assert_eq!(render_scope(&out[0]), "dimension 'flag' property 'levels'");
}

#[test]
fn level_defaults_and_key_errors() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "date",
            "levels": [
                "year",
                {"name": "month", "attributes": ["month", "month_name"]},
                {"name": "day", "attributes": ["day", {"label": "x"}], "key": "date"}
            ]
        })],
    );
    let out = run(dimensions::run, doc);
    let rendered: Vec<(Severity, String)> =
        out.iter().map(|f| (f.severity, render_scope(f))).collect();
    assert_eq!(
        rendered,
        vec![
            (Severity::Default, "level 'year' property 'attributes'".to_string()),
            (Severity::Default, "level 'month' property 'key'".to_string()),
            (Severity::Error, "unknown attribute".to_string()),
            (Severity::Error, "level 'day' property 'key'".to_string()),
        ]
    );
}

#[test]
fn single_attribute_is_the_key_without_a_finding() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "region",
            "levels": [{"name": "region", "attributes": ["region"]}]
        })],
    );
    assert!(run(dimensions::run, doc).is_empty());
}

#[test]
fn hierarchy_problems() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "date",
            "levels": ["year", "month"],
            "hierarchies": [
                {"name": "ym", "levels": ["year", "month"]},
                {"name": "yw", "levels": ["year", "week"]}
            ]
        })],
    );
    let out = run(dimensions::run, doc);
    let errors: Vec<&ValidationFinding> = out
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(render_scope(errors[0]), "hierarchy 'yw' property 'levels'");
    assert_eq!(
        errors[1].message,
        "dimension has more than one hierarchy but no default_hierarchy_name"
    );
}

#[test]
fn default_hierarchy_name_must_exist() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "date",
            "levels": [{"name": "year", "attributes": ["year"]}],
            "hierarchies": [{"name": "y", "levels": ["year"]}],
            "default_hierarchy_name": "ymd"
        })],
    );
    let out = run(dimensions::run, doc);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "default hierarchy 'ymd' does not exist");
}

#[test]
fn hierarchy_named_default_needs_no_default_hierarchy_name() {
    let doc = model(
        vec![],
        vec![json!({
            "name": "date",
            "levels": [
                {"name": "year", "attributes": ["year"]},
                {"name": "month", "attributes": ["month"]}
            ],
            "hierarchies": [
                {"name": "default", "levels": ["year", "month"]},
                {"name": "y", "levels": ["year"]}
            ]
        })],
    );
    let out = run(dimensions::run, doc);
    assert!(out.is_empty(), "{out:?}");
}
