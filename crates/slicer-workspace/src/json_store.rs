//! The `json` store: fact tables as JSON files in one directory.

use crate::facts::{self, Column, Row};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use slicer_domain::{Browser, Cube, DenormalizeOptions, Store};
use slicer_types::{CubesError, SmokeTestError};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub(crate) struct JsonBrowser {
    pub dir: Utf8PathBuf,
    pub cube: Cube,
}

impl Browser for JsonBrowser {
    fn test(&self, aggregate: bool) -> Result<(), SmokeTestError> {
        let fact = facts::fact_name(&self.cube.metadata, &self.cube.name);
        let rows = facts::load_rows(&self.dir, &fact)?;
        let measures = facts::measure_columns(&self.cube.metadata);
        debug!(cube = %self.cube.name, %fact, rows = rows.len(), aggregate, "testing json fact table");

        for (i, row) in rows.iter().enumerate() {
            for m in &measures {
                if !row.contains_key(&m.physical) {
                    return Err(CubesError::Backend(format!(
                        "row {i} of fact table '{fact}' has no column '{}' for measure '{}'",
                        m.physical, m.logical
                    ))
                    .into());
                }
            }
        }

        if aggregate {
            for m in &measures {
                let total = sum(&rows, m, &fact)?;
                debug!(cube = %self.cube.name, measure = %m.logical, total, "aggregated");
            }
        }
        Ok(())
    }
}

fn sum(rows: &[Row], measure: &Column, fact: &str) -> Result<f64, CubesError> {
    let mut total = 0.0;
    for (i, row) in rows.iter().enumerate() {
        match row.get(&measure.physical) {
            None | Some(Value::Null) => {}
            Some(v) => match v.as_f64() {
                Some(n) => total += n,
                None => {
                    return Err(CubesError::Backend(format!(
                        "measure '{}' has a non-numeric value in row {i} of fact table '{fact}'",
                        measure.logical
                    )));
                }
            },
        }
    }
    Ok(total)
}

pub(crate) struct JsonStore<'a> {
    pub name: String,
    pub dir: Utf8PathBuf,
    /// Cube name to the model dimensions it uses.
    pub dimensions: &'a BTreeMap<String, Vec<Value>>,
}

impl Store for JsonStore<'_> {
    fn create_denormalized_view(
        &self,
        cube: &Cube,
        options: &DenormalizeOptions,
    ) -> Result<(), CubesError> {
        let view = options.view_name.as_str();
        if !facts::is_plain_name(view) {
            return Err(CubesError::Argument(format!(
                "'{view}' can not be used as a view name"
            )));
        }
        if let Some(schema) = options.schema.as_deref()
            && !facts::is_plain_name(schema)
        {
            return Err(CubesError::Argument(format!(
                "'{schema}' can not be used as a view schema"
            )));
        }
        if options.create_index {
            warn!(store = %self.name, %view, "json store has no indexes, ignoring index creation");
        }

        let target_dir = match options.schema.as_deref() {
            Some(schema) => self.dir.join(schema),
            None => self.dir.clone(),
        };
        let target = target_dir.join(format!("{view}.json"));
        if target.exists() && !options.replace {
            return Err(CubesError::Backend(format!(
                "view '{view}' already exists in store '{}'",
                self.name
            )));
        }

        let fact = facts::fact_name(&cube.metadata, &cube.name);
        let rows = facts::load_rows(&self.dir, &fact)?;
        let dimensions = self
            .dimensions
            .get(&cube.name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let mut columns = facts::attribute_columns(&cube.metadata, dimensions);
        columns.extend(facts::measure_columns(&cube.metadata));

        let projected: Vec<Value> = rows
            .iter()
            .map(|row| Value::Object(project(row, &columns)))
            .collect();

        write_view(&target_dir, &target, &Value::Array(projected))?;
        debug!(
            store = %self.name,
            cube = %cube.name,
            %target,
            materialize = options.materialize,
            "denormalized view written"
        );
        Ok(())
    }
}

fn project(row: &Row, columns: &[Column]) -> Map<String, Value> {
    columns
        .iter()
        .map(|c| {
            let value = row.get(&c.physical).cloned().unwrap_or(Value::Null);
            (c.logical.clone(), value)
        })
        .collect()
}

fn write_view(dir: &Utf8Path, target: &Utf8Path, rows: &Value) -> Result<(), CubesError> {
    std::fs::create_dir_all(dir).map_err(|e| CubesError::io(dir, e))?;
    let text = slicer_metadata::to_json_pretty(rows)?;
    std::fs::write(target, text).map_err(|e| CubesError::io(target, e))
}
