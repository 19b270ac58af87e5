//! The `denormalize` use case: create one flat view per cube in its store.

use camino::Utf8PathBuf;
use slicer_domain::{DenormalizeOptions, Workspace};
use std::io::Write;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct DenormalizeInput {
    pub config: Utf8PathBuf,
    /// Empty means every cube in the workspace.
    pub cubes: Vec<String>,
    pub prefix: Option<String>,
    pub schema: Option<String>,
    pub replace: bool,
    pub materialize: bool,
    pub index: bool,
}

pub fn run_denormalize_command(input: &DenormalizeInput, out: &mut dyn Write) -> anyhow::Result<()> {
    let workspace = slicer_workspace::FsWorkspace::open(&input.config)?;
    run_denormalize(&workspace, input, out)
}

pub fn run_denormalize(
    workspace: &dyn Workspace,
    input: &DenormalizeInput,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let names = if input.cubes.is_empty() {
        workspace.list_cubes()
    } else {
        input.cubes.clone()
    };
    let prefix = input
        .prefix
        .clone()
        .or_else(|| workspace.option("denormalized_view_prefix"))
        .unwrap_or_default();
    let schema = input
        .schema
        .clone()
        .or_else(|| workspace.option("denormalized_view_schema"));

    for name in &names {
        let cube = workspace.cube(name)?;
        let store = workspace.store(&cube.datastore)?;
        let view_name = format!("{prefix}{name}");

        writeln!(out, "denormalizing cube '{name}' into '{view_name}'")?;
        debug!(cube = %name, store = %cube.datastore, view = %view_name, "denormalizing");

        let options = DenormalizeOptions {
            view_name,
            schema: schema.clone(),
            materialize: input.materialize,
            replace: input.replace,
            create_index: input.index,
        };
        store.create_denormalized_view(&cube, &options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use slicer_domain::{Browser, Cube, Store};
    use slicer_types::CubesError;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct RecordingWorkspace {
        options: BTreeMap<String, String>,
        views: RefCell<Vec<(String, DenormalizeOptions)>>,
    }

    struct RecordingStore<'a> {
        views: &'a RefCell<Vec<(String, DenormalizeOptions)>>,
    }

    impl Store for RecordingStore<'_> {
        fn create_denormalized_view(
            &self,
            cube: &Cube,
            options: &DenormalizeOptions,
        ) -> Result<(), CubesError> {
            self.views
                .borrow_mut()
                .push((cube.name.clone(), options.clone()));
            Ok(())
        }
    }

    impl Workspace for RecordingWorkspace {
        fn list_cubes(&self) -> Vec<String> {
            vec!["sales".to_string(), "returns".to_string()]
        }

        fn cube(&self, name: &str) -> Result<Cube, CubesError> {
            if !self.list_cubes().iter().any(|c| c == name) {
                return Err(CubesError::NoSuchCube(name.to_string()));
            }
            Ok(Cube {
                name: name.to_string(),
                datastore: "default".to_string(),
                metadata: Value::Null,
            })
        }

        fn browser(&self, cube: &str) -> Result<Box<dyn Browser + '_>, CubesError> {
            Err(CubesError::NoSuchCube(cube.to_string()))
        }

        fn store(&self, _name: &str) -> Result<Box<dyn Store + '_>, CubesError> {
            Ok(Box::new(RecordingStore { views: &self.views }))
        }

        fn option(&self, name: &str) -> Option<String> {
            self.options.get(name).cloned()
        }
    }

    #[test]
    fn prefix_comes_from_workspace_option_when_not_given() {
        let mut ws = RecordingWorkspace::default();
        ws.options
            .insert("denormalized_view_prefix".to_string(), "mft_".to_string());

        let mut out = Vec::new();
        run_denormalize(&ws, &DenormalizeInput::default(), &mut out).expect("denormalize");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "denormalizing cube 'sales' into 'mft_sales'\n\
             denormalizing cube 'returns' into 'mft_returns'\n"
        );
        let views = ws.views.borrow();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].1.view_name, "mft_sales");
    }

    #[test]
    fn explicit_options_are_passed_through() {
        let ws = RecordingWorkspace::default();
        let input = DenormalizeInput {
            cubes: vec!["returns".to_string()],
            prefix: Some("v_".to_string()),
            schema: Some("views".to_string()),
            replace: true,
            materialize: true,
            index: true,
            ..DenormalizeInput::default()
        };
        run_denormalize(&ws, &input, &mut Vec::new()).expect("denormalize");

        let views = ws.views.borrow();
        assert_eq!(
            views.as_slice(),
            &[(
                "returns".to_string(),
                DenormalizeOptions {
                    view_name: "v_returns".to_string(),
                    schema: Some("views".to_string()),
                    materialize: true,
                    replace: true,
                    create_index: true,
                }
            )]
        );
    }

    #[test]
    fn no_prefix_uses_the_cube_name() {
        let ws = RecordingWorkspace::default();
        let input = DenormalizeInput {
            cubes: vec!["sales".to_string()],
            ..DenormalizeInput::default()
        };
        run_denormalize(&ws, &input, &mut Vec::new()).expect("denormalize");
        assert_eq!(ws.views.borrow()[0].1.view_name, "sales");
    }

    #[test]
    fn unknown_cube_fails() {
        let ws = RecordingWorkspace::default();
        let input = DenormalizeInput {
            cubes: vec!["nope".to_string()],
            ..DenormalizeInput::default()
        };
        let err = run_denormalize(&ws, &input, &mut Vec::new()).expect_err("unknown");
        assert!(matches!(
            err.downcast_ref::<CubesError>(),
            Some(CubesError::NoSuchCube(_))
        ));
    }
}
