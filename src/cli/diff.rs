use std::error::Error;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use gendiff::diff::diff;
use gendiff::input::read_file;
use gendiff::path::Spath;
use gendiff::resolve::{ResolveError, resolve_ref, value_type_desc};

use crate::cli::DiffArgs;

#[derive(Debug, thiserror::Error)]
enum FilterError {
    #[error("the filter path '{path}' must resolve to an object, found {found}")]
    NotAnObject { path: Spath, found: String },
}

pub fn handle_diff_command(args: DiffArgs) -> Result<(), Box<dyn Error>> {
    let mut left = read_file(&args.file1)?;
    let mut right = read_file(&args.file2)?;

    if let Some(raw) = &args.filter {
        let path = Spath::try_from(raw.as_str())?;
        left = narrow(&left, &path, "first")?;
        right = narrow(&right, &path, "second")?;
    }

    let result = diff(&left, &right)?;
    debug!(format = %args.format, nodes = result.len(), "rendering diff");

    println!("{}", args.format.render(&result)?);
    Ok(())
}

// A side where the filter path does not resolve still takes part in the
// comparison, as an empty object, so the other side shows up as all
// added/removed.
fn narrow(doc: &Value, path: &Spath, side: &str) -> Result<Value, Box<dyn Error>> {
    match resolve_ref(doc, path) {
        Ok(Value::Object(map)) => Ok(Value::Object(map.clone())),
        Ok(other) => Err(FilterError::NotAnObject {
            path: path.clone(),
            found: value_type_desc(other).to_string(),
        }
        .into()),
        Err(ResolveError::NotFound) => {
            warn!(%path, side, "filter path not found, comparing against an empty object");
            Ok(Value::Object(Map::new()))
        }
        Err(e) => Err(e.into()),
    }
}
