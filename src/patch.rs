//! JSON Patch generation and partial updates of Poynt resources.

use crate::{
    apis::PoyntClientInner,
    error::ApiError,
    http::RequestSpec,
    Error,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single JSON Patch (RFC 6902) operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
}

/// Options for [`diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOptions {
    /// Never emit `remove` operations for keys missing from the new document.
    pub no_remove: bool,
    /// Diff arrays element by element instead of replacing them as a whole.
    pub traverse_arrays: bool,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            no_remove: true,
            traverse_arrays: false,
        }
    }
}

/// Update of an existing resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceUpdate {
    /// Patch operations sent as they are.
    Patch(Vec<PatchOperation>),
    /// The desired state of the whole resource, diffed against the current one.
    Replace(Value),
}

impl From<Vec<PatchOperation>> for ResourceUpdate {
    fn from(ops: Vec<PatchOperation>) -> Self {
        ResourceUpdate::Patch(ops)
    }
}

impl From<Value> for ResourceUpdate {
    fn from(resource: Value) -> Self {
        ResourceUpdate::Replace(resource)
    }
}

/// Computes the operations turning `old` into `new`.
pub fn diff(old: &Value, new: &Value, options: &PatchOptions) -> Vec<PatchOperation> {
    let mut ops = Vec::new();
    diff_value(old, new, String::new(), options, &mut ops);
    ops
}

fn diff_value(
    old: &Value,
    new: &Value,
    path: String,
    options: &PatchOptions,
    ops: &mut Vec<PatchOperation>,
) {
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => diff_objects(old, new, &path, options, ops),
        (Value::Array(old), Value::Array(new)) if options.traverse_arrays => {
            diff_arrays(old, new, &path, options, ops)
        }
        (old, new) if old != new => ops.push(PatchOperation::Replace {
            path,
            value: new.clone(),
        }),
        _ => {}
    }
}

fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    path: &str,
    options: &PatchOptions,
    ops: &mut Vec<PatchOperation>,
) {
    for (key, old_value) in old.iter().rev() {
        let child = format!("{}/{}", path, escape(key));
        match new.get(key) {
            Some(new_value) => diff_value(old_value, new_value, child, options, ops),
            None if !options.no_remove => ops.push(PatchOperation::Remove { path: child }),
            None => {}
        }
    }

    for (key, new_value) in new.iter().filter(|(key, _)| !old.contains_key(*key)) {
        ops.push(PatchOperation::Add {
            path: format!("{}/{}", path, escape(key)),
            value: new_value.clone(),
        });
    }
}

fn diff_arrays(
    old: &[Value],
    new: &[Value],
    path: &str,
    options: &PatchOptions,
    ops: &mut Vec<PatchOperation>,
) {
    for (i, old_value) in old.iter().enumerate().rev() {
        let child = format!("{}/{}", path, i);
        match new.get(i) {
            Some(new_value) => diff_value(old_value, new_value, child, options, ops),
            None if !options.no_remove => ops.push(PatchOperation::Remove { path: child }),
            None => {}
        }
    }

    for (i, new_value) in new.iter().enumerate().skip(old.len()) {
        ops.push(PatchOperation::Add {
            path: format!("{}/{}", path, i),
            value: new_value.clone(),
        });
    }
}

/// Escapes a JSON Pointer reference token.
fn escape(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

impl PoyntClientInner {
    /// Applies `update` to the resource at `url` with a `PATCH` request.
    ///
    /// A [`ResourceUpdate::Replace`] first fetches the current resource to compute the patch;
    /// a missing resource fails with a `NotFoundError`.
    #[tracing::instrument(name = "Update Resource", skip(self, update, options))]
    pub(crate) async fn update_resource(
        &self,
        resource: &str,
        url: String,
        update: ResourceUpdate,
        options: &PatchOptions,
    ) -> Result<Value, Error> {
        let ops = match update {
            ResourceUpdate::Patch(ops) => ops,
            ResourceUpdate::Replace(new) => {
                let current = self.request(RequestSpec::get(url.clone())).await?;
                if current.is_null() {
                    return Err(ApiError::not_found(format!("Old {} not found", resource)).into());
                }
                diff(&current, &new, options)
            }
        };

        let body = serde_json::to_value(&ops).map_err(|e| Error::Other(e.into()))?;
        self.request(RequestSpec::patch(url).with_body(body)).await
    }
}
