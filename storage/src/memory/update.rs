//! Update application for the fallback collection.

use mongodb::bson::{Bson, Document};

use crate::{collection::UpdateSpec, error::StorageError, ID_FIELD};

/// Applies `update` to the stored payload of document `id`.
///
/// `_id` is never written. `$push` and `$pull` reject a target field holding a
/// non-array value before touching the payload, so a failed update leaves the
/// document unchanged.
pub(super) fn apply(id: &str, payload: &mut Document, update: UpdateSpec) -> Result<(), StorageError> {
    let operator = update.operator();

    match update {
        UpdateSpec::Set(fields) => {
            for (field, value) in fields.into_iter().filter(|(field, _)| field != ID_FIELD) {
                payload.insert(field, value);
            }
        }
        UpdateSpec::Push(fields) => {
            ensure_array_targets(id, payload, &fields, operator)?;

            for (field, value) in fields.into_iter().filter(|(field, _)| field != ID_FIELD) {
                match payload.get_mut(&field) {
                    Some(Bson::Array(values)) => values.push(value),
                    _ => {
                        payload.insert(field, Bson::Array(vec![value]));
                    }
                }
            }
        }
        UpdateSpec::Pull(fields) => {
            ensure_array_targets(id, payload, &fields, operator)?;

            for (field, value) in fields {
                if let Some(Bson::Array(values)) = payload.get_mut(&field) {
                    // Only the first occurrence goes; absent values are a no-op
                    if let Some(position) = values.iter().position(|existing| *existing == value) {
                        values.remove(position);
                    }
                }
            }
        }
    }

    Ok(())
}

fn ensure_array_targets(
    id: &str,
    payload: &Document,
    fields: &Document,
    operator: &'static str,
) -> Result<(), StorageError> {
    for field in fields.keys() {
        match payload.get(field) {
            None | Some(Bson::Array(_)) => {}
            Some(_) => {
                return Err(StorageError::NotAnArray {
                    operator,
                    field: field.clone(),
                    id: id.to_string(),
                })
            }
        }
    }

    Ok(())
}
