use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ItemError, ItemResult};

pub const NO_DATA_PROVIDED: &str = "No data provided";
pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// Custom validator rejecting names that are empty once trimmed
fn validate_name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name").with_message(Cow::Borrowed(NAME_EMPTY)));
    }
    Ok(())
}

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the store, strictly increasing, never reused
    pub id: u64,
    /// Trimmed, never empty
    pub name: String,
    /// Trimmed, empty when not provided
    pub description: String,
}

/// Request body for creating or replacing an item
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    /// Required, and must not be blank once trimmed
    #[validate(custom(function = "validate_name_not_blank"))]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "A small widget")]
    pub description: Option<String>,
}

/// A payload that passed validation: `name` is present and not blank.
///
/// Values are kept as sent; trimming happens when they are written to an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub description: Option<String>,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

impl Item {
    /// Build a stored item from validated input under the given id
    pub fn new(id: u64, input: ItemInput) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            description: normalize_description(input.description),
        }
    }

    /// Overwrite name and description; `id` is untouched
    pub fn apply_update(&mut self, input: ItemInput) {
        self.name = input.name.trim().to_string();
        self.description = normalize_description(input.description);
    }
}

fn normalize_description(description: Option<String>) -> String {
    description
        .map(|d| d.trim().to_string())
        .unwrap_or_default()
}

/// Validate a create/update request body.
///
/// Checks run in this order and the first failure wins:
/// 1. missing, `null` or otherwise empty body → [`NO_DATA_PROVIDED`]
/// 2. anything but a JSON object → [`BODY_NOT_OBJECT`]
/// 3. wrongly typed `name`/`description` → "Invalid item payload: ..."
/// 4. `name` blank after trimming → [`NAME_EMPTY`]
/// 5. `name` absent or `null` → [`NAME_REQUIRED`]
///
/// A falsy `description` (null, false, 0, "", [] or {}) counts as absent.
pub fn validate_item_payload(payload: Option<&Value>) -> ItemResult<ItemInput> {
    let Some(payload) = payload.filter(|value| is_truthy(value)) else {
        return Err(ItemError::Validation(NO_DATA_PROVIDED.to_string()));
    };

    let Some(fields) = payload.as_object() else {
        return Err(ItemError::Validation(BODY_NOT_OBJECT.to_string()));
    };

    let mut fields = fields.clone();
    if fields.get("description").is_some_and(|d| !is_truthy(d)) {
        fields.remove("description");
    }

    let parsed = ItemPayload::deserialize(Value::Object(fields))
        .map_err(|e| ItemError::Validation(format!("Invalid item payload: {}", e)))?;

    parsed
        .validate()
        .map_err(|e| ItemError::Validation(first_message(&e)))?;

    let ItemPayload {
        name: Some(name),
        description,
    } = parsed
    else {
        return Err(ItemError::Validation(NAME_REQUIRED.to_string()));
    };

    Ok(ItemInput { name, description })
}

/// `false` for the values that count as "no data": null, false, 0, "", [] and {}
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
