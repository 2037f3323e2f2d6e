use derivative::Derivative;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::EnumIter;

/// How response keys are spelled on the wire, relative to the snake_case
/// field names of the Rust response types.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldNamingPolicy {
    /// Keys are used verbatim
    Identity,
    /// `FormattedAddress`
    UpperCamelCase,
    /// `Formatted Address`
    UpperCamelCaseWithSpaces,
    /// `FORMATTED_ADDRESS`
    UpperCaseWithUnderscores,
    /// `formatted_address`
    #[derivative(Default)]
    LowerCaseWithUnderscores,
    /// `formatted-address`
    LowerCaseWithDashes,
    /// `formatted.address`
    LowerCaseWithDots,
}

impl FieldNamingPolicy {
    /// The Rust field name a wire key maps to.
    pub fn to_field_name(&self, key: &str) -> String {
        match &self {
            FieldNamingPolicy::Identity | FieldNamingPolicy::LowerCaseWithUnderscores => {
                key.to_owned()
            }
            FieldNamingPolicy::UpperCamelCase => camel_to_snake(key),
            FieldNamingPolicy::UpperCamelCaseWithSpaces => {
                camel_to_snake(&key.replace(' ', ""))
            }
            FieldNamingPolicy::UpperCaseWithUnderscores => key.to_lowercase(),
            FieldNamingPolicy::LowerCaseWithDashes => key.replace('-', "_"),
            FieldNamingPolicy::LowerCaseWithDots => key.replace('.', "_"),
        }
    }
    /// Rewrites every object key in `value`, at any depth, with [`Self::to_field_name`].
    ///
    /// When several keys of one object map to the same field name, the last
    /// one in map order wins.
    pub fn normalize_keys(&self, value: Value) -> Value {
        match value {
            Value::Object(object) => {
                let mut normalized = Map::with_capacity(object.len());
                for (key, value) in object {
                    let field_name = self.to_field_name(&key);
                    if normalized.contains_key(&field_name) {
                        tracing::debug!(
                            key = %key,
                            field_name = %field_name,
                            "Field name already taken, overwriting"
                        );
                    }
                    normalized.insert(field_name, self.normalize_keys(value));
                }
                Value::Object(normalized)
            }
            Value::Array(values) => Value::Array(
                values
                    .into_iter()
                    .map(|value| self.normalize_keys(value))
                    .collect(),
            ),
            value => value,
        }
    }
}

fn camel_to_snake(key: &str) -> String {
    let mut result = String::with_capacity(key.len() + 4);
    for (index, character) in key.chars().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                result.push('_');
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }
    result
}
