use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Build matrix declared for one image type.
///
/// Every field is optional at parse time. A missing field only surfaces as
/// [`AppError::FieldNotFound`] when an accessor asks for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ImageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architectures: Option<Vec<String>>,
    /// Scalar defaults are held as strings. Lists and mappings are kept as
    /// parsed and only fail when their own key is looked up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq)]
enum ImageRecord {
    Config(ImageConfig),
    Malformed(String),
}

/// Parsed `ray-images.yaml`: image types in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupportedImages {
    images: Vec<(String, ImageRecord)>,
}

impl SupportedImages {
    /// Parse a single YAML document whose top level maps image types to records.
    ///
    /// Merge keys (`<<: *anchor`) are resolved first. Only a document that is
    /// not a mapping fails here; a record of the wrong shape is kept and fails
    /// lookups of its own image type.
    pub fn parse_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut document: Value = serde_yaml::from_str(content)?;
        document.apply_merge()?;

        let mapping = match document {
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(serde_yaml::Error::custom(format!(
                    "expected a mapping of image types, found {}",
                    value_kind(&other)
                )));
            }
        };

        Ok(Self::from_records(mapping.into_iter().filter_map(|(key, record)| {
            let name = scalar_text(&key)?;
            let record = match parse_record(record) {
                Ok(config) => ImageRecord::Config(config),
                Err(reason) => ImageRecord::Malformed(reason),
            };
            Some((name, record))
        })))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image type names in document order.
    pub fn image_types(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|(name, _)| name.as_str())
    }

    pub fn image_config(&self, image_type: &str) -> Result<&ImageConfig, AppError> {
        match self.images.iter().find(|(name, _)| name == image_type) {
            Some((_, ImageRecord::Config(config))) => Ok(config),
            Some((_, ImageRecord::Malformed(reason))) => Err(AppError::MalformedImageConfig {
                image_type: image_type.to_string(),
                reason: reason.clone(),
            }),
            None => Err(AppError::ImageTypeNotFound {
                image_type: image_type.to_string(),
                available: self.image_types().collect::<Vec<_>>().join(", "),
            }),
        }
    }

    pub fn python_versions(&self, image_type: &str) -> Result<&[String], AppError> {
        let config = self.image_config(image_type)?;
        require_field(image_type, "python", config.python.as_deref())
    }

    pub fn platforms(&self, image_type: &str) -> Result<&[String], AppError> {
        let config = self.image_config(image_type)?;
        require_field(image_type, "platforms", config.platforms.as_deref())
    }

    pub fn architectures(&self, image_type: &str) -> Result<&[String], AppError> {
        let config = self.image_config(image_type)?;
        require_field(image_type, "architectures", config.architectures.as_deref())
    }

    /// Look up `defaults[key]` for an image type.
    pub fn default_value(&self, image_type: &str, key: &str) -> Result<&str, AppError> {
        let config = self.image_config(image_type)?;
        let defaults = require_field(image_type, "defaults", config.defaults.as_ref())?;
        match defaults.get(key) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(AppError::MalformedImageConfig {
                image_type: image_type.to_string(),
                reason: format!("default '{}' is {}, not a scalar", key, value_kind(other)),
            }),
            None => Err(AppError::DefaultNotFound {
                image_type: image_type.to_string(),
                key: key.to_string(),
            }),
        }
    }

    fn from_records(records: impl IntoIterator<Item = (String, ImageRecord)>) -> Self {
        let mut images: Vec<(String, ImageRecord)> = Vec::new();
        for (name, record) in records {
            // Later duplicates win but keep the first position.
            match images.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = record,
                None => images.push((name, record)),
            }
        }
        SupportedImages { images }
    }
}

impl FromIterator<(String, ImageConfig)> for SupportedImages {
    fn from_iter<I: IntoIterator<Item = (String, ImageConfig)>>(iter: I) -> Self {
        Self::from_records(
            iter.into_iter().map(|(name, config)| (name, ImageRecord::Config(config))),
        )
    }
}

fn require_field<'a, T: ?Sized>(
    image_type: &str,
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, AppError> {
    value.ok_or_else(|| AppError::FieldNotFound { image_type: image_type.to_string(), field })
}

fn parse_record(value: Value) -> Result<ImageConfig, String> {
    let record = match value {
        Value::Mapping(record) => record,
        other => return Err(format!("expected a mapping, found {}", value_kind(&other))),
    };

    Ok(ImageConfig {
        python: list_field(&record, "python")?,
        platforms: list_field(&record, "platforms")?,
        architectures: list_field(&record, "architectures")?,
        defaults: defaults_field(&record)?,
    })
}

// A null field reads the same as an absent one.
fn list_field(record: &Mapping, field: &str) -> Result<Option<Vec<String>>, String> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                scalar_text(item).ok_or_else(|| {
                    format!("'{}' entries must be scalars, found {}", field, value_kind(item))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => Err(format!("'{}' must be a list, found {}", field, value_kind(other))),
    }
}

fn defaults_field(record: &Mapping) -> Result<Option<BTreeMap<String, Value>>, String> {
    match record.get("defaults") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(defaults)) => Ok(Some(
            defaults
                .iter()
                .filter_map(|(key, value)| {
                    let value =
                        scalar_text(value).map(Value::String).unwrap_or_else(|| value.clone());
                    Some((scalar_text(key)?, value))
                })
                .collect(),
        )),
        Some(other) => Err(format!("'defaults' must be a mapping, found {}", value_kind(other))),
    }
}

/// Text of a scalar. Numbers and booleans use their YAML rendering.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
