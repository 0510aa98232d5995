//! Employee Model

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Employee record
///
/// `id` is absent until the backend has persisted the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email address")
    )]
    pub email: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy with surrounding whitespace stripped from every text field
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// Validate the normalized record, collecting one message per failing field.
    ///
    /// Whitespace-only values count as empty.
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        self.normalized().validate().map_err(FieldErrors::from)
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => &self.name,
            EmployeeField::Phone => &self.phone,
            EmployeeField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::Name => self.name = value,
            EmployeeField::Phone => self.phone = value,
            EmployeeField::Email => self.email = value,
        }
    }
}

/// Editable employee fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    Name,
    Phone,
    Email,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 3] = [Self::Name, Self::Phone, Self::Email];

    /// Serialized field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Following field, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Name,
        }
    }

    /// Preceding field, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Phone => Self::Name,
            Self::Email => Self::Phone,
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<EmployeeField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: EmployeeField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (name, errs) in errors.field_errors() {
            let Some(field) = EmployeeField::from_name(name.as_ref()) else {
                continue;
            };
            // A missing value reports "required" rather than a syntax error
            let chosen = errs
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| errs.first());
            if let Some(err) = chosen {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field.label()));
                fields.insert(field, message);
            }
        }
        Self(fields)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
