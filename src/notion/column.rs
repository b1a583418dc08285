// ABOUTME: Notion column kinds and the property payload produced for each writable kind
// ABOUTME: Closed mapping from column kind plus primitive value to the insert and filter JSON shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::{AppError, AppResult};

/// Primitive value produced by a column adapter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Text for title, rich text, select and date columns
    Text(String),
    /// Number for number columns
    Number(f64),
    /// Flag for checkbox columns
    Boolean(bool),
}

impl PropertyValue {
    /// Name of the value kind, used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Kind of a Notion database column (property type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Page title
    Title,
    /// Formatted text
    RichText,
    /// Number
    Number,
    /// Single select
    Select,
    /// Multi select
    MultiSelect,
    /// Status
    Status,
    /// Date or date range
    Date,
    /// Checkbox
    Checkbox,
    /// URL
    Url,
    /// Email address
    Email,
    /// Phone number
    PhoneNumber,
    /// People
    People,
    /// Files and media
    Files,
    /// Relation to another database
    Relation,
    /// Formula (computed)
    Formula,
    /// Rollup (computed)
    Rollup,
    /// Created time (computed)
    CreatedTime,
    /// Created by (computed)
    CreatedBy,
    /// Last edited time (computed)
    LastEditedTime,
    /// Last edited by (computed)
    LastEditedBy,
    /// Auto-incremented unique identifier (computed)
    UniqueId,
}

impl ColumnType {
    /// Every column kind
    pub const ALL: [Self; 21] = [
        Self::Title,
        Self::RichText,
        Self::Number,
        Self::Select,
        Self::MultiSelect,
        Self::Status,
        Self::Date,
        Self::Checkbox,
        Self::Url,
        Self::Email,
        Self::PhoneNumber,
        Self::People,
        Self::Files,
        Self::Relation,
        Self::Formula,
        Self::Rollup,
        Self::CreatedTime,
        Self::CreatedBy,
        Self::LastEditedTime,
        Self::LastEditedBy,
        Self::UniqueId,
    ];

    /// Name used by the Notion API
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::RichText => "rich_text",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Status => "status",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::People => "people",
            Self::Files => "files",
            Self::Relation => "relation",
            Self::Formula => "formula",
            Self::Rollup => "rollup",
            Self::CreatedTime => "created_time",
            Self::CreatedBy => "created_by",
            Self::LastEditedTime => "last_edited_time",
            Self::LastEditedBy => "last_edited_by",
            Self::UniqueId => "unique_id",
        }
    }

    /// Whether this bridge can write values into columns of this kind
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::Title
                | Self::RichText
                | Self::Number
                | Self::Select
                | Self::MultiSelect
                | Self::Status
                | Self::Date
                | Self::Checkbox
                | Self::Url
                | Self::Email
                | Self::PhoneNumber
        )
    }

    /// Wrap an adapted value in this column kind's property payload
    ///
    /// # Errors
    ///
    /// Returns an error if the column kind is read-only, or if the value kind
    /// does not fit the column (for example a boolean for a number column).
    pub fn insert_payload(&self, value: &PropertyValue) -> AppResult<Value> {
        if !self.is_writable() {
            return Err(AppError::read_only_column(self.as_str()));
        }

        let payload = match (self, value) {
            (Self::Title, PropertyValue::Text(text)) => json!({ "title": text_content(text) }),
            (Self::RichText, PropertyValue::Text(text)) => {
                json!({ "rich_text": text_content(text) })
            }
            (Self::Number, PropertyValue::Number(number)) => json!({ "number": number }),
            (Self::Select, PropertyValue::Text(text)) => json!({ "select": { "name": text } }),
            (Self::Status, PropertyValue::Text(text)) => json!({ "status": { "name": text } }),
            (Self::MultiSelect, PropertyValue::Text(text)) => {
                json!({ "multi_select": [{ "name": text }] })
            }
            (Self::Checkbox, PropertyValue::Boolean(flag)) => json!({ "checkbox": flag }),
            (Self::Date, PropertyValue::Text(text)) => json!({ "date": { "start": text } }),
            (Self::Url, PropertyValue::Text(text)) => json!({ "url": text }),
            (Self::Email, PropertyValue::Text(text)) => json!({ "email": text }),
            (Self::PhoneNumber, PropertyValue::Text(text)) => json!({ "phone_number": text }),
            (_, other) => {
                return Err(AppError::value_type_mismatch(
                    self.expected_value_kind(),
                    other.kind(),
                ))
            }
        };

        Ok(payload)
    }

    /// Query filter matching rows whose `property` equals `value`
    ///
    /// Unique-id and number columns filter on a number, checkbox columns on a
    /// flag, title and rich-text columns on text.
    ///
    /// # Errors
    ///
    /// Returns an error if this column kind cannot be filtered by equality,
    /// or if the value kind does not fit the column
    pub fn filter_payload(&self, property: &str, value: &PropertyValue) -> AppResult<Value> {
        let condition = match (self, value) {
            (Self::UniqueId | Self::Number, PropertyValue::Number(number)) => {
                json!({ "equals": number })
            }
            (Self::Checkbox, PropertyValue::Boolean(flag)) => json!({ "equals": flag }),
            (Self::Title | Self::RichText, PropertyValue::Text(text)) => {
                json!({ "equals": text })
            }
            (Self::UniqueId | Self::Number | Self::Checkbox | Self::Title | Self::RichText, other) => {
                return Err(AppError::value_type_mismatch(
                    self.expected_value_kind(),
                    other.kind(),
                ))
            }
            _ => {
                return Err(AppError::invalid_input(format!(
                    "Notion column type '{self}' cannot be filtered by value"
                )))
            }
        };

        Ok(json!({ "property": property, self.as_str(): condition }))
    }

    const fn expected_value_kind(&self) -> &'static str {
        match self {
            Self::Number | Self::UniqueId => "number",
            Self::Checkbox => "boolean",
            _ => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column_type| column_type.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown Notion column type '{s}'")))
    }
}

fn text_content(text: &str) -> Value {
    json!([{ "text": { "content": text } }])
}
