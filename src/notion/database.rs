// ABOUTME: Notion database metadata as returned by the retrieve-database endpoint
// ABOUTME: Joins the rich-text title into plain text and exposes the flat list of typed columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::column::ColumnType;
use crate::errors::AppResult;

/// Raw database response, only the parts the bridge reads
#[derive(Debug, Deserialize)]
struct NotionDatabaseResponse {
    id: String,
    #[serde(default)]
    title: Vec<NotionRichTextResponse>,
    #[serde(default)]
    properties: BTreeMap<String, NotionDatabaseColumn>,
}

#[derive(Debug, Deserialize)]
struct NotionRichTextResponse {
    #[serde(default)]
    plain_text: String,
}

/// Column (property) of a Notion database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionDatabaseColumn {
    /// Notion property id
    pub id: String,
    /// Column name shown in the database
    pub name: String,
    /// Raw property type, kept as text so unknown kinds still deserialize
    #[serde(rename = "type")]
    pub kind: String,
}

impl NotionDatabaseColumn {
    /// Parsed column kind, `None` for kinds this bridge does not know
    #[must_use]
    pub fn column_type(&self) -> Option<ColumnType> {
        self.kind.parse().ok()
    }
}

/// Notion database metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotionDatabase {
    /// Database id
    pub id: String,
    /// Plain text of every title segment, joined
    pub name: String,
    /// Columns, ordered by name
    pub columns: Vec<NotionDatabaseColumn>,
}

impl NotionDatabase {
    /// Parse a retrieve-database response
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not have the database shape
    pub fn from_json(value: Value) -> AppResult<Self> {
        let response: NotionDatabaseResponse = serde_json::from_value(value)?;
        Ok(Self::from(response))
    }

    /// Look up a column by its display name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&NotionDatabaseColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Display names of every column
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }
}

impl From<NotionDatabaseResponse> for NotionDatabase {
    fn from(response: NotionDatabaseResponse) -> Self {
        let name = response
            .title
            .into_iter()
            .map(|segment| segment.plain_text)
            .collect();

        Self {
            id: response.id,
            name,
            columns: response.properties.into_values().collect(),
        }
    }
}
