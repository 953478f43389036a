//! Edit request and response types.

use crate::models::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for one edit.
///
/// Unset optional parameters are left out of the JSON body so the service
/// applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    input: String,
    instruction: String,
    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    edit_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

impl EditRequest {
    pub fn new(input: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            instruction: instruction.into(),
            edit_count: None,
            temperature: None,
            top_p: None,
            model: None,
        }
    }

    /// Build with every parameter at once; `None` leaves the parameter unset.
    pub fn from_parts(
        input: impl Into<String>,
        instruction: impl Into<String>,
        edit_count: Option<u32>,
        temperature: Option<f64>,
        top_p: Option<f64>,
        model: Option<&Model>,
    ) -> Self {
        Self {
            input: input.into(),
            instruction: instruction.into(),
            edit_count,
            temperature,
            top_p,
            model: model.map(|m| m.id().to_string()),
        }
    }

    /// How many edits to generate.
    pub fn with_edit_count(mut self, edit_count: u32) -> Self {
        self.edit_count = Some(edit_count);
        self
    }

    /// Sampling temperature. Alter this or `top_p`, not both.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Nucleus sampling: only tokens within the top `top_p` probability mass are considered.
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_model(mut self, model: &Model) -> Self {
        self.model = Some(model.id().to_string());
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn edit_count(&self) -> Option<u32> {
        self.edit_count
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn top_p(&self) -> Option<f64> {
        self.top_p
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditChoice {
    pub text: String,
    #[serde(default)]
    pub index: u32,
}

impl fmt::Display for EditChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditResponse {
    #[serde(default = "default_edit_type")]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    pub choices: Vec<EditChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

fn default_edit_type() -> String {
    "edit".to_string()
}

impl EditResponse {
    pub fn first(&self) -> Option<&EditChoice> {
        self.choices.first()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.created, 0)
    }
}

/// Renders the first choice's text, or nothing when there are no choices.
impl fmt::Display for EditResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(choice) => choice.fmt(f),
            None => Ok(()),
        }
    }
}
