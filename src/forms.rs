//! Typed form payloads for the three modal dialogs.
//!
//! A payload validates into a store record or fails with a [`FormError`];
//! the only contract with the rest of the app is that appended records are
//! visible to the next render call.

use crate::models::{Goal, Recyclable, ResourceKind, ResourceLog, WasteEntry};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("field `{0}` must be a non-negative number")]
    InvalidNumber(&'static str),
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn non_negative(field: &'static str, value: Option<f64>) -> Result<f64, FormError> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(FormError::InvalidNumber(field)),
    }
}

/// "Add Waste Entry" dialog.
#[derive(Debug, Clone, Default)]
pub struct WasteEntryForm {
    pub process_name: String,
    pub waste_type: String,
    pub amount_kg: Option<f64>,
    pub recycling_method: String,
    pub recyclable: Option<Recyclable>,
}

impl WasteEntryForm {
    pub fn validate(&self) -> Result<WasteEntry, FormError> {
        Ok(WasteEntry {
            process: required("process name", &self.process_name)?,
            waste_type: required("waste type", &self.waste_type)?,
            amount_kg: non_negative("amount", self.amount_kg)?,
            method: required("recycling method", &self.recycling_method)?,
            recyclable: self
                .recyclable
                .ok_or(FormError::MissingField("recyclable"))?,
        })
    }
}

/// "Add Resource Log" dialog.
#[derive(Debug, Clone)]
pub struct ResourceLogForm {
    pub resource: ResourceKind,
    pub usage: Option<f64>,
}

impl ResourceLogForm {
    pub fn validate(&self) -> Result<ResourceLog, FormError> {
        Ok(ResourceLog {
            resource: self.resource,
            usage: non_negative("usage", self.usage)?,
        })
    }
}

/// "Add New Goal" dialog.
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub goal_name: String,
    pub goal_target: String,
}

impl GoalForm {
    pub fn validate(&self) -> Result<Goal, FormError> {
        Ok(Goal {
            name: required("goal name", &self.goal_name)?,
            target: required("target", &self.goal_target)?,
        })
    }
}
