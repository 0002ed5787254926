//! DTO modules that bridge services with templates and APIs.

use serde::{Deserialize, Serialize};

use crate::services::export::{ExportError, XmlFields, XmlOutput};

pub mod customers;
pub mod employees;
pub mod fixtures;
pub mod suppliers;

/// Code and description of an expanded reference (customer category,
/// department).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceItem {
    pub code: String,
    pub description: String,
}

impl XmlFields for ReferenceItem {
    fn write_fields(&self, out: &mut XmlOutput) -> Result<(), ExportError> {
        out.field("code", &self.code)?;
        out.field("description", &self.description)
    }
}
