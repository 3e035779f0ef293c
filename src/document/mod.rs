//! Contract document generation from text templates.
//!
//! Templates are plain text (Markdown works too: table cells are just
//! text) containing `{{name}}` placeholder tokens. Filling a template
//! never modifies the template file; the substituted content is
//! written to a separate output path.

mod contract;

pub use contract::render_booking_contract;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{DocumentError, Result};

/// A single substitutable value for a template placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Number(f64),
    Id(i32),
    /// Absent optional field; renders as the empty string.
    Empty,
}

impl FieldValue {
    /// Normalised display form used for substitution.
    ///
    /// Dates render as `DD.MM.YYYY`; everything else uses its natural
    /// string form.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Date(d) => d.format("%d.%m.%Y").to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Id(id) => id.to_string(),
            FieldValue::Empty => String::new(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Id(value)
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Empty, Into::into)
    }
}

/// Flat name-to-value mapping fed to [`fill_template`].
pub type Context = HashMap<String, FieldValue>;

/// Fill a text template with the provided context values.
///
/// Every occurrence of `{{name}}` for a `name` present in the context
/// is replaced with its normalised string. Tokens without a context
/// entry are left in place.
pub fn fill_template(
    template_path: &Path,
    output_path: &Path,
    context: &Context,
) -> Result<PathBuf> {
    let mut text =
        fs::read_to_string(template_path).map_err(|source| DocumentError::TemplateNotFound {
            path: template_path.to_path_buf(),
            source,
        })?;

    for (name, value) in context {
        let token = format!("{{{{{name}}}}}");
        if text.contains(&token) {
            text = text.replace(&token, &value.render());
        }
    }

    fs::write(output_path, text).map_err(|source| DocumentError::WriteFailure {
        path: output_path.to_path_buf(),
        source,
    })?;

    debug!(template = %template_path.display(), output = %output_path.display(), "template filled");
    Ok(output_path.to_path_buf())
}
