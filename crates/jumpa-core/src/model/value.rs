//! Valores capturados por los campos de un wizard.
//!
//! Los montos y números se guardan como texto crudo (sin separadores), igual
//! que los introduce el usuario; la conversión numérica es responsabilidad
//! de las validaciones y de los calculadores derivados.
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Valores por nombre de campo, en orden de inserción.
pub type FieldValues = IndexMap<String, FieldValue>;

/// Mensajes de error por nombre de campo (sólo campos inválidos).
pub type FieldErrors = IndexMap<String, String>;

/// Referencia a un archivo adjunto (imagen de documento, selfie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size_bytes: u64,
    pub mime: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(),
               size_bytes,
               mime: None }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Date(NaiveDate),
    File(FileRef),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Vacío o sólo espacios cuenta como ausente.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::File(f) => f.name.trim().is_empty(),
            FieldValue::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            FieldValue::File(f) => Some(f),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<FileRef> for FieldValue {
    fn from(f: FileRef) -> Self {
        FieldValue::File(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::text("   ").is_blank());
        assert!(FieldValue::File(FileRef::new("", 0)).is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
        assert!(!FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).is_blank());
    }

    #[test]
    fn serializes_with_type_tag() {
        let v = serde_json::to_value(FieldValue::text("1234")).unwrap();
        assert_eq!(v, serde_json::json!({"type": "text", "value": "1234"}));
        let e = serde_json::to_value(FieldValue::Empty).unwrap();
        assert_eq!(e, serde_json::json!({"type": "empty"}));
    }
}
