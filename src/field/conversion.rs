use super::definition::FieldRecord;
use crate::error::FieldConversionError;

/// A trait for custom data models that can be converted into the flat
/// `FieldRecord` sequence the converter consumes.
///
/// This is the extension point for feeding the converter from a source other
/// than a Gravity Forms JSON export. Implement it on your own structs to
/// provide a translation layer into the canonical field model.
///
/// # Example
///
/// ```rust
/// use webform_convert::prelude::*;
/// use webform_convert::error::FieldConversionError;
///
/// struct MyQuestion { id: u64, prompt: String }
/// struct MySurvey { questions: Vec<MyQuestion> }
///
/// impl IntoFields for MySurvey {
///     fn into_fields(self) -> std::result::Result<Vec<FieldRecord>, FieldConversionError> {
///         let mut fields = Vec::new();
///         for question in self.questions {
///             let mut field = FieldRecord::new(FieldKind::Text, FieldId::from(question.id));
///             field.label = Some(question.prompt);
///             fields.push(field);
///         }
///         Ok(fields)
///     }
/// }
/// ```
pub trait IntoFields {
    /// Consumes the object and converts it into a flat field sequence.
    fn into_fields(self) -> Result<Vec<FieldRecord>, FieldConversionError>;
}
