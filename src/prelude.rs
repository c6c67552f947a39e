//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the webform-convert crate.
//! Import this module to get access to the core functionality without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use webform_convert::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let export = FormExport::from_file("path/to/export.json")?;
//! let converter = Converter::builder()
//!     .start_with_page(needs_leading_page(export.fields()))
//!     .build();
//! let conversion = converter.convert(export.fields());
//! let yaml = render_yaml(&conversion.elements)?;
//! println!("{}", yaml);
//! # Ok(())
//! # }
//! ```

// Core conversion pipeline
pub use crate::converter::{Conversion, Converter, ConverterBuilder, TypeMap, needs_leading_page};

// Field and element models
pub use crate::element::{ElementBuilder, ElementNode, Value};
pub use crate::field::{
    Choice, ConditionAction, ConditionOperator, ConditionalLogic, ConditionalRule, FieldId,
    FieldKind, FieldRecord, IntoFields,
};

// Key generation and reference resolution
pub use crate::key::{SELECTOR_NOT_FOUND, generate_key, normalized_prefix, resolve_input_selector};

// Document I/O collaborators
pub use crate::data::{FormDefinition, FormExport, render_yaml};

// Gap reporting
pub use crate::report::{ConversionReport, Gap, GapKind};

// Error types
pub use crate::error::{DecodeError, EncodeError, FieldConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
