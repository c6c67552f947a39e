//! # webform-convert - Form-Definition Conversion Engine
//!
//! **webform-convert** transforms a flat, ordered list of typed field
//! records (a Gravity Forms export) into the nested page/section/element
//! tree a Drupal Webform expects. The engine is a single synchronous
//! pipeline with three stages:
//!
//! 1. **Field Key Generator** - derives a stable, human-readable, unique key
//!    for each field from its label and sequence position.
//! 2. **Element Builder** - maps one field record into one output tree node,
//!    including composite-field expansions and the translation of flat
//!    conditional-logic rules into nested visibility states.
//! 3. **Grouping Engine** - folds the flat sequence once, opening and
//!    closing page and section containers and inserting every element at the
//!    correct nesting level.
//!
//! Conversion is fail-soft by contract: unknown field types, dangling rule
//! references, and untranslatable operators degrade gracefully and are
//! collected in a [`report::ConversionReport`] instead of aborting the
//! document.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical flat model of `FieldRecord`s. Parse a
//! Gravity Forms export with [`data::FormExport`], or implement
//! [`field::IntoFields`] for your own source format, then run a
//! [`converter::Converter`] over the sequence and hand the resulting tree to
//! a serializer such as [`data::render_yaml`].
//!
//! ## Quick Start
//!
//! ```rust
//! use webform_convert::prelude::*;
//!
//! let mut name = FieldRecord::new(FieldKind::Text, FieldId::from(2u64));
//! name.label = Some("Your name".to_string());
//! name.is_required = Some(true);
//!
//! let fields = vec![
//!     FieldRecord::new(FieldKind::Page, FieldId::from(1u64)),
//!     name,
//! ];
//!
//! let conversion = Converter::new().convert(&fields);
//! assert!(conversion.report.is_clean());
//!
//! // One top-level page, containing the text element.
//! assert_eq!(conversion.elements.child_count(), 1);
//! let page = conversion.elements.child("page_1").unwrap();
//! let element = page.child("your_nam_2").unwrap();
//! assert_eq!(element.attr("type").and_then(|v| v.as_str()), Some("textfield"));
//! ```

pub mod converter;
pub mod data;
pub mod element;
pub mod error;
pub mod field;
pub mod key;
pub mod prelude;
pub mod report;
