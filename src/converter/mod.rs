//! The conversion pipeline: one synchronous pass that turns a flat field
//! sequence into the nested output tree.

mod grouping;
pub mod typemap;

pub use typemap::TypeMap;

use crate::element::{ElementBuilder, ElementNode};
use crate::field::{FieldId, FieldKind, FieldRecord};
use crate::report::ConversionReport;
use grouping::FoldState;

/// The result of one conversion run: the ordered element tree plus the
/// record of everything the conversion silently degraded.
pub struct Conversion {
    pub elements: ElementNode,
    pub report: ConversionReport,
}

/// Converts flat field sequences into nested webform element trees.
///
/// Stateless between calls: every [`Converter::convert`] invocation runs on
/// fresh fold state, so a single converter can be reused across documents.
pub struct Converter {
    type_map: TypeMap,
    start_with_page: bool,
}

/// Configures a [`Converter`].
pub struct ConverterBuilder {
    type_map: TypeMap,
    start_with_page: bool,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            type_map: TypeMap::new(),
            start_with_page: false,
        }
    }

    /// Overrides or extends the field-type mapping table for this converter.
    pub fn with_type_mapping(mut self, source_type: &str, target_type: &str) -> Self {
        self.type_map.insert(source_type, target_type);
        self
    }

    /// When enabled, a synthetic leading page record is prepended to the
    /// sequence, so fields appearing before any explicit page declaration
    /// are still wrapped in a page.
    pub fn start_with_page(mut self, enabled: bool) -> Self {
        self.start_with_page = enabled;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            type_map: self.type_map,
            start_with_page: self.start_with_page,
        }
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// A converter with the default type map and no options.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Runs the full pipeline over one flat field sequence.
    pub fn convert(&self, fields: &[FieldRecord]) -> Conversion {
        let mut report = ConversionReport::new();

        let prepended;
        let fields: &[FieldRecord] = if self.start_with_page {
            let mut sequence = Vec::with_capacity(fields.len() + 1);
            sequence.push(FieldRecord::new(FieldKind::Page, FieldId::from(0u64)));
            sequence.extend(fields.iter().cloned());
            prepended = sequence;
            &prepended
        } else {
            fields
        };

        let builder = ElementBuilder::new(&self.type_map);
        let mut state = FoldState::new();
        for (index, field) in fields.iter().enumerate() {
            let next_kind = fields.get(index + 1).map(|next| &next.kind);
            state = grouping::step(
                state,
                field,
                index + 1,
                next_kind,
                &builder,
                &self.type_map,
                fields,
                &mut report,
            );
        }

        Conversion {
            elements: state.finish(),
            report,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a sequence has fields before any explicit page declaration and
/// would therefore benefit from [`ConverterBuilder::start_with_page`]. A
/// sequence that already opens with a page record needs no synthetic page;
/// prepending one anyway would emit a spurious empty page and renumber the
/// real ones.
pub fn needs_leading_page(fields: &[FieldRecord]) -> bool {
    fields
        .first()
        .is_some_and(|field| field.kind != FieldKind::Page)
}
