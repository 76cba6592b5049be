//! Credential card builder
//!
//! Provides a fluent API for assembling the single-page credential PDF.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use tracing::instrument;

use crate::encoding::encode_win_ansi;
use crate::error::{CardError, CardResult};

// Card geometry in PDF points, credit-card landscape
const PAGE_WIDTH: f32 = 300.0;
const PAGE_HEIGHT: f32 = 200.0;

// Association blue background (#004B8D), text in white
const BG_RED: f32 = 0.0;
const BG_GREEN: f32 = 75.0 / 255.0;
const BG_BLUE: f32 = 141.0 / 255.0;

const MARGIN_X: f32 = 20.0;
const TITLE_SIZE: f32 = 16.0;
const TITLE_Y: f32 = 164.0;
const FIELD_SIZE: f32 = 12.0;
const FIELD_START_Y: f32 = 108.0;
const FIELD_LEADING: f32 = 20.0;

/// Credential card builder
///
/// Collects a title and labeled field lines, then renders them onto a
/// fixed-layout card. Field lines are drawn top to bottom in insertion
/// order; text past the bottom edge is clipped by the page, not wrapped.
pub struct CredentialCard {
    title: String,
    fields: Vec<(String, String)>,
}

impl CredentialCard {
    /// Create a new card with the given title line
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Add a labeled field line, rendered as "Label: value"
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.fields.push((label.to_string(), value.to_string()));
        self
    }

    /// Render the card to PDF bytes
    #[instrument(skip(self))]
    pub fn render(&self) -> CardResult<Vec<u8>> {
        if self.title.trim().is_empty() {
            return Err(CardError::InvalidContent("card title is empty".to_string()));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // Built-in Type1 fonts, no embedding needed
        let title_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let field_font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => title_font_id,
                "F2" => field_font_id,
            },
        });

        let content = Content {
            operations: self.operations(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Build the content stream operations for the card
    fn operations(&self) -> Vec<Operation> {
        let mut ops = vec![
            // Full-bleed background rectangle
            Operation::new("rg", vec![BG_RED.into(), BG_GREEN.into(), BG_BLUE.into()]),
            Operation::new(
                "re",
                vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            ),
            Operation::new("f", vec![]),
            // All text in white
            Operation::new("rg", vec![1.into(), 1.into(), 1.into()]),
        ];

        Self::text_ops(&mut ops, "F1", TITLE_SIZE, TITLE_Y, &self.title);

        let mut y = FIELD_START_Y;
        for (label, value) in &self.fields {
            let line = format!("{}: {}", label, value);
            Self::text_ops(&mut ops, "F2", FIELD_SIZE, y, &line);
            y -= FIELD_LEADING;
        }

        ops
    }

    fn text_ops(ops: &mut Vec<Operation>, font: &str, size: f32, y: f32, text: &str) {
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
        ops.push(Operation::new("Td", vec![MARGIN_X.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }
}
