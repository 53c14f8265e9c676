//! A single A4 page drawn with top-left coordinates, serialised with lopdf.

use super::fonts::{encode_win_ansi, Font};
use crate::error::DocumentError;
use crate::logo::LogoImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

const WATERMARK_STATE: &str = "GSw";
const LOGO_XOBJECT: &str = "Im1";

/// RGB in 0..=1.
pub type Color = (f32, f32, f32);

pub struct PdfCanvas {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
    watermark_alpha: Option<f32>,
    logo: Option<LogoImage>,
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

impl PdfCanvas {
    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
            watermark_alpha: None,
            logo: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    pub fn set_fill_color(&mut self, (r, g, b): Color) {
        self.push("rg", vec![real(r), real(g), real(b)]);
    }

    pub fn set_stroke_color(&mut self, (r, g, b): Color) {
        self.push("RG", vec![real(r), real(g), real(b)]);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.push("w", vec![real(width)]);
    }

    /// Left-aligned text with its baseline `y` points from the top.
    pub fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        let baseline = self.height - y;
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font.resource_name().into()), real(size)]);
        self.push("Td", vec![real(x), real(baseline)]);
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    pub fn text_centered(&mut self, font: Font, size: f32, y: f32, text: &str) {
        let x = (self.width - font.text_width(text, size)) / 2.0;
        self.text(font, size, x, y, text);
    }

    pub fn text_right(&mut self, font: Font, size: f32, right: f32, y: f32, text: &str) {
        let x = right - font.text_width(text, size);
        self.text(font, size, x, y, text);
    }

    /// Text whose visual centre sits at (`cx`, `cy`), rotated counter-clockwise.
    pub fn text_rotated(
        &mut self,
        font: Font,
        size: f32,
        cx: f32,
        cy: f32,
        degrees: f32,
        text: &str,
    ) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let half_width = font.text_width(text, size) / 2.0;
        // Cap height is roughly 0.7 em; drop the baseline by half of it.
        let half_height = size * 0.35;
        let tx = cx - cos * half_width + sin * half_height;
        let ty = (self.height - cy) - sin * half_width - cos * half_height;

        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font.resource_name().into()), real(size)]);
        self.push(
            "Tm",
            vec![real(cos), real(sin), real(-sin), real(cos), real(tx), real(ty)],
        );
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    /// Run `draw` with fill and stroke opacity reduced to `alpha`.
    pub fn with_opacity(&mut self, alpha: f32, draw: impl FnOnce(&mut Self)) {
        self.watermark_alpha = Some(alpha);
        self.push("q", vec![]);
        self.push("gs", vec![Object::Name(WATERMARK_STATE.into())]);
        draw(self);
        self.push("Q", vec![]);
    }

    /// Rectangle with its top-left corner at (`x`, `y`).
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: bool, stroke: bool) {
        let bottom = self.height - y - height;
        self.push("re", vec![real(x), real(bottom), real(width), real(height)]);
        let paint = match (fill, stroke) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => "n",
        };
        self.push(paint, vec![]);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push("m", vec![real(x1), real(self.height - y1)]);
        self.push("l", vec![real(x2), real(self.height - y2)]);
        self.push("S", vec![]);
    }

    /// Place `logo` with its top-left corner at (`x`, `y`), scaled to the box.
    pub fn image(&mut self, logo: LogoImage, x: f32, y: f32, width: f32, height: f32) {
        let bottom = self.height - y - height;
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![real(width), real(0.0), real(0.0), real(height), real(x), real(bottom)],
        );
        self.push("Do", vec![Object::Name(LOGO_XOBJECT.into())]);
        self.push("Q", vec![]);
        self.logo = Some(logo);
    }

    /// Serialise the page into a complete single-page PDF.
    pub fn finish(self) -> Result<Vec<u8>, DocumentError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary(Font::Regular));
        let bold_id = doc.add_object(font_dictionary(Font::Bold));

        let mut resources = dictionary! {
            "Font" => dictionary! {
                Font::Regular.resource_name() => regular_id,
                Font::Bold.resource_name() => bold_id,
            },
        };

        if let Some(alpha) = self.watermark_alpha {
            let state_id = doc.add_object(dictionary! {
                "Type" => "ExtGState",
                "ca" => real(alpha),
                "CA" => real(alpha),
            });
            resources.set("ExtGState", dictionary! { WATERMARK_STATE => state_id });
        }

        if let Some(logo) = self.logo {
            let image = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => Object::Integer(i64::from(logo.width)),
                    "Height" => Object::Integer(i64::from(logo.height)),
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => Object::Integer(8),
                },
                logo.rgb,
            );
            let image_id = doc.add_object(image);
            resources.set("XObject", dictionary! { LOGO_XOBJECT => image_id });
        }

        let resources_id = doc.add_object(resources);
        let content = Content {
            operations: self.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => Object::Integer(1),
                "MediaBox" => vec![real(0.0), real(0.0), real(self.width), real(self.height)],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

fn font_dictionary(font: Font) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}
