pub mod canvas;
pub mod fonts;
pub mod table;

pub use canvas::{Color, PdfCanvas, A4_HEIGHT, A4_WIDTH, MM};
pub use fonts::Font;
pub use table::{draw_table, wrap_text, Table, TableRow};
