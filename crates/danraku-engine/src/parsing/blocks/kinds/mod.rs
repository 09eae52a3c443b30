/// Line-level whitespace. U+3000 is text, never indentation.
pub const BLANK: [char; 2] = [' ', '\t'];

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod list_item;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::{AtxHeading, Heading};
pub use html_block::{HtmlBlock, HtmlBlockEnd, HtmlBlockOpen};
pub use list_item::{ListItem, ListItemOpen, ListMarker};
pub use paragraph::Paragraph;
pub use table::{Alignment, Table};
pub use thematic_break::ThematicBreak;
