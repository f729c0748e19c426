// Landing page sections

mod content_block;
mod footer;
mod header;

pub use content_block::Sections;
pub use footer::Footer;
pub use header::Header;
