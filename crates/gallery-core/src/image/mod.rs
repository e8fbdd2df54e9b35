//! Image domain models.

mod file;
mod page;
mod record;

pub use file::ImageFile;
pub use page::ImagePage;
pub use record::{ImageRecord, NewImage};
