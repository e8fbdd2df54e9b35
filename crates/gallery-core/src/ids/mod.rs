//! ID type wrappers for type safety.

mod cursor;
mod id_macro;
mod image_id;

pub use cursor::Cursor;
pub use image_id::ImageId;
