//! Command implementations behind the `gallery` subcommands.

pub mod list;
pub mod upload;

pub use list::{list_images, render_images, PageLimit};
pub use upload::{read_image_file, upload_image};
