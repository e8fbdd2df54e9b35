//! User-visible notifications raised by the upload form.

use gallery_core::ports::Notification;

pub fn missing_image() -> Notification {
    Notification::error(
        "Image not found",
        "An uploaded image is required to create an entry",
    )
}

pub fn image_added() -> Notification {
    Notification::success("Success", "Image added")
}

pub fn registration_failed() -> Notification {
    Notification::error(
        "Registration failed",
        "Could not register the image, please try again.",
    )
}

pub fn host_upload_failed() -> Notification {
    Notification::error("Upload failed", "Could not upload the image file")
}
