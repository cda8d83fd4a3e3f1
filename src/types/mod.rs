// ABOUTME: Validated domain types shared across modules.
// ABOUTME: Image references and compose service names.

mod image_ref;
mod service_name;

pub use image_ref::{ImageRef, ParseImageRefError};
pub use service_name::{ServiceName, ServiceNameError};
