pub mod layout;
pub mod product_fields;
pub mod product_image_input;
pub mod tag_input;
pub mod text_input;

pub use product_fields::ProductFields;
pub use product_image_input::ProductImageInput;
pub use tag_input::TagInput;
pub use text_input::TextInput;
