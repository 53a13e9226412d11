pub mod card_image;
pub mod js_bindings;
