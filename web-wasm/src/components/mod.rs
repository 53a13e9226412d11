pub mod footer;
pub mod header;
pub mod hero;
pub mod input_form;
pub mod progress_bar;
pub mod recommendation_cards;
