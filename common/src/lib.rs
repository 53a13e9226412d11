//! AI Fashion Stylist Common Library
//!
//! Web(WASM)から使うフォーム制御・推薦結果の状態管理・API入出力。
//! ブラウザAPIに依存しないのでネイティブでテストできる。

pub mod types;
pub mod questionnaire;
pub mod form;
pub mod config;
pub mod error;
pub mod recommend;
pub mod presenter;
pub mod theme;

pub use types::{Recommendation, UserInput};
pub use questionnaire::{FieldKey, FormField, FORM_FIELDS};
pub use form::StepForm;
pub use config::BackendConfig;
pub use error::{Error, Result};
pub use recommend::{
    fallback_recommendation, parse_recommend_response, recommend_request_body,
    request_with_fallback, RecommendOutcome, RequestTicket, RequestTracker,
};
pub use presenter::{
    card_element_id, confidence_percent, export_file_name, look_id, ExpandState, SavedLooks,
    SKELETON_CARD_COUNT, STYLING_TIPS,
};
pub use theme::Theme;
