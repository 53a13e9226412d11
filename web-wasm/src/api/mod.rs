pub mod recommend;

use wasm_bindgen::prelude::*;

/// JS例外・Promise拒否の内容をログ用の文字列にする
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
