//! JavaScript Bridge バインディング
//!
//! カード要素のラスタライズ（html2canvas）をJavaScript側に委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/card-capture.js")]
extern "C" {
    /// 指定IDの要素をPNGのData URLとしてキャプチャ
    ///
    /// # Arguments
    /// * `element_id` - キャプチャ対象要素のID
    ///
    /// # Returns
    /// "data:image/png;base64,..." 形式の文字列
    #[wasm_bindgen(js_name = "captureCard", catch)]
    pub async fn capture_card_js(element_id: &str) -> Result<JsValue, JsValue>;
}
