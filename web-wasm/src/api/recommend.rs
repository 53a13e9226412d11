//! 推薦API連携
//!
//! `POST {base_url}/api/recommend` に回答をJSONで送り、推薦結果の一覧を受け取る。
//! 失敗時のフォールバックは呼び出し側（request_with_fallback）で行う。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use stylist_common::{
    parse_recommend_response, recommend_request_body, Error, Recommendation, Result, UserInput,
};

use super::js_error_message;

fn request_error(context: &str, value: JsValue) -> Error {
    Error::Request(format!("{}: {}", context, js_error_message(&value)))
}

/// 推薦APIを1回呼び出す
///
/// 通信エラー・非2xx・レスポンス不正はすべて Err を返す。
pub async fn fetch_recommendations(url: &str, input: &UserInput) -> Result<Vec<Recommendation>> {
    let body = recommend_request_body(input)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| request_error("request build failed", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| request_error("header set failed", e))?;

    let window = web_sys::window()
        .ok_or_else(|| Error::Request("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| request_error("fetch failed", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| request_error("unexpected fetch result", e))?;

    if !resp.ok() {
        return Err(Error::Request(format!("API error: {}", resp.status())));
    }

    let text = resp.text().map_err(|e| request_error("body read failed", e))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| request_error("body read failed", e))?;
    let text = text
        .as_string()
        .ok_or_else(|| Error::Parse("response body is not text".into()))?;

    parse_recommend_response(&text)
}
