//! 推薦カードの画像エクスポート
//!
//! カード要素をPNGにキャプチャし、`{タイトル}_outfit.png` としてダウンロードさせる。

use base64::Engine;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use stylist_common::{card_element_id, export_file_name, Error, Result};

use crate::api::js_error_message;
use crate::export::js_bindings::capture_card_js;

/// ダウンロード開始後にオブジェクトURLを解放するまでの猶予（ミリ秒）
const REVOKE_DELAY_MS: u32 = 1_000;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/png;base64,iVBOR..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
pub fn extract_mime_type_from_data_url(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
}

/// PNGのData URLをバイト列にデコード
pub fn decode_png_data_url(data_url: &str) -> Result<Vec<u8>> {
    match extract_mime_type_from_data_url(data_url) {
        Some("image/png") => {}
        other => {
            return Err(Error::Export(format!(
                "unexpected image type: {}",
                other.unwrap_or("unknown")
            )))
        }
    }

    let encoded = extract_base64_from_data_url(data_url)
        .ok_or_else(|| Error::Export("data URL has no payload".into()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| Error::Export(format!("base64 decode failed: {}", e)))?;

    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(Error::Export("captured data is not a PNG".into()));
    }
    Ok(bytes)
}

fn export_error(context: &str, value: JsValue) -> Error {
    Error::Export(format!("{}: {}", context, js_error_message(&value)))
}

/// PNGをダウンロードさせる
fn download_png(bytes: &[u8], file_name: &str) -> Result<()> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());

    let bag = BlobPropertyBag::new();
    bag.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)
        .map_err(|e| export_error("blob creation failed", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| export_error("object URL creation failed", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Export("document is not available".into()))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| export_error("link creation failed", e))?
        .dyn_into()
        .map_err(|e| export_error("link creation failed", e.into()))?;
    link.set_download(file_name);
    link.set_href(&url);
    link.click();

    // click直後に解放するとダウンロードが中断されるブラウザがある
    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            gloo::console::warn!(format!("object URL release failed: {}", js_error_message(&e)));
        }
    })
    .forget();
    Ok(())
}

/// index番目のカードを画像として保存
pub async fn export_card_image(index: usize, title: &str) -> Result<()> {
    let element_id = card_element_id(index);
    let captured = capture_card_js(&element_id)
        .await
        .map_err(|e| export_error("capture failed", e))?;
    let data_url = captured
        .as_string()
        .ok_or_else(|| Error::Export("capture did not return a data URL".into()))?;

    let bytes = decode_png_data_url(&data_url)?;
    download_png(&bytes, &export_file_name(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 透過PNG
    const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn test_extract_base64_from_data_url() {
        assert_eq!(
            extract_base64_from_data_url("data:image/png;base64,iVBORw0KGgo="),
            Some("iVBORw0KGgo=")
        );
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type() {
        assert_eq!(
            extract_mime_type_from_data_url("data:image/png;base64,AAAA"),
            Some("image/png")
        );
        assert_eq!(
            extract_mime_type_from_data_url("data:image/jpeg;base64,/9j/"),
            Some("image/jpeg")
        );
        assert_eq!(extract_mime_type_from_data_url("invalid"), None);
        assert_eq!(extract_mime_type_from_data_url("data:;base64,AAAA"), None);
    }

    #[test]
    fn test_decode_png_data_url() {
        let bytes = decode_png_data_url(TINY_PNG).expect("デコード失敗");
        assert!(bytes.starts_with(&PNG_SIGNATURE));
        assert!(bytes.len() > PNG_SIGNATURE.len());
    }

    #[test]
    fn test_decode_rejects_other_types() {
        let err = decode_png_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap_err();
        assert!(err.to_string().contains("image/jpeg"));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode_png_data_url("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn test_decode_rejects_non_png_payload() {
        // "hello" をBase64化したもの
        let err = decode_png_data_url("data:image/png;base64,aGVsbG8=").unwrap_err();
        assert!(err.to_string().contains("not a PNG"));
    }

    #[test]
    fn test_decode_rejects_empty_capture() {
        // キャプチャ対象のサイズが0だと "data:," が返る
        assert!(decode_png_data_url("data:,").is_err());
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[wasm_bindgen_test]
    fn wasm_download_png_defers_url_release() {
        let bytes = decode_png_data_url(TINY_PNG).expect("デコード失敗");
        // 解放はタイマー側で行うので、ダウンロード自体は同期的に成功する
        download_png(&bytes, &export_file_name("Tiny Look")).expect("ダウンロード失敗");
    }
}
