//! 推薦API接続設定
//!
//! ベースURLはビルド時の環境変数 `STYLIST_BACKEND_URL` から取得する。

use crate::error::{Error, Result};

/// 環境変数未設定時のベースURL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// 推薦エンドポイントのパス
pub const RECOMMEND_PATH: &str = "/api/recommend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl BackendConfig {
    /// ベースURLを検証して設定を作る
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("base URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://: {}",
                trimmed
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// ビルド時の環境変数から設定を作る
    ///
    /// 未設定ならデフォルト。不正な値はエラーとして返す（呼び出し側でログ出力してデフォルトへ）。
    pub fn from_build_env() -> Result<Self> {
        match option_env!("STYLIST_BACKEND_URL") {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` 先のURL
    pub fn recommend_url(&self) -> String {
        format!("{}{}", self.base_url, RECOMMEND_PATH)
    }
}
