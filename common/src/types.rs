//! 入力・推薦結果の型定義
//!
//! Web(WASM)とテストで共有される型:
//! - UserInput: 質問フォームの回答（推薦APIへのリクエストボディ）
//! - Recommendation: 推薦APIが返す1件分のコーディネート提案

use serde::{Deserialize, Serialize};

use crate::questionnaire::FieldKey;

/// フォーム回答（Answer Set）
///
/// 未回答は空文字。任意項目も空文字のまま送信する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub gender: String,
    pub occasion: String,
    pub weather: String,
    pub body_type: String,
    pub preferred_style: String,
    pub color_preference: String,
    pub height: String,
}

impl UserInput {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Gender => &self.gender,
            FieldKey::Occasion => &self.occasion,
            FieldKey::Weather => &self.weather,
            FieldKey::BodyType => &self.body_type,
            FieldKey::PreferredStyle => &self.preferred_style,
            FieldKey::ColorPreference => &self.color_preference,
            FieldKey::Height => &self.height,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Gender => &mut self.gender,
            FieldKey::Occasion => &mut self.occasion,
            FieldKey::Weather => &mut self.weather,
            FieldKey::BodyType => &mut self.body_type,
            FieldKey::PreferredStyle => &mut self.preferred_style,
            FieldKey::ColorPreference => &mut self.color_preference,
            FieldKey::Height => &mut self.height,
        };
        *slot = value.into();
    }
}

/// 推薦結果（Recommendation Record）
///
/// 推薦APIかフォールバック定数からのみ生成され、生成後は変更しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,

    #[serde(default)]
    pub items: Vec<String>,

    pub explanation: String,

    #[serde(default)]
    pub images: Vec<String>,

    /// 0.0〜1.0 想定（範囲外もそのまま保持する）
    pub confidence: f64,

    #[serde(default)]
    pub matched_rules: Vec<String>,
}

impl Recommendation {
    /// カードに表示する画像（先頭のみ使用）
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
