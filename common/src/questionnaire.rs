//! 質問定義テーブル
//!
//! フォームの各ステップ（キー・ラベル・選択肢・必須）を順序付きの静的テーブルとして持つ。
//! ステップ制御とUIはこのテーブルだけを参照する。

use serde::{Deserialize, Serialize};

/// 質問キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Gender,
    Occasion,
    Weather,
    BodyType,
    PreferredStyle,
    ColorPreference,
    Height,
}

impl FieldKey {
    /// フォーム順
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Gender,
        FieldKey::Occasion,
        FieldKey::Weather,
        FieldKey::BodyType,
        FieldKey::PreferredStyle,
        FieldKey::ColorPreference,
        FieldKey::Height,
    ];

    /// フォーム上の位置（0始まり）
    pub fn index(&self) -> usize {
        match self {
            FieldKey::Gender => 0,
            FieldKey::Occasion => 1,
            FieldKey::Weather => 2,
            FieldKey::BodyType => 3,
            FieldKey::PreferredStyle => 4,
            FieldKey::ColorPreference => 5,
            FieldKey::Height => 6,
        }
    }

    /// リクエストJSON上のフィールド名
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Gender => "gender",
            FieldKey::Occasion => "occasion",
            FieldKey::Weather => "weather",
            FieldKey::BodyType => "body_type",
            FieldKey::PreferredStyle => "preferred_style",
            FieldKey::ColorPreference => "color_preference",
            FieldKey::Height => "height",
        }
    }
}

/// 1ステップ分の質問
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub key: FieldKey,
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub required: bool,
}

impl FormField {
    /// 選択肢に含まれる値か
    pub fn accepts(&self, value: &str) -> bool {
        self.options.contains(&value)
    }
}

pub static FORM_FIELDS: [FormField; 7] = [
    FormField {
        key: FieldKey::Gender,
        label: "Gender",
        options: &["male", "female", "non-binary"],
        required: true,
    },
    FormField {
        key: FieldKey::Occasion,
        label: "Occasion",
        options: &["casual", "formal", "party", "wedding", "sports", "work", "date"],
        required: true,
    },
    FormField {
        key: FieldKey::Weather,
        label: "Weather",
        options: &["hot", "mild", "cold", "rainy"],
        required: true,
    },
    FormField {
        key: FieldKey::BodyType,
        label: "Body Type",
        options: &["slim", "athletic", "pear", "apple", "plus-size"],
        required: true,
    },
    FormField {
        key: FieldKey::PreferredStyle,
        label: "Style Preference",
        options: &[
            "modern",
            "classic",
            "sporty",
            "boho",
            "flashy",
            "minimalist",
            "fitted",
            "traditional",
        ],
        required: true,
    },
    FormField {
        key: FieldKey::ColorPreference,
        label: "Color Preference",
        options: &["neutral", "bright", "dark", "pastels", "earth-tones"],
        required: false,
    },
    FormField {
        key: FieldKey::Height,
        label: "Height",
        options: &["short", "average", "tall"],
        required: false,
    },
];

/// キーから質問定義を引く
pub fn field(key: FieldKey) -> &'static FormField {
    &FORM_FIELDS[key.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_field_keys() {
        let keys: Vec<FieldKey> = FORM_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys, FieldKey::ALL.to_vec());
    }

    #[test]
    fn test_required_flags() {
        let required: Vec<&str> = FORM_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["gender", "occasion", "weather", "body_type", "preferred_style"]
        );
    }

    #[test]
    fn test_every_field_has_options() {
        for f in FORM_FIELDS.iter() {
            assert!(!f.options.is_empty(), "{} has no options", f.label);
            assert!(f.options.iter().all(|o| !o.is_empty()));
        }
    }

    #[test]
    fn test_accepts() {
        let weather = field(FieldKey::Weather);
        assert!(weather.accepts("rainy"));
        assert!(!weather.accepts("snowy"));
        assert!(!weather.accepts(""));
    }

    #[test]
    fn test_field_lookup() {
        for (i, key) in FieldKey::ALL.into_iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(field(key).key, key);
        }
        assert_eq!(field(FieldKey::PreferredStyle).label, "Style Preference");
    }

    #[test]
    fn test_field_key_serializes_as_json_name() {
        for key in FieldKey::ALL {
            let json = serde_json::to_string(&key).expect("シリアライズ失敗");
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
