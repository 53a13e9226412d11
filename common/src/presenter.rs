//! 推薦結果カードの表示状態
//!
//! - 信頼度のパーセント表示
//! - 詳細パネルの開閉（同時に1枚だけ）
//! - 保存ルック（内容ハッシュで識別）
//! - 画像エクスポートのファイル名

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::types::Recommendation;

/// 読み込み中に表示するスケルトンカードの枚数
pub const SKELETON_CARD_COUNT: usize = 3;

/// 詳細パネルに表示するスタイリングのヒント
pub const STYLING_TIPS: [&str; 4] = [
    "Mix textures and fabrics for visual interest",
    "Pay attention to fit and proportions",
    "Accessorize thoughtfully to complete the look",
    "Consider the color palette that flatters you most",
];

/// 信頼度をパーセント文字列に変換（例: 0.756 → "76%"）
///
/// 0〜1の範囲外は丸め込み、NaNは0%とする。
pub fn confidence_percent(confidence: f64) -> String {
    let clamped = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    format!("{}%", (clamped * 100.0).round() as u32)
}

/// カード要素のDOM ID（画像キャプチャ対象）
pub fn card_element_id(index: usize) -> String {
    format!("recommendation-{}", index)
}

/// エクスポート画像のファイル名
///
/// 連続する空白を `_` 1文字に置き換え、`_outfit.png` を付ける。
pub fn export_file_name(title: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }
    format!("{}_outfit.png", WHITESPACE_RE.replace_all(title, "_"))
}

/// 詳細パネルの開閉状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: Option<usize>,
}

impl ExpandState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// 開いているカードを選ぶと閉じ、別のカードを選ぶと入れ替える
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
    }
}

/// 推薦結果の内容ハッシュ（SHA-256, hex）
pub fn look_id(record: &Recommendation) -> String {
    fn put_str(hasher: &mut Sha256, s: &str) {
        hasher.update((s.len() as u64).to_le_bytes());
        hasher.update(s.as_bytes());
    }
    fn put_list(hasher: &mut Sha256, list: &[String]) {
        hasher.update((list.len() as u64).to_le_bytes());
        for s in list {
            put_str(hasher, s);
        }
    }

    let mut hasher = Sha256::new();
    put_str(&mut hasher, &record.title);
    put_list(&mut hasher, &record.items);
    put_str(&mut hasher, &record.explanation);
    put_list(&mut hasher, &record.images);
    hasher.update(record.confidence.to_bits().to_le_bytes());
    put_list(&mut hasher, &record.matched_rules);
    hex::encode(hasher.finalize())
}

#[derive(Debug, Clone, PartialEq)]
struct SavedLook {
    id: String,
    record: Recommendation,
}

/// 保存ルック
///
/// 一覧の位置ではなく内容ハッシュで識別するので、新しい推薦結果に置き換わっても
/// 別のレコードを指すことはない。保存順を保持する。
/// 内容が同一のレコードは一覧上の位置が違っても同じ保存枠を共有する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedLooks {
    entries: Vec<SavedLook>,
}

impl SavedLooks {
    /// 永続化済みのレコードから復元（重複は除く）
    pub fn from_records(records: Vec<Recommendation>) -> Self {
        let mut saved = Self::default();
        for record in records {
            if !saved.contains(&record) {
                saved.entries.push(SavedLook {
                    id: look_id(&record),
                    record,
                });
            }
        }
        saved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, record: &Recommendation) -> bool {
        self.contains_id(&look_id(record))
    }

    /// look_id で判定（カード描画時はIDを先に計算しておく）
    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// 保存状態を反転。戻り値は反転後に保存されているか
    pub fn toggle(&mut self, record: &Recommendation) -> bool {
        let id = look_id(record);
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(SavedLook {
                id,
                record: record.clone(),
            });
            true
        }
    }

    /// 現在の一覧の index 番目を反転。範囲外なら None
    ///
    /// 同一内容のレコードが一覧に複数あれば、どの index からでも同じ枠が反転する。
    pub fn toggle_index(&mut self, list: &[Recommendation], index: usize) -> Option<bool> {
        list.get(index).map(|record| self.toggle(record))
    }

    /// 保存順のレコード一覧（永続化する内容）
    pub fn records(&self) -> Vec<&Recommendation> {
        self.entries.iter().map(|e| &e.record).collect()
    }

    /// 永続化用JSON（レコード配列）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records())?)
    }
}

impl Serialize for SavedLooks {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}
