//! ステップ形式の質問フォーム制御
//!
//! 質問テーブル（FORM_FIELDS）を1問ずつ進め、回答を保持する。
//! 送信は必須項目がすべて選択肢内の値で埋まっている場合のみ許可する。

use crate::questionnaire::{FieldKey, FormField, FORM_FIELDS};
use crate::types::UserInput;

/// フォーム状態
#[derive(Debug, Clone, PartialEq)]
pub struct StepForm {
    fields: &'static [FormField],
    current_step: usize,
    answers: UserInput,
}

impl Default for StepForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm {
    pub fn new() -> Self {
        Self {
            fields: &FORM_FIELDS,
            current_step: 0,
            answers: UserInput::default(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.fields.len()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_field(&self) -> &'static FormField {
        &self.fields[self.current_step]
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    /// 最終ステップでは「次へ」の代わりに送信ボタンを出す
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.step_count()
    }

    pub fn answers(&self) -> &UserInput {
        &self.answers
    }

    pub fn selected(&self, key: FieldKey) -> &str {
        self.answers.get(key)
    }

    /// 指定ステップの回答を記録（選択時点では検証しない）
    ///
    /// 範囲外のステップ番号は無視する。
    pub fn select_option(&mut self, step_index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get(step_index) {
            self.answers.set(field.key, value);
        }
    }

    /// 次のステップへ（最終ステップでは何もしない）
    pub fn advance(&mut self) {
        if self.current_step + 1 < self.step_count() {
            self.current_step += 1;
        }
    }

    /// 前のステップへ（先頭では何もしない）
    pub fn retreat(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// 必須項目がすべて有効な値で埋まっているか（現在ステップとは無関係）
    pub fn is_complete(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| f.required)
            .all(|f| f.accepts(self.answers.get(f.key)))
    }

    /// 送信用の回答を確定
    ///
    /// 未完了なら None（UI側はボタンを無効化しているので黙って拒否する）。
    pub fn submit(&self) -> Option<UserInput> {
        self.is_complete().then(|| self.answers.clone())
    }

    /// 進捗（0.0〜1.0）: (現在ステップ + 1) / 総ステップ数
    pub fn progress(&self) -> f32 {
        (self.current_step + 1) as f32 / self.step_count() as f32
    }
}
