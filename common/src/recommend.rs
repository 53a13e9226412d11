//! 推薦APIのリクエスト/レスポンスとフォールバック
//!
//! 通信失敗・非2xx・不正なレスポンスはすべて固定のフォールバック1件に置き換える。
//! 「必ず何か表示する」ことを RecommendOutcome の型で表す。

use std::future::Future;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Recommendation, UserInput};

pub const FALLBACK_TITLE: &str = "Classic Style Fallback";
pub const FALLBACK_CONFIDENCE: f64 = 0.7;

/// 推薦APIレスポンス
#[derive(Debug, Deserialize)]
struct RecommendResponse {
    recommendations: Vec<Recommendation>,
}

/// リクエストボディ（JSON）を生成
pub fn recommend_request_body(input: &UserInput) -> Result<String> {
    Ok(serde_json::to_string(input)?)
}

/// レスポンスボディから推薦結果を取り出す
pub fn parse_recommend_response(body: &str) -> Result<Vec<Recommendation>> {
    let response: RecommendResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("recommend response: {}", e)))?;
    Ok(response.recommendations)
}

/// 推薦サービスに接続できない場合の固定レコード
pub fn fallback_recommendation() -> Recommendation {
    Recommendation {
        title: FALLBACK_TITLE.to_string(),
        items: vec![
            "Well-fitted basics".to_string(),
            "Neutral colors".to_string(),
            "Quality shoes".to_string(),
        ],
        explanation: "Unable to connect to styling service. Here's a safe, classic recommendation that works for most occasions.".to_string(),
        images: vec!["https://source.unsplash.com/800x600/?fashion,classic".to_string()],
        confidence: FALLBACK_CONFIDENCE,
        matched_rules: vec!["DEMO".to_string()],
    }
}

/// 推薦リクエストの結果（取得成功 or フォールバック）
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    Fetched(Vec<Recommendation>),
    Fallback {
        recommendation: Recommendation,
        /// 診断ログ用の失敗理由
        cause: String,
    },
}

impl RecommendOutcome {
    pub fn from_result(result: Result<Vec<Recommendation>>) -> Self {
        match result {
            Ok(recommendations) => RecommendOutcome::Fetched(recommendations),
            Err(e) => RecommendOutcome::Fallback {
                recommendation: fallback_recommendation(),
                cause: e.to_string(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RecommendOutcome::Fallback { .. })
    }

    /// 表示用リスト（フォールバック時は1件）
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            RecommendOutcome::Fetched(recommendations) => recommendations,
            RecommendOutcome::Fallback { recommendation, .. } => vec![recommendation],
        }
    }
}

/// リクエストを1回だけ実行し、失敗時はフォールバックに置き換える
///
/// リトライ・タイムアウト・キャンセルはしない。
pub async fn request_with_fallback<F>(request: F) -> RecommendOutcome
where
    F: Future<Output = Result<Vec<Recommendation>>>,
{
    RecommendOutcome::from_result(request.await)
}

/// 実行中リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// 実行中フラグと応答の適用可否を管理
///
/// 同時に実行できるリクエストは1つだけ。画面破棄などで abandon された後に
/// 届いた応答は finish が false を返すので適用しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
    in_progress: bool,
}

impl RequestTracker {
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// リクエスト開始。実行中なら None
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_progress {
            return None;
        }
        self.generation += 1;
        self.in_progress = true;
        Some(RequestTicket(self.generation))
    }

    /// リクエスト終了。成功・失敗に関わらず呼ぶ
    ///
    /// 戻り値は結果を画面に適用してよいか。
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        let was_running = self.in_progress;
        self.in_progress = false;
        was_running
    }

    /// 実行中のリクエストを無効化（応答は破棄される）
    pub fn abandon(&mut self) {
        if self.in_progress {
            self.generation += 1;
            self.in_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn sample(title: &str, confidence: f64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            items: vec!["Blazer".to_string()],
            explanation: "Sharp.".to_string(),
            images: vec!["https://example.com/1.jpg".to_string()],
            confidence,
            matched_rules: vec!["R2".to_string()],
        }
    }

    // =============================================
    // コーデックテスト
    // =============================================

    #[test]
    fn test_request_body() {
        let input = UserInput {
            gender: "male".to_string(),
            height: "tall".to_string(),
            ..Default::default()
        };
        let body = recommend_request_body(&input).expect("シリアライズ失敗");
        let value: serde_json::Value = serde_json::from_str(&body).expect("JSONのはず");
        assert_eq!(value["gender"], "male");
        assert_eq!(value["height"], "tall");
        assert_eq!(value["occasion"], "");
        assert_eq!(value.as_object().map(|m| m.len()), Some(7));
    }

    #[test]
    fn test_parse_response_preserves_order() {
        let body = r#"{"recommendations": [
            {"title": "B", "items": [], "explanation": "", "images": [], "confidence": 0.5, "matched_rules": []},
            {"title": "A", "items": [], "explanation": "", "images": [], "confidence": 0.9, "matched_rules": []}
        ]}"#;
        let recs = parse_recommend_response(body).expect("パース失敗");
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_parse_response_missing_field() {
        let err = parse_recommend_response(r#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_response_not_json() {
        let err = parse_recommend_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_parse_response_empty_list() {
        let recs = parse_recommend_response(r#"{"recommendations": []}"#).expect("パース失敗");
        assert!(recs.is_empty());
    }

    // =============================================
    // フォールバックテスト
    // =============================================

    #[test]
    fn test_fallback_record() {
        let rec = fallback_recommendation();
        assert_eq!(rec.title, "Classic Style Fallback");
        assert_eq!(rec.items.len(), 3);
        assert!(rec.explanation.starts_with("Unable to connect"));
        assert_eq!(rec.images.len(), 1);
        assert!((rec.confidence - 0.7).abs() < f64::EPSILON);
        assert_eq!(rec.matched_rules, vec!["DEMO"]);
    }

    #[test]
    fn test_outcome_success() {
        let recs = vec![sample("One", 0.9), sample("Two", 0.4)];
        let outcome = block_on(request_with_fallback(async { Ok::<_, Error>(recs.clone()) }));
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_recommendations(), recs);
    }

    #[test]
    fn test_outcome_failure_uses_fallback() {
        let outcome = block_on(request_with_fallback(async {
            Err::<Vec<Recommendation>, _>(Error::Request("HTTP 500".to_string()))
        }));
        assert!(outcome.is_fallback());
        if let RecommendOutcome::Fallback { cause, .. } = &outcome {
            assert!(cause.contains("HTTP 500"));
        }
        let recs = outcome.into_recommendations();
        assert_eq!(recs, vec![fallback_recommendation()]);
    }

    #[test]
    fn test_outcome_malformed_response_uses_fallback() {
        let outcome = RecommendOutcome::from_result(parse_recommend_response("{"));
        assert!(outcome.is_fallback());
    }

    // =============================================
    // RequestTracker テスト
    // =============================================

    #[test]
    fn test_tracker_begin_finish() {
        let mut tracker = RequestTracker::default();
        assert!(!tracker.in_progress());

        let ticket = tracker.begin().expect("開始できるはず");
        assert!(tracker.in_progress());
        assert!(tracker.finish(ticket));
        assert!(!tracker.in_progress());
    }

    #[test]
    fn test_tracker_refuses_concurrent_request() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.begin().expect("開始できるはず");
        assert!(tracker.begin().is_none());
        assert!(tracker.finish(ticket));
        assert!(tracker.begin().is_some());
    }

    #[test]
    fn test_tracker_discards_abandoned_response() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.begin().expect("開始できるはず");
        tracker.abandon();
        assert!(!tracker.in_progress());
        assert!(!tracker.finish(ticket));
        assert!(!tracker.in_progress());
    }

    #[test]
    fn test_tracker_finish_twice() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.begin().expect("開始できるはず");
        assert!(tracker.finish(ticket));
        assert!(!tracker.finish(ticket));
    }

    #[test]
    fn test_tracker_old_ticket_after_new_request() {
        let mut tracker = RequestTracker::default();
        let old = tracker.begin().expect("開始できるはず");
        tracker.abandon();
        let new = tracker.begin().expect("開始できるはず");
        assert!(!tracker.finish(old));
        assert!(tracker.in_progress());
        assert!(tracker.finish(new));
    }
}
