//! The immutable completed-session record and its rating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use su_core::SlideId;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::score::Score;

/// One answered question, appended to the log in traversal order.
///
/// Entries are never mutated once appended; field names follow the persisted
/// `game_summary` row shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    /// Slide the question was on.
    #[serde(rename = "slideId")]
    pub slide_id: SlideId,
    /// Question text as shown.
    pub question: String,
    /// Text of the chosen answer.
    #[serde(rename = "selectedAnswer")]
    pub selected_answer: String,
    /// Raw category of the chosen answer.
    pub category: String,
    /// Points awarded.
    pub points: i64,
}

/// The immutable record of one completed playthrough.
///
/// Built exactly once per session id when a terminal boundary is reached,
/// then handed to the persistence collaborator; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique id of this session. In-flight persistence is keyed by this,
    /// never by ambient session state.
    pub session_id: Uuid,
    /// Stable identifier of the session owner.
    pub owner_id: String,
    /// When the session started.
    #[serde(rename = "date")]
    pub started_at: DateTime<Utc>,
    /// Captured answering-phase duration in seconds, if any was captured.
    #[serde(rename = "duration")]
    pub duration_seconds: Option<u64>,
    /// Final score.
    pub score: Score,
    /// Rating label derived from the total score.
    pub rating: String,
    /// Sum of all banked proposals.
    pub total_sales: i64,
    /// Number of closed sales.
    #[serde(rename = "sales_made")]
    pub sales_count: u32,
    /// The full answer log, in traversal order.
    pub game_summary: Vec<AnsweredQuestion>,
}

/// Derive the rating label for a total score.
///
/// Five ordered bands over the four ascending cut points; monotonic by
/// construction.
pub fn rating_label(total: i64, config: &GameConfig) -> &str {
    let [a, b, c, d] = config.rating_cuts;
    let tier = if total <= a {
        0
    } else if total <= b {
        1
    } else if total <= c {
        2
    } else if total <= d {
        3
    } else {
        4
    };
    &config.rating_labels[tier]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        let cfg = GameConfig::default();
        assert_eq!(rating_label(-10, &cfg), "Lost in the store");
        assert_eq!(rating_label(15, &cfg), "Lost in the store");
        assert_eq!(rating_label(16, &cfg), "Beginner");
        assert_eq!(rating_label(35, &cfg), "Beginner");
        assert_eq!(rating_label(36, &cfg), "Advanced");
        assert_eq!(rating_label(55, &cfg), "Advanced");
        assert_eq!(rating_label(56, &cfg), "Senior consultant");
        assert_eq!(rating_label(75, &cfg), "Senior consultant");
        assert_eq!(rating_label(76, &cfg), "King of the Day");
    }

    #[test]
    fn rating_is_monotonic() {
        let cfg = GameConfig::default();
        let tier = |total: i64| {
            cfg.rating_labels
                .iter()
                .position(|l| l == rating_label(total, &cfg))
                .unwrap()
        };
        let mut last = tier(-100);
        for total in -100..200 {
            let t = tier(total);
            assert!(t >= last, "tier dropped at total={total}");
            last = t;
        }
    }

    #[test]
    fn record_serde_names() {
        let record = SessionRecord {
            session_id: Uuid::nil(),
            owner_id: "user-1".to_string(),
            started_at: Utc::now(),
            duration_seconds: Some(42),
            score: Score::new(),
            rating: "Beginner".to_string(),
            total_sales: 648,
            sales_count: 1,
            game_summary: vec![AnsweredQuestion {
                slide_id: SlideId(1),
                question: "Q?".to_string(),
                selected_answer: "A".to_string(),
                category: "greeting".to_string(),
                points: 5,
            }],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["duration"], 42);
        assert_eq!(json["sales_made"], 1);
        assert_eq!(json["game_summary"][0]["slideId"], 1);
        assert_eq!(json["game_summary"][0]["selectedAnswer"], "A");
        assert!(json["date"].is_string());
    }
}
