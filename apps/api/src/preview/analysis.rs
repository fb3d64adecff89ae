use serde::Serialize;

use crate::models::analysis::AnalysisResult;

/// Display form of an analysis score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    /// Rounded to the nearest integer, clamped to 0–100.
    pub value: u8,
    /// Progress bar width in percent, clamped to 0–100.
    pub bar_width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub score: ScoreView,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub tips: Vec<String>,
}

pub fn format_score(score: f64) -> ScoreView {
    if !score.is_finite() {
        return ScoreView {
            value: 0,
            bar_width_percent: 0.0,
        };
    }
    let clamped = score.clamp(0.0, 100.0);
    ScoreView {
        value: clamped.round() as u8,
        bar_width_percent: clamped,
    }
}

pub fn project_analysis(result: &AnalysisResult) -> AnalysisView {
    AnalysisView {
        score: format_score(result.overall_score),
        summary: crate::preview::visible_text(&result.summary),
        strengths: result.strengths.clone(),
        improvements: result.improvements.clone(),
        keywords: result.keywords.clone(),
        tips: result.tips.clone(),
    }
}
