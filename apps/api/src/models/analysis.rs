use serde::{Deserialize, Serialize};

/// Typed outcome of one résumé analysis.
///
/// Created only by a successful parse of the generator's response and never
/// mutated afterwards; a new analysis replaces it wholesale. The nominal list
/// lengths (3–5 strengths, 5–8 keywords, ...) are requested from the generator
/// but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Nominally 0–100. Kept as returned; display code rounds and clamps.
    pub overall_score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub tips: Vec<String>,
    pub summary: String,
}
