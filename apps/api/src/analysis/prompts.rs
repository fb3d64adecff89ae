// Prompt for résumé analysis. The response shape must match `AnalysisResult`
// exactly, since `parse_analysis` accepts nothing else.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Analysis prompt template. Replace `{resume_text}` and `{json_only}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and provide detailed feedback in JSON format. Score it 0-100.

Resume:
{resume_text}

{json_only} Use this exact structure:
{
  "overallScore": <number 0-100>,
  "strengths": [<list of 3-5 key strengths>],
  "improvements": [<list of 3-5 areas to improve>],
  "keywords": [<list of 5-8 important keywords or skills found>],
  "tips": [<list of 3-4 actionable tips>],
  "summary": "<1-2 sentence summary of the resume quality>"
}"#;

pub fn build_analysis_prompt(resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", resume_text)
}
