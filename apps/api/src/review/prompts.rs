// Rubric prompt templates for the review endpoints.
// Placeholders are `{name}` tokens filled by `fill_template`.

/// Bullet augmentation prompt. Replace `{bullet_point}`.
pub const AUGMENT_PROMPT_TEMPLATE: &str = r#"Using the bullet point provided, rewrite it as three augmented resume bullet point options that maximize impact across the following categories:

1. Action Verb: Starts with a strong, clear action verb relevant to the skill or task.
2. Quantifiable Impact: Includes specific numbers, percentages, or measurable outcomes.
3. Skill Relevance: Uses relevant keywords or skills.
4. Length and Clarity: Maintains a professional tone, keeps the bullet between 50–150 characters, and avoids unnecessary filler words.

Original Bullet Point:
{bullet_point}

Augment the given text by providing 3 options.

Expected JSON format: {"options": ["option1", "option2", "option3"]}

Return only the JSON object, no extra commentary."#;

/// Resume grading prompt. Replace `{resume_text}`.
pub const GRADE_PROMPT_TEMPLATE: &str = r#"You are an expert resume evaluator specializing in various roles at FAANG/MANGA-level companies.

Analyze the following resume content and produce a structured JSON assessment focusing on both ATS optimization and recruiter-readability. Use the following evaluation criteria inspired by Tech Interview Handbook:

1. ATS-friendly formatting: Are sections (e.g., "Work Experience", "Skills") clear and in standard order? Is the font/plain text optimized for parsing?
2. Clarity & action-oriented language: Do bullets start with strong action verbs? Is the phrasing clear and concise (avoid vague language)?
3. Quantifiable impact: Are measurable achievements present (e.g., "increased X by 20%")?
4. Keyword relevance: Does the text include at least 5 role-specific keywords from the target job description?
5. Brevity & formatting: Is the resume one page? Are fonts standard and margins reasonable? Is it easy to scan?

Return only a JSON object with these keys:

- "Keywords": Array of ≥5 unique, high-impact technical keywords found.
- "SectionFormatting": "ok" or "needs work" based on section headings & order, with short reasoning.
- "ClarityAction": "ok" or "needs work" with brief note on action verbs/phrasing.
- "QuantifiableImpact": "ok" or "needs work" with note on presence or absence of measurable results.
- "KeywordRelevance": "ok" or "needs work" with reasoning.
- "BrevityFormatting": "ok" or "needs work" with note on page length, fonts, margins.
- "Grade": Letter (A–F) per handbook criteria.
- "Score": Integer 0–100 based on overall evaluation.
- "Highlights": 3–4 sentence summary of strongest aspects.
- "Improvements": 3–4 sentence summary of key areas to improve.

Resume Content:
"{resume_text}""#;

/// Resume vs job description prompt. Replace `{resume_text}` and `{job_text}`.
pub const COMPARISON_PROMPT_TEMPLATE: &str = r#"You are a seasoned technical recruiter and resume coach specializing in various roles.

Carefully compare the provided **resume content** with the **job application description**, analyzing alignment in skills, experience, and language based on best practices from the Tech Interview Handbook.

Your output should be a JSON object with the following keys:

- "Grade": A letter grade (A, B, C, D, or F) assessing how well the resume matches the job application, factoring in relevance of skills, clarity, and demonstrated impact.
- "Keyword difference": An array of important keywords or key phrases that appear in the job application text but are missing or underemphasized in the resume, as well as resume keywords not reflected in the job description.
- "Skill Gap Analysis": A detailed explanation of specific technical skills, tools, or experiences requested by the job that are absent or insufficiently demonstrated in the resume.
- "Impact & Clarity Gap": Commentary on missing quantifiable achievements, action verbs, or clear descriptions in the resume relative to expectations set by the job application.
- "Recommendations": Practical advice on how to better tailor the resume to the job, focusing on adding relevant keywords, highlighting measurable impact, and improving clarity or formatting.

**Resume Content:**
"{resume_text}"

**Job Application Text:**
"{job_text}"

Return only the JSON object, correctly formatted, without any additional text or explanation outside the JSON."#;

pub fn build_augment_prompt(bullet_point: &str) -> String {
    fill_template(AUGMENT_PROMPT_TEMPLATE, &[("bullet_point", bullet_point)])
}

pub fn build_grade_prompt(resume_text: &str) -> String {
    fill_template(GRADE_PROMPT_TEMPLATE, &[("resume_text", resume_text)])
}

pub fn build_comparison_prompt(resume_text: &str, job_text: &str) -> String {
    fill_template(
        COMPARISON_PROMPT_TEMPLATE,
        &[("resume_text", resume_text), ("job_text", job_text)],
    )
}

/// Substitutes `{key}` placeholders in one pass over the template.
/// Values are copied verbatim and never rescanned, so user text that happens
/// to contain a placeholder token stays literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let matched = vars.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
