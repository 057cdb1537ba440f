//! Prompt templates for resume rewriting

pub const SYSTEM_PROMPT: &str = "You are a professional resume writer.";

const REWRITE_TEMPLATE: &str = r#"You are a professional resume writer. Create an optimized version of this resume to better match the job description.

Original Resume:
{resume}

Job Description:
{job}

Instructions:
1. Keep the same basic information but optimize the wording
2. Match keywords from the job description
3. Quantify achievements where possible
4. Use strong action verbs
5. Maintain professional formatting
6. Keep content truthful - don't invent experience
7. Format in clear sections: Summary, Experience, Skills, Education

Return only the optimized resume text."#;

/// User prompt asking for a rewrite of `resume` tailored to `job`.
pub fn render_rewrite_prompt(resume: &str, job: &str) -> String {
    // Substitute job first so a resume containing "{job}" is left alone
    REWRITE_TEMPLATE
        .replace("{job}", job)
        .replacen("{resume}", resume, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_prompt_contains_inputs() {
        let prompt = render_rewrite_prompt(
            "Software Engineer with Python experience at Tech Corp.",
            "Senior Software Engineer role requiring React and Python.",
        );

        assert!(prompt.contains("Original Resume:\nSoftware Engineer with Python experience at Tech Corp."));
        assert!(prompt.contains("Job Description:\nSenior Software Engineer role requiring React and Python."));
        assert!(prompt.contains("7. Format in clear sections"));
        assert!(prompt.ends_with("Return only the optimized resume text."));
    }

    #[test]
    fn test_placeholders_in_resume_are_kept() {
        let prompt = render_rewrite_prompt("Built {job} scheduler", "Cron expert");
        assert!(prompt.contains("Built {job} scheduler"));
    }
}
