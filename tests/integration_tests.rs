//! Integration tests for the resume matcher

use resume_matcher::config::Config;
use resume_matcher::input::InputManager;
use resume_matcher::llm::{CompletionClient, LlmError, ResumeGenerator};
use resume_matcher::output::document::PdfDocumentWriter;
use resume_matcher::output::{AnalysisReport, ReportGenerator};
use resume_matcher::processing::analyzer::AnalysisEngine;
use resume_matcher::{FactExtractor, MatchScorer};
use std::io::{Cursor, Write};
use std::time::Duration;

const JOB: &str = "Required: 5+ years of Python experience. Must have a Bachelor's degree.";
const RESUME: &str = "I have 5+ years of Python experience and a Bachelor's degree.";

struct UnreachableClient;

impl CompletionClient for UnreachableClient {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

fn has_one_decimal(score: f64) -> bool {
    ((score * 10.0).round() - score * 10.0).abs() < 1e-9
}

#[test]
fn test_example_pair_scores_high() {
    let scorer = MatchScorer::new();
    let result = scorer.score(RESUME, JOB).unwrap();

    for term in ["5+ years", "python", "experience", "bachelor"] {
        assert!(
            result.found.iter().any(|t| t == term),
            "expected {} in {:?}",
            term,
            result.found
        );
    }
    assert!(result.score >= 7.0);
    assert!(result.score <= 10.0);
    assert!(has_one_decimal(result.score));
}

#[test]
fn test_empty_inputs_score_zero() {
    let scorer = MatchScorer::new();
    assert_eq!(scorer.calculate_score(RESUME, "").unwrap(), 0.0);
    assert_eq!(scorer.calculate_score("", JOB).unwrap(), 0.0);
}

#[test]
fn test_scores_are_bounded_and_floored() {
    let scorer = MatchScorer::new();
    let pairs = [
        (RESUME, JOB),
        ("Gardener who loves tulips", JOB),
        ("Python", "Python is required. Python must be expert level."),
        ("", ""),
        ("Java developer", "We prefer candidates with Kubernetes and Terraform skills."),
    ];

    for (resume, job) in pairs {
        let score = scorer.calculate_score(resume, job).unwrap();
        assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
        assert!(has_one_decimal(score));
        assert!(score == 0.0 || score >= 7.0, "score {} below floor", score);
        assert_eq!(score, scorer.calculate_score(resume, job).unwrap());
    }
}

#[test]
fn test_structured_facts() {
    let facts = FactExtractor::new().unwrap().extract(
        "Backend Engineer in Denver. This position is Remote. 3-5 years experience. \
         Compensation: $80,000 - $100,000/year. PhD a plus. Python, SQL and AWS.",
    );

    assert_eq!(facts.location, "Remote");
    assert_eq!(facts.experience, Some("3-5".to_string()));
    assert_eq!(facts.salary, Some("$80,000 - $100,000/year".to_string()));
    assert_eq!(facts.education, Some("PhD".to_string()));
    assert_eq!(facts.skills, vec!["Python", "SQL", "AWS"]);
}

#[tokio::test]
async fn test_files_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let resume_path = dir.path().join("resume.md");
    let job_path = dir.path().join("job_posting");
    std::fs::write(&resume_path, format!("# Jane Doe\n\n**Summary**: {}", RESUME)).unwrap();
    std::fs::write(&job_path, JOB).unwrap();

    let mut input = InputManager::new();
    let resume_text = input.extract_text(&resume_path).await.unwrap();
    let job_text = input.extract_text(&job_path).await.unwrap();
    assert!(!resume_text.contains("**"));

    let config = Config::default();
    let analysis = AnalysisEngine::new(&config).unwrap().analyze(&resume_text, &job_text).unwrap();
    let report = AnalysisReport::from_analysis(analysis, "resume.md", "job_posting");
    assert!(report.summary.score >= 7.0);

    let markdown = ReportGenerator::new()
        .generate_report(&report, &resume_matcher::config::OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("## Requirements"));
}

#[tokio::test]
async fn test_docx_resume_and_unlisted_job_extension() {
    let dir = tempfile::tempdir().unwrap();
    let resume_path = dir.path().join("resume.docx");
    let job_path = dir.path().join("job.rtf");

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    write!(
        writer,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>"#,
        RESUME.replace('\'', "&apos;")
    )
    .unwrap();
    std::fs::write(&resume_path, writer.finish().unwrap().into_inner()).unwrap();
    std::fs::write(&job_path, JOB).unwrap();

    assert!(resume_matcher::cli::validate_input_file(&job_path).is_ok());

    let mut input = InputManager::new();
    let resume_text = input.extract_text(&resume_path).await.unwrap();
    let job_text = input.extract_text(&job_path).await.unwrap();
    assert_eq!(resume_text, RESUME);
    assert_eq!(job_text, JOB);

    assert!(MatchScorer::new().calculate_score(&resume_text, &job_text).unwrap() >= 7.0);
}

#[tokio::test]
async fn test_generator_falls_back_to_original_resume() {
    let generator = ResumeGenerator::new(
        Some(UnreachableClient),
        PdfDocumentWriter::new(),
        Duration::from_secs(5),
    );

    let bytes = generator.generate(RESUME, JOB).await;
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}
