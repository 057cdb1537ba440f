//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::{AnalysisReport, FactsReport, MatchLevel};
use crate::processing::facts::StructuredFacts;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Number of word cloud terms shown outside JSON output
const CLOUD_PREVIEW: usize = 15;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Picks the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .score-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .score-excellent { background: #28a745; }
        .score-strong { background: #17a2b8; }
        .score-good { background: #ffc107; color: #000; }
        .score-none { background: #dc3545; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .terms span { display: inline-block; margin: 3px; padding: 3px 10px; border-radius: 12px; background: #e9ecef; }
        .terms.found span { background: #d4edda; }
        .terms.missing span { background: #f8d7da; }
        table { border-collapse: collapse; }
        td { padding: 4px 16px 4px 0; }
        .metadata { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Match Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Match Score</h2>
            <h3>{{ score }} / 10 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
        </div>

        <div class="section">
            <h2>Job Facts</h2>
            <table>
                <tr><td><strong>Experience</strong></td><td>{{ experience }}</td></tr>
                <tr><td><strong>Location</strong></td><td>{{ location }}</td></tr>
                <tr><td><strong>Salary</strong></td><td>{{ salary }}</td></tr>
                <tr><td><strong>Education</strong></td><td>{{ education }}</td></tr>
                <tr><td><strong>Skills</strong></td><td>{{ skills }}</td></tr>
            </table>
        </div>

        <div class="section">
            <h2>Requirements</h2>
            <h3>Found ({{ found.len() }})</h3>
            <div class="terms found">{% for term in found %}<span>{{ term }}</span>{% endfor %}</div>
            {% if has_partial %}
            <h3>Partial ({{ partial.len() }})</h3>
            <div class="terms">{% for term in partial %}<span>{{ term }}</span>{% endfor %}</div>
            {% endif %}
            <h3>Missing ({{ missing.len() }})</h3>
            <div class="terms missing">{% for term in missing %}<span>{{ term }}</span>{% endfor %}</div>
        </div>

        <div class="section">
            <h2>Keywords</h2>
            <p><strong>Matched:</strong> {{ keywords_found }}</p>
            <p><strong>Missing:</strong> {{ keywords_missing }}</p>
        </div>

        <div class="section">
            <h2>Top Job Terms</h2>
            <div class="terms">{% for term in cloud %}<span>{{ term }}</span>{% endfor %}</div>
        </div>

        <div class="metadata">
            <p>Generated by resume-matcher v{{ version }}</p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Job:</strong> {{ job_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    score: String,
    score_class: &'static str,
    score_label: &'static str,
    verdict: String,
    experience: String,
    location: String,
    salary: String,
    education: String,
    skills: String,
    found: Vec<String>,
    partial: Vec<String>,
    has_partial: bool,
    missing: Vec<String>,
    keywords_found: String,
    keywords_missing: String,
    cloud: Vec<String>,
    version: String,
    resume_file: String,
    job_file: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, level: MatchLevel) -> String {
        let color = match level {
            MatchLevel::Excellent => Color::Green,
            MatchLevel::Strong => Color::BrightGreen,
            MatchLevel::Good => Color::Yellow,
            MatchLevel::NoMatch => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", level.label().color(color).bold())
        } else {
            format!("[{}]", level.label())
        }
    }

    fn format_term_list(&self, label: &str, terms: &[String], color: Color) -> String {
        if terms.is_empty() {
            format!("{}: none\n", label)
        } else {
            format!("{} ({}): {}\n", label, terms.len(), self.colorize(&terms.join(", "), color))
        }
    }

    fn format_facts(&self, facts: &StructuredFacts) -> String {
        let mut output = String::new();
        output.push_str(&format!("💼 Experience: {}\n", display_or_none(&facts.experience)));
        output.push_str(&format!("📍 Location: {}\n", facts.location));
        output.push_str(&format!("💰 Salary: {}\n", display_or_none(&facts.salary)));
        output.push_str(&format!("🎓 Education: {}\n", display_or_none(&facts.education)));
        output.push_str(&self.format_term_list("🛠  Skills", &distinct(&facts.skills), Color::Cyan));
        output
    }

    /// Summary for the `facts` command
    pub fn format_facts_report(&self, report: &FactsReport) -> String {
        let mut output = self.format_header(&format!("📄 JOB FACTS: {}", report.job_file), 1);
        output.push_str(&self.format_facts(&report.facts));

        output.push_str(&self.format_header("Top Terms", 2));
        for weight in report.word_cloud.iter().take(CLOUD_PREVIEW) {
            output.push_str(&format!("  {:<20} {:.1}\n", weight.term, weight.weight));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.match_result;

        output.push_str(&self.format_header("📊 RESUME MATCH", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Score", 2));
        output.push_str(&format!(
            "Match Score: {:.1}/10 {}\n",
            report.summary.score,
            self.format_score_badge(report.summary.level)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.summary.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Job Facts", 2));
        output.push_str(&self.format_facts(&report.facts));

        output.push_str(&self.format_header("Requirements", 2));
        output.push_str(&self.format_term_list("✅ Found", &result.found, Color::Green));
        if !result.partial.is_empty() {
            let partial: Vec<String> = result.partial.iter().map(|p| p.term.clone()).collect();
            output.push_str(&self.format_term_list("🔶 Partial", &partial, Color::Yellow));
        }
        output.push_str(&self.format_term_list("❌ Missing", &result.missing, Color::Red));

        output.push_str(&self.format_header("Keywords", 2));
        output.push_str(&self.format_term_list("Matched", &report.keywords.found, Color::Green));
        output.push_str(&self.format_term_list("Missing", &report.keywords.missing, Color::Red));

        if self.detailed {
            let breakdown = &result.breakdown;
            output.push_str(&self.format_header("Score Breakdown", 3));
            output.push_str(&format!("Requirement terms: {}\n", breakdown.requirement_count));
            output.push_str(&format!("Match points: {:.2}\n", breakdown.match_points));
            output.push_str(&format!("Base score: {:.2}\n", breakdown.base_score));
            output.push_str(&format!("Similarity score: {:.2}\n", breakdown.similarity_score));
            output.push_str(&format!("Curved score: {:.2}\n", breakdown.curved_score));

            for partial in &result.partial {
                output.push_str(&format!(
                    "  ~ {} ({}/{} words)\n",
                    partial.term, partial.matched_words, partial.total_words
                ));
            }

            if !report.keywords.near.is_empty() {
                output.push_str(&self.format_header("Near Matches", 3));
                for near in &report.keywords.near {
                    output.push_str(&format!(
                        "  {} ≈ {} ({:.0}%)\n",
                        near.keyword,
                        near.matched_text,
                        near.similarity * 100.0
                    ));
                }
            }

            output.push_str(&self.format_header("Top Job Terms", 3));
            for weight in report.word_cloud.iter().take(CLOUD_PREVIEW) {
                output.push_str(&format!("  {:<20} {:.1}\n", weight.term, weight.weight));
            }
        }

        output.push_str(&format!(
            "\nℹ️  resume-matcher v{} | Resume: {} ({} words) | Job: {} ({} words)\n",
            report.metadata.version,
            report.metadata.resume_file,
            report.metadata.resume_words,
            report.metadata.job_file,
            report.metadata.job_words
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_terms(terms: &[String]) -> String {
        if terms.is_empty() {
            "_none_".to_string()
        } else {
            terms.iter().map(|t| format!("`{}`", t)).collect::<Vec<_>>().join(", ")
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.match_result;

        output.push_str("# 📊 Resume Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                file_name(&report.metadata.resume_file),
                file_name(&report.metadata.job_file)
            ));
        }

        output.push_str("## Match Score\n\n");
        output.push_str(&format!(
            "**{:.1} / 10** ({})\n\n{}\n\n",
            report.summary.score,
            report.summary.level.label(),
            report.summary.verdict
        ));

        output.push_str("## Job Facts\n\n");
        output.push_str("| Fact | Value |\n");
        output.push_str("|------|-------|\n");
        output.push_str(&format!("| Experience | {} |\n", display_or_none(&report.facts.experience)));
        output.push_str(&format!("| Location | {} |\n", report.facts.location));
        output.push_str(&format!("| Salary | {} |\n", display_or_none(&report.facts.salary)));
        output.push_str(&format!("| Education | {} |\n", display_or_none(&report.facts.education)));
        output.push_str(&format!("| Skills | {} |\n\n", distinct(&report.facts.skills).join(", ")));

        output.push_str("## Requirements\n\n");
        output.push_str(&format!("- **Found:** {}\n", Self::markdown_terms(&result.found)));
        let partial: Vec<String> = result.partial.iter().map(|p| p.term.clone()).collect();
        output.push_str(&format!("- **Partial:** {}\n", Self::markdown_terms(&partial)));
        output.push_str(&format!("- **Missing:** {}\n\n", Self::markdown_terms(&result.missing)));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Component | Value |\n");
        output.push_str("|-----------|-------|\n");
        output.push_str(&format!("| Requirement terms | {} |\n", result.breakdown.requirement_count));
        output.push_str(&format!("| Base score | {:.2} |\n", result.breakdown.base_score));
        output.push_str(&format!("| Similarity score | {:.2} |\n\n", result.breakdown.similarity_score));

        output.push_str("## Keywords\n\n");
        output.push_str(&format!("- **Matched:** {}\n", Self::markdown_terms(&report.keywords.found)));
        output.push_str(&format!("- **Missing:** {}\n\n", Self::markdown_terms(&report.keywords.missing)));

        output.push_str("## Top Job Terms\n\n");
        for weight in report.word_cloud.iter().take(CLOUD_PREVIEW) {
            output.push_str(&format!("- {} ({:.1})\n", weight.term, weight.weight));
        }

        output.push_str(&format!("\n---\n_Generated by resume-matcher v{}_\n", report.metadata.version));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let (score_class, score_label) = match report.summary.level {
            MatchLevel::Excellent => ("score-excellent", "Excellent"),
            MatchLevel::Strong => ("score-strong", "Strong"),
            MatchLevel::Good => ("score-good", "Good"),
            MatchLevel::NoMatch => ("score-none", "No match"),
        };
        let result = &report.match_result;
        let partial: Vec<String> = result.partial.iter().map(|p| p.term.clone()).collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            processing_time: report.metadata.processing_time_ms,
            score: format!("{:.1}", report.summary.score),
            score_class,
            score_label,
            verdict: report.summary.verdict.clone(),
            experience: display_or_none(&report.facts.experience).to_string(),
            location: report.facts.location.clone(),
            salary: display_or_none(&report.facts.salary).to_string(),
            education: display_or_none(&report.facts.education).to_string(),
            skills: distinct(&report.facts.skills).join(", "),
            found: result.found.clone(),
            has_partial: !partial.is_empty(),
            partial,
            missing: result.missing.clone(),
            keywords_found: report.keywords.found.join(", "),
            keywords_missing: report.keywords.missing.join(", "),
            cloud: report
                .word_cloud
                .iter()
                .take(CLOUD_PREVIEW)
                .map(|w| w.term.clone())
                .collect(),
            version: report.metadata.version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            job_file: report.metadata.job_file.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        formatter.format_report(report)
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

fn display_or_none(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("Not specified")
}

/// First-seen order, duplicates dropped
fn distinct(items: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items.iter().filter(|i| seen.insert(i.as_str())).cloned().collect()
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
