//! Output formatters: console, JSON, Markdown and HTML renderings of a score report

use crate::config::OutputFormat;
use crate::error::{AtsScorerError, Result};
use crate::output::report::*;
use crate::processing::scorer::{Coverage, KeywordCoverage};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
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

/// Report generator that dispatches to the formatter for a format
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
    <title>ATS Resume Score Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 4px 12px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { border-collapse: collapse; width: 100%; }
        td, th { padding: 8px; border-bottom: 1px solid #e9ecef; text-align: left; }
        .missing { color: #dc3545; }
        .found { color: #28a745; }
        .metadata {
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Resume Score</h1>
            <p>Generated {{ generated_at }}</p>
            <h2>{{ overall_score }}%<span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
            <p>{{ verdict }}</p>
        </div>

        <div class="section">
            <h2>Score Breakdown</h2>
            <table>
                <tr><th>Feature</th><th>Score</th><th></th></tr>
                {% for row in feature_rows %}
                <tr><td>{{ row.label }}</td><td>{{ row.score }}%</td><td><span class="score-badge {{ row.class }}">{{ row.rating }}</span></td></tr>
                {% endfor %}
                {% if has_similarity %}
                <tr><td>Job Description Match</td><td>{{ similarity }}%</td><td></td></tr>
                {% endif %}
            </table>
        </div>

        <div class="section">
            <h2>Suggestions</h2>
            {% if suggestions.is_empty() %}
            <p>No suggestions. This resume meets every threshold.</p>
            {% else %}
            <ul>
                {% for suggestion in suggestions %}
                <li>{{ suggestion }}</li>
                {% endfor %}
            </ul>
            {% endif %}
        </div>

        <div class="section">
            <h2>Profile Summary</h2>
            <p>{{ profile_summary }}</p>
        </div>

        {% if !coverage_rows.is_empty() %}
        <div class="section">
            <h2>Keyword Coverage</h2>
            <table>
                <tr><th>Category</th><th>Found</th><th>Missing</th></tr>
                {% for row in coverage_rows %}
                <tr><td>{{ row.label }}</td><td class="found">{{ row.found }}</td><td class="missing">{{ row.missing }}</td></tr>
                {% endfor %}
            </table>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by ats-scorer v{{ version }}</strong> in {{ processing_time }}ms</p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Job:</strong> {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    overall_score: u8,
    score_class: &'static str,
    score_label: &'static str,
    verdict: String,
    feature_rows: Vec<HtmlFeatureRow>,
    has_similarity: bool,
    similarity: u8,
    suggestions: Vec<String>,
    profile_summary: String,
    coverage_rows: Vec<HtmlCoverageRow>,
    version: String,
    resume_file: String,
    job_source: String,
}

struct HtmlFeatureRow {
    label: &'static str,
    score: u8,
    class: &'static str,
    rating: &'static str,
}

struct HtmlCoverageRow {
    label: &'static str,
    found: String,
    missing: String,
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
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let rating = ScoreRating::from_score(score);
        let color = match rating {
            ScoreRating::Excellent => Color::Green,
            ScoreRating::VeryGood => Color::BrightGreen,
            ScoreRating::Good => Color::Yellow,
            ScoreRating::Fair => Color::BrightYellow,
            ScoreRating::BelowAverage => Color::Red,
            ScoreRating::Poor => Color::BrightRed,
        };
        let badge = rating.label().to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_coverage(&self, label: &str, coverage: &Coverage) -> String {
        let mut output = format!("{}:\n", label);
        if !coverage.found.is_empty() {
            output.push_str(&format!(
                "  ✓ {}\n",
                self.colorize(&coverage.found.join(", "), Color::Green)
            ));
        }
        if !coverage.missing.is_empty() {
            output.push_str(&format!(
                "  ✗ {}\n",
                self.colorize(&coverage.missing.join(", "), Color::Red)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS RESUME SCORE", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "ATS Score: {}% {}\n",
            report.summary.overall_score,
            self.format_score_badge(report.summary.overall_score)
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));
        match report.similarity_percentage() {
            Some(similarity) => output.push_str(&format!("🎯 Job description match: {}%\n", similarity)),
            None => output.push_str("🎯 Job description match: not scored\n"),
        }

        output.push_str(&self.format_header("Score Breakdown", 3));
        for (label, score) in report.result.features.labeled() {
            output.push_str(&format!(
                "  {:<12} {:>3}% {}\n",
                label,
                score,
                self.format_score_badge(score)
            ));
        }

        if !report.summary.strengths.is_empty() {
            output.push_str(&self.format_header("✅ Strengths", 3));
            for strength in &report.summary.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        output.push_str(&self.format_header("💡 Suggestions", 2));
        if report.result.suggestions.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("No suggestions. This resume meets every threshold.", Color::Green)
            ));
        } else {
            for (i, suggestion) in report.result.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📝 Profile Summary", 2));
            output.push_str(&format!("  {}\n", report.result.profile_summary));

            if let Some(coverage) = &report.coverage {
                output.push_str(&self.format_header("🔍 Keyword Coverage", 2));
                output.push_str(&self.format_coverage("Sections", &coverage.sections));
                output.push_str(&self.format_coverage("Soft skills", &coverage.soft_skills));
                output.push_str(&self.format_coverage("Hard skills", &coverage.hard_skills));
                if !coverage.impact_matches.is_empty() {
                    output.push_str(&format!(
                        "Quantified achievements: {}\n",
                        coverage.impact_matches.join(", ")
                    ));
                }
                if !coverage.style_elements.is_empty() {
                    output.push_str(&format!(
                        "Formatting elements: {}\n",
                        coverage.style_elements.join(", ")
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\nResume: {} | Job: {}\n",
            report.metadata.resume_file,
            report.metadata.job_source.describe()
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
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
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

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn score_class(score: u8) -> &'static str {
        match ScoreRating::from_score(score) {
            ScoreRating::Excellent => "score-excellent",
            ScoreRating::VeryGood | ScoreRating::Good => "score-good",
            ScoreRating::Fair => "score-fair",
            ScoreRating::BelowAverage | ScoreRating::Poor => "score-poor",
        }
    }

    fn create_template_data(&self, report: &ScoreReport) -> HtmlTemplate {
        let feature_rows = report
            .result
            .features
            .labeled()
            .iter()
            .map(|&(label, score)| HtmlFeatureRow {
                label,
                score,
                class: Self::score_class(score),
                rating: ScoreRating::from_score(score).label(),
            })
            .collect();

        let coverage_rows = report
            .coverage
            .as_ref()
            .map(coverage_table)
            .unwrap_or_default()
            .into_iter()
            .map(|(label, coverage)| HtmlCoverageRow {
                label,
                found: coverage.found.join(", "),
                missing: coverage.missing.join(", "),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            overall_score: report.summary.overall_score,
            score_class: Self::score_class(report.summary.overall_score),
            score_label: report.summary.rating.label(),
            verdict: report.summary.verdict.clone(),
            feature_rows,
            has_similarity: report.similarity_percentage().is_some(),
            similarity: report.similarity_percentage().unwrap_or(0),
            suggestions: report.result.suggestions.clone(),
            profile_summary: report.result.profile_summary.clone(),
            coverage_rows,
            version: report.metadata.scorer_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            job_source: report.metadata.job_source.describe(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AtsScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match ScoreRating::from_score(score) {
            ScoreRating::Excellent => "🟢 Excellent",
            ScoreRating::VeryGood => "🟡 Very Good",
            ScoreRating::Good => "🟠 Good",
            ScoreRating::Fair => "🔴 Fair",
            ScoreRating::BelowAverage => "🔴 Below Average",
            ScoreRating::Poor => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 ATS Resume Score Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());

            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                resume_name,
                report.metadata.job_source.describe()
            ));
        }

        output.push_str("## Overall\n\n");
        output.push_str(&format!(
            "**ATS Score:** {}% {}\n\n",
            report.summary.overall_score,
            Self::markdown_score_badge(report.summary.overall_score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));
        if let Some(similarity) = report.similarity_percentage() {
            output.push_str(&format!("**Job Description Match:** {}%\n\n", similarity));
        }

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Feature | Score | Rating |\n");
        output.push_str("|---------|-------|--------|\n");
        for (label, score) in report.result.features.labeled() {
            output.push_str(&format!(
                "| {} | {}% | {} |\n",
                label,
                score,
                Self::markdown_score_badge(score)
            ));
        }
        output.push('\n');

        output.push_str("## 💡 Suggestions\n\n");
        if report.result.suggestions.is_empty() {
            output.push_str("No suggestions. This resume meets every threshold.\n\n");
        } else {
            for suggestion in &report.result.suggestions {
                output.push_str(&format!("- {}\n", suggestion));
            }
            output.push('\n');
        }

        output.push_str("## 📝 Profile Summary\n\n");
        output.push_str(&format!("> {}\n\n", report.result.profile_summary));

        if let Some(coverage) = &report.coverage {
            output.push_str("## 🔍 Keyword Coverage\n\n");
            output.push_str("| Category | Found | Missing |\n");
            output.push_str("|----------|-------|---------|\n");
            for (label, entry) in coverage_table(coverage) {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    label,
                    code_list(&entry.found),
                    code_list(&entry.missing)
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "---\n*Generated by ats-scorer v{}*\n",
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn coverage_table(coverage: &KeywordCoverage) -> Vec<(&'static str, &Coverage)> {
    vec![
        ("Sections", &coverage.sections),
        ("Soft Skills", &coverage.soft_skills),
        ("Hard Skills", &coverage.hard_skills),
    ]
}

fn code_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        format!("`{}`", items.join("`, `"))
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

    pub fn generate_report(&self, report: &ScoreReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
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

/// Default report file name derived from the resume file name
pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats_score{}.{}", base_name, timestamp_suffix, extension)
}
