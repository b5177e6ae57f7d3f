use std::collections::BTreeSet;
use std::path::PathBuf;

use admissions_pipeline::cohort::{
    cohort_summary, score_applicants, score_summary, select_top, selection_rows, ApplicantRowView,
    CohortFilter, CohortSummary, IncompleteApplicant, NumericSummary, ProgramSelector,
    ScoredApplicant, ScoringOutcome, ScoringWeights, ValueCount,
};
use admissions_pipeline::config::AppConfig;
use admissions_pipeline::error::AppError;
use admissions_pipeline::roster::RosterImporter;
use admissions_pipeline::telemetry;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Postgraduate Admissions Analyzer",
    about = "Summarize and rank postgraduate applicants from a roster export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe a roster: headcounts, frequency tables, numeric spreads
    Summary(SummaryArgs),
    /// Score a cohort and select the top applicants
    Rank(RankArgs),
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Roster export to read (CSV)
    #[arg(long)]
    roster: PathBuf,
    /// Restrict the summary to one postgraduate program
    #[arg(long)]
    program: Option<String>,
    /// Override the configured home institution
    #[arg(long)]
    home_institution: Option<String>,
    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RankArgs {
    /// Roster export to read (CSV)
    #[arg(long)]
    roster: PathBuf,
    /// Restrict the cohort to one postgraduate program
    #[arg(long)]
    program: Option<String>,
    /// Bachelor major to keep (repeatable); all majors when omitted
    #[arg(long = "major")]
    majors: Vec<String>,
    /// University of graduation to keep (repeatable); all when omitted
    #[arg(long = "university")]
    universities: Vec<String>,
    /// Weight on the normalized GPA term
    #[arg(long, default_value_t = 0.5)]
    gpa_rate: f64,
    /// Weight on the aptitude score term
    #[arg(long, default_value_t = 0.5)]
    aptitude_rate: f64,
    /// Weight on the tests-taken term
    #[arg(long, default_value_t = 0.0)]
    tests_rate: f64,
    /// Weight on the home-institution bonus term
    #[arg(long, default_value_t = 0.0)]
    graduate_from_rate: f64,
    /// How many applicants to select
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Override the configured home institution
    #[arg(long)]
    home_institution: Option<String>,
    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RankReport {
    roster_total: usize,
    cohort_size: usize,
    weights: ScoringWeights,
    selected: Vec<ApplicantRowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_scores: Option<NumericSummary>,
    skipped: Vec<SkippedRow>,
}

#[derive(Debug, Serialize)]
struct SkippedRow {
    name: String,
    national_id: String,
    missing: Vec<&'static str>,
}

impl SkippedRow {
    fn from_incomplete(entry: &IncompleteApplicant) -> Self {
        Self {
            name: entry.applicant.name.clone(),
            national_id: entry.applicant.national_id.clone(),
            missing: entry.missing.iter().map(|input| input.label()).collect(),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Summary(args) => run_summary(args, &config),
        Command::Rank(args) => run_rank(args, &config),
    }
}

fn run_summary(args: SummaryArgs, config: &AppConfig) -> Result<(), AppError> {
    let home_institution = args
        .home_institution
        .as_deref()
        .unwrap_or(&config.home_institution);

    let records = RosterImporter::from_path(&args.roster, home_institution)?;
    info!(total = records.len(), "roster imported");

    let cohort = program_filter(args.program.clone()).apply(&records);
    info!(cohort = cohort.len(), "program filter applied");

    let summary = cohort_summary(&cohort);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_summary(&summary, args.program.as_deref());
    }

    Ok(())
}

fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let home_institution = args
        .home_institution
        .as_deref()
        .unwrap_or(&config.home_institution);

    let records = RosterImporter::from_path(&args.roster, home_institution)?;
    info!(total = records.len(), "roster imported");

    let filter = CohortFilter {
        program: args
            .program
            .map(ProgramSelector::Only)
            .unwrap_or_default(),
        majors: allow_list(args.majors),
        universities: allow_list(args.universities),
    };
    let cohort = filter.apply(&records);
    info!(cohort = cohort.len(), "filters applied");

    let weights = ScoringWeights {
        gpa_rate: args.gpa_rate,
        aptitude_rate: args.aptitude_rate,
        tests_rate: args.tests_rate,
        graduate_from_rate: args.graduate_from_rate,
    };

    let outcome = score_applicants(&cohort, &weights)?;
    info!(
        scored = outcome.scored.len(),
        skipped = outcome.incomplete.len(),
        "cohort scored"
    );

    let selected = select_top(&outcome.scored, args.top);

    if args.json {
        let report = RankReport {
            roster_total: records.len(),
            cohort_size: cohort.len(),
            weights,
            selected: selection_rows(&selected),
            selected_scores: score_summary(&selected),
            skipped: outcome
                .incomplete
                .iter()
                .map(SkippedRow::from_incomplete)
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_ranking(records.len(), cohort.len(), &weights, &selected, &outcome);
    }

    Ok(())
}

fn program_filter(program: Option<String>) -> CohortFilter {
    match program {
        Some(program) => CohortFilter::for_program(program),
        None => CohortFilter::default(),
    }
}

fn allow_list(values: Vec<String>) -> Option<BTreeSet<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.into_iter().collect())
    }
}

fn render_summary(summary: &CohortSummary, program: Option<&str>) {
    match program {
        Some(program) => println!("Cohort summary for {program}"),
        None => println!("Cohort summary"),
    }
    println!("Applicants: {}", summary.total);

    render_counts("Gender", &summary.gender_counts);
    render_counts("Top programs", &summary.top_programs);
    render_counts("Top bachelor majors", &summary.top_majors);
    render_counts("Top universities", &summary.top_universities);

    println!();
    render_numeric("Normalized GPA", summary.gpa.as_ref());
    render_numeric("Aptitude score", summary.aptitude.as_ref());
}

fn render_counts(heading: &str, counts: &[ValueCount]) {
    println!("\n{heading}");
    if counts.is_empty() {
        println!("- none recorded");
        return;
    }
    for entry in counts {
        println!("- {}: {}", entry.value, entry.count);
    }
}

fn render_numeric(heading: &str, summary: Option<&NumericSummary>) {
    match summary {
        Some(stats) => println!(
            "{}: count {} | mean {:.2} | std {:.2} | min {:.2} | q1 {:.2} | median {:.2} | q3 {:.2} | max {:.2}",
            heading,
            stats.count,
            stats.mean,
            stats.std_dev,
            stats.min,
            stats.q1,
            stats.median,
            stats.q3,
            stats.max
        ),
        None => println!("{heading}: no numeric values"),
    }
}

fn render_ranking(
    roster_total: usize,
    cohort_size: usize,
    weights: &ScoringWeights,
    selected: &[ScoredApplicant],
    outcome: &ScoringOutcome,
) {
    println!("Admission ranking");
    println!("Roster rows: {roster_total}, cohort after filters: {cohort_size}");
    println!(
        "Weights: GPA {:.2}, aptitude {:.2}, tests {:.2}, graduate-from {:.2}",
        weights.gpa_rate, weights.aptitude_rate, weights.tests_rate, weights.graduate_from_rate
    );

    if selected.is_empty() {
        println!("\nNo applicants could be scored with the current filters.");
    } else {
        println!(
            "\nTop {} of {} scored applicants",
            selected.len(),
            outcome.scored.len()
        );
        for (position, entry) in selected.iter().enumerate() {
            let record = &entry.applicant;
            println!(
                "{}. {} ({}) score {:.2} | GPA {} | aptitude {} | {}, {}",
                position + 1,
                record.name,
                record.national_id,
                entry.score,
                format_optional(record.gpa_normalized),
                format_optional(record.aptitude_score),
                record.bachelor_major,
                record.graduated_from
            );
        }
        println!();
        render_numeric("Selected scores", score_summary(selected).as_ref());
    }

    if outcome.incomplete.is_empty() {
        println!("\nSkipped for missing score inputs: none");
    } else {
        println!("\nSkipped for missing score inputs");
        for entry in &outcome.incomplete {
            let labels: Vec<&str> = entry.missing.iter().map(|input| input.label()).collect();
            println!(
                "- {} ({}): {}",
                entry.applicant.name,
                entry.applicant.national_id,
                labels.join(", ")
            );
        }
    }
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}
