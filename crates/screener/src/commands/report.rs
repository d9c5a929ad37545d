use crate::cli::ChartKind;
use screener_core::{RankedResult, Status, Summary};
use screener_io::ExtractionFailure;

const BAR_WIDTH: usize = 40;

/// Plain decimal without trailing zeros beyond one place (`87.43`, `50.0`)
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

pub fn build_report(
    results: &[RankedResult],
    summary: &Summary,
    failures: &[ExtractionFailure],
    chart: ChartKind,
) -> String {
    let mut sections = vec![
        format!(
            "Screening Dashboard\n===================\n{}",
            build_kpis(summary)
        ),
        format!("\nCandidates\n----------\n{}", build_table(results)),
    ];

    match chart {
        ChartKind::Bar => sections.push(format!("\nMatch %\n-------\n{}", bar_chart(results))),
        ChartKind::Pie => sections.push(format!(
            "\nCandidate Selection Ratio\n-------------------------\n{}",
            pie_chart(summary)
        )),
        ChartKind::Off => {}
    }

    if !failures.is_empty() {
        let lines: Vec<_> = failures
            .iter()
            .map(|f| format!("Warning: could not extract text from {}: {}", f.id, f.reason))
            .collect();
        sections.push(format!("\n{}", lines.join("\n")));
    }

    sections.join("\n")
}

fn build_kpis(summary: &Summary) -> String {
    format!(
        "Total Resumes: {}\nShortlisted: {}\nAvg Match %: {}%",
        summary.total,
        summary.shortlisted,
        format_number(summary.average_match_percent)
    )
}

fn build_table(results: &[RankedResult]) -> String {
    let header = [
        "#",
        "Candidate Name",
        "Match %",
        "Experience",
        "Missing Skills",
        "Email",
        "Phone",
        "Status",
    ];

    let rows: Vec<[String; 8]> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let missing = if r.skills_missing.is_empty() {
                "-".to_string()
            } else {
                r.skills_missing.iter().cloned().collect::<Vec<_>>().join(", ")
            };
            [
                (i + 1).to_string(),
                r.name.clone(),
                format!("{:.2}", r.match_percent()),
                format_number(r.experience_years),
                missing,
                r.email.clone(),
                r.phone.clone(),
                r.status.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(header.to_vec())];
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    lines.push(render(rule.iter().map(String::as_str).collect()));
    for row in &rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

fn bar_chart(results: &[RankedResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);

    results
        .iter()
        .map(|r| {
            let filled = ((r.match_score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
            format!(
                "  {:<nw$}  {:<bw$}  {:.2}%",
                r.name,
                "#".repeat(filled),
                r.match_percent(),
                nw = name_width,
                bw = BAR_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pie_chart(summary: &Summary) -> String {
    [
        (Status::Shortlisted, summary.shortlisted),
        (Status::Rejected, summary.rejected),
    ]
    .iter()
    .map(|(status, count)| {
        let share = if summary.total > 0 {
            *count as f64 / summary.total as f64
        } else {
            0.0
        };
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        format!(
            "  {:<11}  {:<bw$}  {} ({:.1}%)",
            status.as_str(),
            "#".repeat(filled),
            count,
            share * 100.0,
            bw = BAR_WIDTH
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}
