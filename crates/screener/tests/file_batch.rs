mod common;

use common::{build_pdf, write_text_resumes, JOB_DESCRIPTION};
use screener_core::{Config, Document};
use screener_index::{rank, screen_batch, RankOptions};
use screener_io::{discover_pdfs, export_csv, load_documents};

#[test]
fn test_files_to_csv_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = write_text_resumes(dir.path());
    let broken = dir.path().join("corrupt.pdf");
    std::fs::write(&broken, b"%PDF-1.4 truncated").unwrap();
    paths.push(broken);

    let batch = load_documents(&paths);
    assert_eq!(batch.documents.len(), 5);
    // scan.txt is empty but readable; only the corrupt PDF fails
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].id, "corrupt.pdf");

    let query = Document::new("jd", JOB_DESCRIPTION);
    let results = screen_batch(&query, batch.documents, &Config::default()).unwrap();

    let csv_path = dir.path().join("report").join("shortlisted_candidates.csv");
    export_csv(&csv_path, &results).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Candidate Name,Match %,"));
    assert!(lines[1].starts_with("asha.txt,"));
    assert!(lines.iter().any(|l| l.starts_with("corrupt.pdf,0.0,")));
}

#[test]
fn test_directory_with_only_text_has_no_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    write_text_resumes(dir.path());
    assert!(discover_pdfs(dir.path()).unwrap().is_empty());
}

#[test]
fn test_pdf_text_is_extracted_and_ranked() {
    let dir = tempfile::tempdir().unwrap();
    let resume = dir.path().join("dana.pdf");
    let other = dir.path().join("eli.pdf");
    std::fs::write(&resume, build_pdf(Some("Python developer with SQL, 4 years experience"))).unwrap();
    std::fs::write(&other, build_pdf(Some("Pastry chef and baker"))).unwrap();

    let pdfs = discover_pdfs(dir.path()).unwrap();
    let batch = load_documents(&pdfs);
    assert!(batch.failures.is_empty());
    assert_eq!(batch.documents[0].id, "dana.pdf");
    assert!(batch.documents[0]
        .text
        .contains("Python developer with SQL, 4 years experience"));

    let query = Document::new("jd", "Python developer who knows SQL");
    let scores = rank(&query, &batch.documents, &RankOptions::default());
    assert!(scores[0] > 0.3);
    assert_eq!(scores[1], 0.0);
}

#[test]
fn test_pdf_without_content_degrades_to_empty_text() {
    let dir = tempfile::tempdir().unwrap();
    let blank = dir.path().join("scan.pdf");
    let good = dir.path().join("text.pdf");
    std::fs::write(&blank, build_pdf(None)).unwrap();
    std::fs::write(&good, build_pdf(Some("Rust engineer"))).unwrap();

    let batch = load_documents(&[blank, good]);
    assert_eq!(batch.documents.len(), 2);
    assert!(batch.documents[0].text.trim().is_empty());
    assert_eq!(batch.failures.len(), 1);
    assert_eq!(batch.failures[0].id, "scan.pdf");
    assert!(batch.documents[1].text.contains("Rust engineer"));
}
