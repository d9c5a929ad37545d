use screener_core::Document;

pub const JOB_DESCRIPTION: &str =
    "Backend engineer: Python, SQL and AWS. Docker is a plus. 3+ years experience.";

pub fn sample_resumes() -> Vec<Document> {
    vec![
        Document::new(
            "asha.pdf",
            "Asha Rao | asha.rao@example.com | +91 98765 43210\n\
             Backend engineer, 5 years experience with Python, SQL, AWS and Docker.",
        ),
        Document::new(
            "ben.pdf",
            "Ben Ortiz ben@example.org\nFrontend developer: React, JavaScript, CSS. 2 yrs.",
        ),
        Document::new("scan.pdf", ""),
        Document::new(
            "chen.pdf",
            "Chen Li - Python and SQL analyst, 1.5 years of experience.",
        ),
    ]
}

#[allow(dead_code)]
pub fn write_text_resumes(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    sample_resumes()
        .into_iter()
        .map(|doc| {
            let path = dir.join(doc.id.replace(".pdf", ".txt"));
            std::fs::write(&path, doc.text).unwrap();
            path
        })
        .collect()
}

/// One-page PDF with a Helvetica text line, or a page without a content
/// stream when `line` is `None`
#[allow(dead_code)]
pub fn build_pdf(line: Option<&str>) -> Vec<u8> {
    let page = if line.is_some() {
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
    } else {
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>"
    };

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        page.to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    if let Some(line) = line {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", line);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    xref.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    ));
    pdf.extend_from_slice(xref.as_bytes());
    pdf
}
