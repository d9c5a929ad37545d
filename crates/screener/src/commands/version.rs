pub fn run() -> anyhow::Result<()> {
    println!("screener {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF resume screening against a job description");
    Ok(())
}
