use screener_core::title_case;
use std::path::Path;

pub fn run(config: Option<&Path>) -> anyhow::Result<()> {
    let config = screener_io::load_config(config)?;
    println!("{}", list_skills(&config.skills));
    Ok(())
}

fn list_skills(vocabulary: &screener_core::SkillVocabulary) -> String {
    vocabulary
        .iter()
        .map(|s| format!("  {}", title_case(s)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::SkillVocabulary;

    #[test]
    fn test_list_skills() {
        let listed = list_skills(&SkillVocabulary::new(["rust", "machine learning"]));
        assert_eq!(listed, "  Rust\n  Machine Learning");
    }
}
