use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screener")]
#[command(version)]
#[command(about = "Rank PDF resumes against a job description")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full analysis: scores, attributes, shortlist, chart and CSV export
    Screen(ScreenArgs),

    /// Batch ranking of every PDF in a directory
    Rank(RankArgs),

    /// Print the active skill vocabulary
    Skills {
        /// Config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

/// Where the job description comes from
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct JobDescription {
    /// Job description text
    #[arg(long)]
    pub jd: Option<String>,

    /// File holding the job description
    #[arg(long)]
    pub jd_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    #[command(flatten)]
    pub job: JobDescription,

    /// Resume files (PDF or plain text)
    pub resumes: Vec<PathBuf>,

    /// Also screen every PDF in this directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Minimum years of experience for a shortlist
    #[arg(long)]
    pub min_experience: Option<u32>,

    /// Match score (0-1) a candidate must exceed for a shortlist
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Drop English stop words before vectorizing
    #[arg(long)]
    pub stop_words: bool,

    /// Comma separated skill vocabulary overriding the configured one
    #[arg(long)]
    pub skills: Option<String>,

    /// Config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export the ranking as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Summary chart
    #[arg(long, value_enum, default_value_t = ChartKind::Pie)]
    pub chart: ChartKind,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub job: JobDescription,

    /// Directory of PDF resumes
    #[arg(short, long, default_value = "./resumes/")]
    pub dir: PathBuf,

    /// Drop English stop words before vectorizing
    #[arg(long)]
    pub stop_words: bool,

    /// Config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Bar,
    Pie,
    #[value(name = "none")]
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["screener", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_screen() {
        let cli = Cli::try_parse_from([
            "screener",
            "screen",
            "--jd",
            "Python developer",
            "--min-experience",
            "3",
            "--chart",
            "bar",
            "a.pdf",
            "b.pdf",
        ])
        .unwrap();
        if let Commands::Screen(args) = cli.command {
            assert_eq!(args.job.jd.as_deref(), Some("Python developer"));
            assert_eq!(args.min_experience, Some(3));
            assert_eq!(args.chart, ChartKind::Bar);
            assert_eq!(args.resumes.len(), 2);
        } else {
            panic!("Expected Screen command");
        }
    }

    #[test]
    fn test_cli_rejects_two_job_sources() {
        let cli = Cli::try_parse_from([
            "screener", "screen", "--jd", "x", "--jd-file", "jd.txt", "a.pdf",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_rank_defaults() {
        let cli = Cli::try_parse_from(["screener", "rank"]).unwrap();
        if let Commands::Rank(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("./resumes/"));
            assert!(args.job.jd.is_none());
        } else {
            panic!("Expected Rank command");
        }
    }
}
