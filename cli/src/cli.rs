use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "surveyrun",
    about = "Run survey-automation scripts in parallel with randomized pacing"
)]
pub struct Args {
    /// Alternate config file (defaults to ./config.toml when present).
    #[arg(long)]
    pub config: Option<String>,

    /// Override the worker pool size.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Run these scripts instead of the configured task list.
    /// Can be specified multiple times.
    #[arg(long = "script", action = clap::ArgAction::Append)]
    pub scripts: Vec<String>,
}
