use clap::{Parser, Subcommand};
use tracing::info;
use disha::config::AppConfig;
use disha::error::AppError;
use disha::telemetry;

use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::session::{run_quiz, QuizArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Disha Career Advisor",
    about = "Run the adaptive aptitude quiz and course recommendations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted end-to-end demo: quiz, recommendation, dashboard (default command)
    Demo(DemoArgs),
    /// Take the adaptive quiz interactively
    Quiz(QuizArgs),
    /// Produce a recommendation from a stored answers file
    Recommend(RecommendArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "starting disha cli");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Quiz(args) => run_quiz(args, &config),
        Command::Recommend(args) => run_recommend(args, &config),
    }
}
