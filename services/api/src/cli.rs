use crate::demo::{run_careers, run_demo, run_score, CareersArgs, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use careerlens::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "careerlens",
    about = "Score personality questionnaires and rank careers from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON answers file for the Big Five or MBTI instrument
    Score(ScoreArgs),
    /// Rank the career catalog against a Holland code
    Careers(CareersArgs),
    /// Run an end-to-end demo with a synthetic respondent
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Careers(args) => run_careers(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerlens::careers::Band;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["careerlens"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn careers_arguments_parse_with_value_parsers() {
        let cli = Cli::try_parse_from([
            "careerlens",
            "careers",
            "--code",
            "sai",
            "--band",
            "bottom",
            "--limit",
            "3",
            "--current-career",
            "Nurse",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Careers(args)) => {
                assert_eq!(args.code.to_string(), "SAI");
                assert_eq!(args.band, Band::Bottom);
                assert_eq!(args.limit, 3);
                assert_eq!(args.current_career.as_deref(), Some("Nurse"));
            }
            other => panic!("expected careers command, got {other:?}"),
        }

        assert!(Cli::try_parse_from(["careerlens", "careers", "--code", "XYZ"]).is_err());
    }
}
