use clap::{value_parser, Arg, ArgAction, Command};
use docket_sync::harness::{run_simulator, SimulatorConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("docket-sync")
        .version(docket_sync::VERSION)
        .about("Document-request dashboard sync engine")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("simulate")
                .about("Run a scripted dashboard session against an in-memory service")
                .arg(
                    Arg::new("poll-interval-ms")
                        .long("poll-interval-ms")
                        .default_value("200")
                        .value_parser(value_parser!(u64))
                        .help("Poll period for the live-polling phase"),
                )
                .arg(
                    Arg::new("skip-live-poll")
                        .long("skip-live-poll")
                        .action(ArgAction::SetTrue)
                        .help("Skip the background polling phase"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("simulate", args)) => {
            let poll_interval_ms = *args.get_one::<u64>("poll-interval-ms").unwrap();
            let live_polling = !args.get_flag("skip-live-poll");

            println!("Running Docket simulator...");
            println!("Poll Interval: {poll_interval_ms}ms");
            println!("Live Polling: {live_polling}");
            println!();

            let config = SimulatorConfig {
                poll_interval_ms,
                live_polling,
            };
            let report = run_simulator(config).await;

            println!("{}", report.generate_text());

            std::process::exit(i32::from(!report.passed()));
        }
        _ => {}
    }
}
