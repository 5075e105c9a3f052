use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use diabetes_risk::{
    Config, Error, FIELDS, InputCollector, N_FEATURES, Session, load_config, render_result,
    resolve_presets, summary_table,
};

fn cli() -> Command {
    let mut cmd = Command::new("diabetes-risk")
        .version(clap::crate_version!())
        .about("\u{1FA7A} Diabetes Risk Checker - enter your health details to analyze your diabetes risk")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .help(
                    "Path to the labeled CSV dataset. \
                     Overrides the data path specified in the configuration file. \
                     The default, data/diabetes.csv, is not bundled and must be supplied.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("trees")
                .short('t')
                .long("trees")
                .help("Number of trees in the forest")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("no_prompt")
                .long("no-prompt")
                .help("Analyze once using flag values and defaults, without prompting")
                .action(ArgAction::SetTrue),
        );

    for field in FIELDS.iter() {
        cmd = cmd.arg(
            Arg::new(field.key)
                .long(field.key)
                .value_name("VALUE")
                .help(format!(
                    "{} [{}-{}, default {}]",
                    field.label,
                    field.format(field.min),
                    field.format(field.max),
                    field.format(field.default)
                ))
                .value_parser(clap::value_parser!(f64)),
        );
    }
    cmd
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("DIABETES_RISK_LOG", "warn"))
        .init();

    if let Err(e) = run(&cli().get_matches()) {
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("data") {
        config.data_path = path.clone();
    }
    if let Some(&n_trees) = matches.get_one::<usize>("trees") {
        config.forest.n_trees = n_trees;
    }
    config.validate()?;

    let mut presets = [None; N_FEATURES];
    for (preset, field) in presets.iter_mut().zip(FIELDS.iter()) {
        *preset = matches.get_one::<f64>(field.key).copied();
    }

    println!("🩺 Diabetes Risk Checker");

    if matches.get_flag("no_prompt") {
        let record = resolve_presets(&presets)?;
        println!("{}", summary_table(&record));
        let session = Session::start(&config)?;
        print!("{}", render_result(&session.assess(&record)));
        return Ok(());
    }

    let mut collector = InputCollector::new(io::stdin().lock(), io::stdout());
    let mut session: Option<Session> = None;

    loop {
        collector.say("🔍 Enter your health information below (blank keeps the default):")?;
        let record = match collector.collect(&presets) {
            Ok(record) => record,
            Err(Error::InputClosed) => break,
            Err(e) => return Err(e.into()),
        };
        collector.say(&summary_table(&record))?;

        match collector.ask("📊 Press Enter to analyze risk (or type 'exit'): ")? {
            Some(answer) if !answer.eq_ignore_ascii_case("exit") => {}
            _ => break,
        }

        // Trained on the first analysis, reused afterwards.
        let active = match session.take() {
            Some(active) => active,
            None => {
                collector.say("🔄 Analyzing your health data...")?;
                Session::start(&config)?
            }
        };
        collector.say(&render_result(&active.assess(&record)))?;
        session = Some(active);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn data_help_mentions_missing_default() {
        let help = cli().render_long_help().to_string();
        assert!(help.contains("data/diabetes.csv"));
        assert!(help.contains("not bundled"));
    }

    #[test]
    fn field_flags_are_parsed() {
        let matches = cli()
            .try_get_matches_from(["diabetes-risk", "--no-prompt", "--glucose", "150", "--bmi", "31.5"])
            .unwrap();
        assert!(matches.get_flag("no_prompt"));
        assert_eq!(matches.get_one::<f64>("glucose"), Some(&150.0));
        assert_eq!(matches.get_one::<f64>("bmi"), Some(&31.5));
        assert_eq!(matches.get_one::<f64>("age"), None);
    }
}
