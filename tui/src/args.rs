//! Parsing command-line arguments.

use crate::file;
use clap::{
    crate_authors, crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction, ArgMatches, Command, Error,
};
use log::Level;
use rautomata_lib::{AutomatonKind, Boundary, Config, Coord, FireConfig, Init, Pattern, Simulate};
use std::path::PathBuf;

#[cfg(feature = "tui")]
use std::time::Duration;

/// Number of generations printed with `--no-tui` when `--steps` is not given.
const DEFAULT_STEPS: u64 = 50;

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: Box<dyn Simulate>,
    /// Whether the automaton is one-dimensional.
    pub(crate) one_dimensional: bool,
    pub(crate) steps: Option<u64>,
    pub(crate) output: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) delay: Duration,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let matches = command().try_get_matches()?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => file::read_config(path)?,
            None => Config::default(),
        };
        let from_file = matches.contains_id("CONFIG");

        if let Some(automaton) = matches.get_one::<String>("AUTOMATON") {
            config.automaton = match automaton.as_str() {
                "elementary" | "e" => AutomatonKind::Elementary { rules: vec![30] },
                "fire" | "f" => AutomatonKind::Fire(FireConfig::default()),
                _ => AutomatonKind::default(),
            };
        }
        let one_dimensional = matches!(config.automaton, AutomatonKind::Elementary { .. });

        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
            config.height = match matches.get_one::<i32>("HEIGHT") {
                Some(&height) => height,
                None if one_dimensional => 1,
                None => width,
            };
        }

        if let Some(rules) = matches.get_many::<String>("RULE") {
            set_rules(&mut config.automaton, rules.cloned().collect())?;
        }
        set_fire(&mut config.automaton, &matches)?;

        if let Some(&boundary) = matches.get_one::<Boundary>("BOUNDARY") {
            config.boundary = Some(boundary);
        }

        let density = matches.get_one::<f64>("DENSITY").copied();
        if let Some(path) = matches.get_one::<PathBuf>("MAP") {
            config.init = Init::Plaintext(file::read_map(path)?);
        } else if let Some(init) = matches.get_one::<String>("INIT") {
            config.init = match init.as_str() {
                "glider" => Init::Pattern(Pattern::Glider),
                "toad" => Init::Pattern(Pattern::Toad),
                "block" => Init::Pattern(Pattern::Block),
                "center" => Init::Pattern(Pattern::Center),
                "random" => Init::Random {
                    probability: density.unwrap_or(0.5),
                },
                _ => Init::Empty,
            };
        } else if let Some(probability) = density {
            config.init = Init::Random { probability };
        } else if !from_file {
            config.init = match config.automaton {
                AutomatonKind::Elementary { .. } => Init::Pattern(Pattern::Center),
                AutomatonKind::Life { .. } => Init::Pattern(Pattern::Glider),
                AutomatonKind::Fire(_) => Init::Random { probability: 0.8 },
            };
        }

        if let Some(&steps_per_rule) = matches.get_one::<u64>("STEPSPERRULE") {
            config.steps_per_rule = steps_per_rule;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }

        let level = match matches.get_count("VERBOSE") {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        };
        if let Err(e) = simple_logger::init_with_level(level) {
            eprintln!("{}", e);
        }

        let world = config
            .world()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        Ok(Args {
            world,
            one_dimensional,
            steps: matches.get_one::<u64>("STEPS").copied(),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
            #[cfg(feature = "tui")]
            delay: Duration::from_millis(matches.get_one::<u64>("DELAY").copied().unwrap_or(100)),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }

    /// Number of generations to compute without the TUI.
    pub(crate) fn steps_or_default(&self) -> u64 {
        self.steps.unwrap_or(DEFAULT_STEPS)
    }
}

fn set_rules(automaton: &mut AutomatonKind, rules: Vec<String>) -> ClapResult<()> {
    match automaton {
        AutomatonKind::Elementary { rules: numbers } => {
            *numbers = rules
                .iter()
                .map(|r| {
                    r.parse::<i64>().map_err(|_| {
                        Error::raw(
                            ErrorKind::InvalidValue,
                            format!("invalid rule number {:?}\n", r),
                        )
                    })
                })
                .collect::<ClapResult<Vec<i64>>>()?;
        }
        AutomatonKind::Life { rules: ids } => *ids = rules,
        AutomatonKind::Fire(_) => {
            return Err(Error::raw(
                ErrorKind::ArgumentConflict,
                "the forest fire does not take --rule\n",
            ))
        }
    }
    Ok(())
}

fn set_fire(automaton: &mut AutomatonKind, matches: &ArgMatches) -> ClapResult<()> {
    let given = ["SPREAD", "HUMIDITY", "WIND", "WEATHER", "IGNITE"]
        .iter()
        .any(|id| matches.contains_id(id));
    match automaton {
        AutomatonKind::Fire(fire) => {
            if let Some(&spread) = matches.get_one::<f64>("SPREAD") {
                fire.spread_probability = spread;
            }
            if let Some(&humidity) = matches.get_one::<f64>("HUMIDITY") {
                fire.humidity = humidity;
            }
            if let Some(&wind) = matches.get_one::<Coord>("WIND") {
                fire.wind = wind;
            }
            if let Some(&interval) = matches.get_one::<u64>("WEATHER") {
                fire.weather_interval = Some(interval);
            }
            if let Some(&ignition) = matches.get_one::<Coord>("IGNITE") {
                fire.ignition = Some(ignition);
            }
            Ok(())
        }
        _ if given => Err(Error::raw(
            ErrorKind::ArgumentConflict,
            "--spread, --humidity, --wind, --weather and --ignite only apply to the forest fire\n",
        )),
        _ => Ok(()),
    }
}

/// Parses a pair of integers such as `1,-1`.
fn parse_pair(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| String::from("expected two integers separated by a comma"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("{}", e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("{}", e))?;
    Ok((x, y))
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Runs synchronous cellular automata on a fixed grid.\n\
             \n\
             Three automata are available:\n\
             * elementary: one-dimensional rules given by their numbers 0..=255;\n\
             * life: Life-like rules, by id (40, 63, 26, 190) or rule string (B3/S23);\n\
             * fire: a stochastic forest fire.\n\
             \n\
             Cells are displayed as:\n\
             * `.` for dead cells and bare ground;\n\
             * `o` for living cells;\n\
             * `T` for trees, `*` for fire, `x` for burnt trees and `~` for water.\n",
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the grid")
                .required_unless_present("CONFIG")
                .index(1)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the grid")
                .long_help(
                    "Height of the grid\n\
                     Defaults to 1 for elementary rules, and to the width otherwise.\n",
                )
                .index(2)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("AUTOMATON")
                .help("The cellular automaton")
                .short('a')
                .long("automaton")
                .value_parser(["elementary", "life", "fire", "e", "l", "f"]),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton")
                .long_help(
                    "Rule of the cellular automaton\n\
                     A rule number for elementary automata, a rule id or a rule string \
                     for Life-like automata.\n\
                     When given several times, the rules run one after another, \
                     each for --steps-per-rule generations.\n",
                )
                .short('r')
                .long("rule")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("Boundary condition")
                .long_help(
                    "Boundary condition\n\
                     Elementary: fixed (default), periodic, absorptive.\n\
                     Life: periodic (default), reflecting.\n\
                     Fire: absorptive (default), periodic.\n",
                )
                .short('b')
                .long("boundary")
                .value_parser(|s: &str| s.parse::<Boundary>()),
        )
        .arg(
            Arg::new("INIT")
                .help("Initial content of the grid")
                .short('i')
                .long("init")
                .value_parser(["glider", "toad", "block", "center", "random", "empty"])
                .conflicts_with("MAP"),
        )
        .arg(
            Arg::new("DENSITY")
                .help("Probability of a live cell in a random grid")
                .short('d')
                .long("density")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("MAP")
                .help("Reads the initial grid from a plaintext file")
                .long("map")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SPREAD")
                .help("Probability that fire spreads to a neighboring tree")
                .long("spread")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("HUMIDITY")
                .help("Humidity between 0 and 1, lowering the spread probability")
                .long("humidity")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("WIND")
                .help("Wind direction DX,DY, each in -1..=1")
                .long("wind")
                .allow_hyphen_values(true)
                .value_parser(parse_pair),
        )
        .arg(
            Arg::new("WEATHER")
                .help("Draws new humidity and wind every N generations")
                .long("weather")
                .value_name("N")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("IGNITE")
                .help("The cell X,Y set on fire first")
                .long("ignite")
                .value_parser(parse_pair),
        )
        .arg(
            Arg::new("STEPSPERRULE")
                .help("Number of generations each rule runs for")
                .long("steps-per-rule")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random source")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("STEPS")
                .help("Number of generations to compute")
                .short('n')
                .long("steps")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Appends every generation to a file")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more, can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    #[cfg(feature = "tui")]
    let command = command
        .arg(
            Arg::new("NOTUI")
                .help("Prints the generations, without entering the TUI")
                .long("no-tui")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("DELAY")
                .help("Milliseconds between two generations in the TUI")
                .long("delay")
                .value_parser(value_parser!(u64))
                .conflicts_with("NOTUI"),
        );

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        assert_eq!(parse_pair("1,-1"), Ok((1, -1)));
        assert_eq!(parse_pair(" 0 , 2"), Ok((0, 2)));
        assert!(parse_pair("1").is_err());
        assert!(parse_pair("a,b").is_err());
    }

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }
}
