use clap::{Arg, ArgAction, Command};

fn common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for error injection (random if omitted)")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - only the final summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for list decoding (0 = auto-detect)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
}

pub fn build_cli() -> Command {
    Command::new("rsdecode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon encoding with unique and list decoding over GF(257)")
        .arg_required_else_help(true)
        .subcommand(common_args(
            Command::new("run")
                .visible_alias("r")
                .about("Encode a message, corrupt it and decode it")
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .help("Message to send (prompted for if omitted)")
                        .value_name("TEXT"),
                )
                .arg(
                    Arg::new("errors")
                        .short('e')
                        .long("errors")
                        .help("Number of symbols to corrupt (and the error budget)")
                        .value_name("E")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("length")
                        .short('n')
                        .long("length")
                        .help("Codeword length (evaluation points 0..N)")
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize)),
                ),
        ))
        .subcommand(common_args(
            Command::new("scenarios")
                .visible_alias("s")
                .about("Run the scripted scenario battery"),
        ))
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_arguments() {
        let matches = build_cli()
            .try_get_matches_from([
                "rsdecode", "run", "-m", "abc", "-e", "3", "-n", "10", "--seed", "7",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "run");
        assert_eq!(sub.get_one::<String>("message").unwrap(), "abc");
        assert_eq!(*sub.get_one::<usize>("errors").unwrap(), 3);
        assert_eq!(*sub.get_one::<usize>("length").unwrap(), 10);
        assert_eq!(*sub.get_one::<u64>("seed").unwrap(), 7);
        assert!(!sub.get_flag("no-parallel"));
    }

    #[test]
    fn test_scenarios_arguments() {
        let matches = build_cli()
            .try_get_matches_from(["rsdecode", "scenarios", "--no-parallel", "-t", "2"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "scenarios");
        assert!(sub.get_flag("no-parallel"));
        assert_eq!(*sub.get_one::<usize>("threads").unwrap(), 2);
    }

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }
}
