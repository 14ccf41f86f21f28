use clap::{Arg, ArgAction, Command};

pub fn command() -> Command {
    Command::new("laybuy")
        .about("operate on laybuy orders of a store")
        .subcommand_required(true)
        .arg(
            Arg::new("store_id")
                .long("store_id")
                .help("store whose laybuy settings are used, default scope if omitted")
                .value_parser(clap::value_parser!(u32))
                .global(true)
                .action(ArgAction::Set),
        )
}
