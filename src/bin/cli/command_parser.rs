use clap::{value_parser, Arg, ArgAction, Command};

fn id_arg() -> Arg {
    Arg::new("id")
        .help("Server id of the book")
        .required(true)
        .value_parser(value_parser!(u64))
}

pub fn arg_parser() -> Command {
    Command::new("bookform")
        .about("Manage the book catalog of a REST backend")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List all books"))
        .subcommand(Command::new("add").about("Fill in the form and register a new book"))
        .subcommand(
            Command::new("edit")
                .about("Load a book into the form and update it")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Delete a book")
                .arg(id_arg())
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Don't ask for confirmation")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("config").about("Print the default configuration"))
}

pub fn arg_parser_cli() -> Command {
    arg_parser().subcommand(Command::new("repl").about("Launch a read eval print loop"))
}

pub fn arg_parser_repl() -> Command {
    arg_parser()
        .subcommand(Command::new("submit").about("Reopen the form with the current values"))
        .subcommand(Command::new("cancel").about("Stop editing and clear the form"))
        .subcommand(Command::new("exit").about("Leave the repl"))
}

pub fn generate_completions() -> Vec<String> {
    let cmd = arg_parser_repl();
    fn add_command(parent_fn_name: &str, cmd: &Command, subcmds: &mut Vec<String>) {
        let fn_name = format!("{parent_fn_name} {}", cmd.get_name())
            .trim()
            .to_string();
        subcmds.push(fn_name.clone());
        for subcmd in cmd.get_subcommands() {
            add_command(&fn_name, subcmd, subcmds);
        }
    }
    let mut subcmds = vec![];
    for subcmd in cmd.get_subcommands() {
        add_command("", subcmd, &mut subcmds);
    }
    subcmds.sort();
    subcmds
}
