use std::sync::OnceLock;

use super::input::InputFormat;

#[derive(Debug, PartialEq)]
pub enum Command {
    Send(Option<String>),
    Format(InputFormat),
    Step,
    Clear,
    Help,
    Quit,
    Noop,
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    args: Vec<&'static str>,
    optional_args: Vec<&'static str>,
    parser: Parser,
}

type Parser = Box<dyn Fn(&[&str]) -> Result<Command, String> + Send + Sync>;

static ALL_COMMAND_INFO: OnceLock<[CommandInfo; 6]> = OnceLock::new();
static HELP: OnceLock<String> = OnceLock::new();

fn all_command_info() -> &'static [CommandInfo; 6] {
    ALL_COMMAND_INFO.get_or_init(|| {
        [
            CommandInfo {
                name: "send",
                description: "draws the UART frame of the data (replaces the data field if given)",
                args: vec![],
                optional_args: vec!["data"],
                parser: Box::new(parse_send),
            },
            CommandInfo {
                name: "format",
                description: "selects how the data field is read",
                args: vec!["hex|binary|decimal"],
                optional_args: vec![],
                parser: Box::new(parse_format),
            },
            CommandInfo {
                name: "step",
                description: "reveals the next bit of the frame",
                args: vec![],
                optional_args: vec![],
                parser: Box::new(parse_step),
            },
            CommandInfo {
                name: "clear",
                description: "clears the diagram, explanation and log",
                args: vec![],
                optional_args: vec![],
                parser: Box::new(parse_clear),
            },
            CommandInfo {
                name: "quit",
                description: "closes this application",
                args: vec![],
                optional_args: vec![],
                parser: Box::new(parse_quit),
            },
            CommandInfo {
                name: "help",
                description: "displays this message",
                args: vec![],
                optional_args: vec![],
                parser: Box::new(parse_help),
            },
        ]
    })
}

pub fn interpret(command_string: &str) -> Result<Command, String> {
    let words: Vec<&str> = command_string.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Command::Noop);
    }
    let (command, args) = words.split_at(1);
    for command_info in all_command_info() {
        if command_info.name == command[0] {
            check_usage(command_info, args)?;
            return (command_info.parser)(args);
        }
    }
    Err(format!("unknown command \"{}\"", command[0]))
}

pub fn help() -> &'static str {
    HELP.get_or_init(|| {
        let mut help = "Commands:".to_string();
        for command_info in all_command_info() {
            help += &format!(
                "\n   {}\n       {}",
                command_info.usage(),
                command_info.description
            );
        }
        help
    })
}

fn parse_send(args: &[&str]) -> Result<Command, String> {
    Ok(Command::Send(args.first().map(|s| s.to_string())))
}

fn parse_format(args: &[&str]) -> Result<Command, String> {
    args[0].parse().map(Command::Format)
}

fn parse_step(_args: &[&str]) -> Result<Command, String> {
    Ok(Command::Step)
}

fn parse_clear(_args: &[&str]) -> Result<Command, String> {
    Ok(Command::Clear)
}

fn parse_quit(_args: &[&str]) -> Result<Command, String> {
    Ok(Command::Quit)
}

fn parse_help(_args: &[&str]) -> Result<Command, String> {
    Ok(Command::Help)
}

fn check_usage(command_info: &CommandInfo, args: &[&str]) -> Result<(), String> {
    let min = command_info.args.len();
    let max = min + command_info.optional_args.len();
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{min} to {max}")
        };
        return Err(format!(
            "expected {expected} arguments (usage: {})",
            command_info.usage()
        ));
    }
    Ok(())
}

impl CommandInfo {
    fn usage(&self) -> String {
        let mut usage = self.name.to_string();
        for arg in self.args.iter() {
            usage += &format!(" <{arg}>");
        }
        for arg in self.optional_args.iter() {
            usage += &format!(" [{arg}]");
        }
        usage
    }
}
