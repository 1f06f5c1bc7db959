use argus::{style, Descriptor, Parser};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut parser = Parser::from_env().pipe(argus::cargo!()).name("greet");
    let handles = parser.add_all([
        Descriptor::help()
            .short('h')
            .long("help")
            .description("Shows this help."),
        Descriptor::version()
            .short('V')
            .long("version")
            .description("Shows the version."),
        Descriptor::value()
            .short('g')
            .long("greeting")
            .description("Word to greet with."),
        Descriptor::normal()
            .short('l')
            .long("loud")
            .description("Shouts. Repeat to shout louder."),
    ]);
    if handles.is_err() {
        eprintln!("Conflicting options.");
        return ExitCode::FAILURE;
    }
    parser.add_positional("names", "People to greet.", Some("<name>...".into()));

    let _ = parser.parse();
    if !parser.status().is_success() {
        eprintln!("{}", parser.error_text());
        eprint!("{}", parser.help_text());
        return ExitCode::FAILURE;
    }
    if parser.was_set('h') > 0 {
        print!("{}", parser.help_text_with(&*style::detect()));
        return ExitCode::SUCCESS;
    }
    if parser.was_set('V') > 0 {
        println!("{}", parser.version_text());
        return ExitCode::SUCCESS;
    }

    let greeting = parser.value("greeting").unwrap_or("Hello");
    let loud = parser.was_set("loud");
    for name in parser.positionals() {
        let line = format!("{greeting}, {name}{}", "!".repeat(loud));
        if loud > 0 {
            println!("{}", line.to_uppercase());
        } else {
            println!("{line}");
        }
    }
    ExitCode::SUCCESS
}
