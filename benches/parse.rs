use argus::{Descriptor, Parser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parser(arguments: Vec<String>) -> Parser {
    let mut parser = Parser::new(arguments).name("bench").version("0.0.0");
    for (i, short) in ('a'..='z').enumerate() {
        let descriptor = if i % 4 == 0 {
            Descriptor::value()
        } else {
            Descriptor::normal()
        };
        parser
            .add(
                descriptor
                    .short(short)
                    .long(format!("option-{short}"))
                    .description(format!("Option number {i}.")),
            )
            .unwrap();
    }
    parser.add_positional("input", "Input file.", None);
    parser
}

fn arguments() -> Vec<String> {
    let mut arguments = vec!["bench".to_owned()];
    for short in ('a'..='z').filter(|short| (*short as u32 - 'a' as u32) % 4 != 0) {
        arguments.push(format!("-{short}{short}"));
        arguments.push(format!("--option-{short}"));
    }
    for short in ['a', 'e', 'i', 'm'] {
        arguments.push(format!("--option-{short}=value"));
        arguments.push(format!("-{short}"));
        arguments.push("value".to_owned());
    }
    arguments.extend((0..16).map(|i| format!("file-{i}.txt")));
    arguments
}

fn parse(criterion: &mut Criterion) {
    let mut parser = parser(arguments());
    criterion.bench_function("parse", |bencher| {
        bencher.iter(|| black_box(parser.parse()).unwrap())
    });
}

fn help(criterion: &mut Criterion) {
    let parser = parser(arguments());
    criterion.bench_function("help", |bencher| {
        bencher.iter(|| black_box(parser.help_text()))
    });
}

criterion_group!(benches, parse, help);
criterion_main!(benches);
