use polish::{Evaluation, Node};
use std::{
    io::{BufRead, BufReader},
    process,
};

/// Everything parsed and evaluated.
const SUCCESS: i32 = 0;
/// There was no input or it couldn't be parsed.
const INVALID_INPUT: i32 = 1;
/// Parts of the expression couldn't be evaluated.
const NOT_CALCULATED: i32 = 2;

fn main() {
    env_logger::init();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            INVALID_INPUT
        },
    };

    process::exit(code);
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let line = if args.is_empty() {
        let stdin = std::io::stdin();
        let mut line = String::new();
        BufReader::new(stdin.lock()).read_line(&mut line)?;
        line
    } else {
        args.join(" ")
    };

    let expression: String =
        line.chars().filter(|c| !c.is_whitespace()).collect();

    if expression.is_empty() {
        return Ok(INVALID_INPUT);
    }

    println!("expression: {}", expression);

    let mut tree: Node = expression.parse()?;

    println!("reverse polish notation: {}", polish::render_postfix(&tree));
    println!("infix notation: {}", polish::render_infix(&tree));
    println!("polish notation: {}", polish::render_prefix(&tree));

    match tree.evaluate() {
        Evaluation::Value(value) => {
            println!("calculated result: {}", polish::number::format_number(value));
            Ok(SUCCESS)
        },
        Evaluation::Partial(partial) => {
            println!("calculated expression: {}", partial);
            Ok(NOT_CALCULATED)
        },
    }
}
