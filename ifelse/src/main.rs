use std::cmp::Ordering;
use std::io::{self, Write};
use std::process;

const NUMBER: i32 = 10;
const THRESHOLD: i32 = 5;

fn describe(number: i32) -> String {
    let relation = match number.cmp(&THRESHOLD) {
        Ordering::Greater => "greater than",
        Ordering::Less => "less than",
        Ordering::Equal => "equal to",
    };
    format!("Number is {} {}", relation, THRESHOLD)
}

fn run(out: &mut impl Write, number: i32) -> io::Result<()> {
    writeln!(out, "{}", describe(number))
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock(), NUMBER) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
