use std::io::{self, Write};
use std::process;

const LEN: usize = 5;

// Declare an array of integers, every slot starts at zero
fn new_numbers() -> [i32; LEN] {
    [0; LEN]
}

// Fill every slot by index. Constant indices are bounds-checked at compile time.
fn populate(numbers: &mut [i32; LEN]) {
    numbers[0] = 10;
    numbers[1] = 20;
    numbers[2] = 30;
    numbers[3] = 40;
    numbers[4] = 50;
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let mut numbers = new_numbers();
    populate(&mut numbers);

    writeln!(out, "{:?}", numbers)?;

    // Accessing array elements
    writeln!(out, "{}", numbers[0])?;
    writeln!(out, "{}", numbers[4])?;

    // Modifying array elements
    numbers[1] = 25;
    writeln!(out, "{}", numbers[1])?;

    // The length is part of the type and never changes
    writeln!(out, "{}", numbers.len())?;

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
