use std::io::{self, Write};
use std::process;

const LIMIT: u32 = 10;

fn run(out: &mut impl Write) -> io::Result<()> {
    // A for loop walks a range
    for i in 0..LIMIT {
        writeln!(out, "Value of i is: {}", i)?;
    }

    // A while loop repeats until its condition fails
    let mut j = 0;
    while j < LIMIT {
        writeln!(out, "Value of j is: {}", j)?;
        j += 1;
    }

    // loop runs until an explicit break
    let mut k = 0;
    loop {
        writeln!(out, "Value of k is: {}", k)?;
        k += 1;
        if k == LIMIT {
            break;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
