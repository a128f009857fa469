use std::io::{self, Write};
use std::process;

fn run(out: &mut impl Write) -> io::Result<()> {
    // Integer, string slice and boolean bindings, types inferred
    let x = 5;
    let y = "Hello, world!";
    let z = true;

    writeln!(out, "The value of x is: {}", x)?;
    writeln!(out, "The value of y is: {}", y)?;
    writeln!(out, "The value of z is: {}", z)?;

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "The value of x is: 5\nThe value of y is: Hello, world!\nThe value of z is: true\n"
        );
    }
}
