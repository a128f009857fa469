use std::io::{self, Write};
use std::process;

// Takes `x` by value and hands back the doubled result
fn double_number(x: i32) -> i32 {
    2 * x
}

// Doubles the caller's variable in place through a mutable borrow
fn double_in_place(x: &mut i32) {
    *x *= 2;
}

// Function that borrows a slice and returns its largest element
fn find_max(numbers: &[i32]) -> Option<i32> {
    let (&first, rest) = numbers.split_first()?;
    let mut max_value = first;
    for &num in rest {
        if num > max_value {
            max_value = num;
        }
    }
    Some(max_value)
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let mut num = 5;
    writeln!(out, "{}", double_number(num))?;
    writeln!(out, "{}", num)?;
    double_in_place(&mut num);
    writeln!(out, "{}", num)?;

    let numbers = vec![3, 5, 2, 1, 4];
    match find_max(&numbers) {
        Some(max_value) => writeln!(out, "The maximum value is: {}", max_value)?,
        None => writeln!(out, "The vector is empty")?,
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
