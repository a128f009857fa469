use std::collections::TryReserveError;
use std::io::{self, Write};
use std::process;

use thiserror::Error;

const COUNT: usize = 10;

#[derive(Debug, Error)]
enum HeapError {
    #[error("Memory allocation failed.")]
    Alloc(#[from] TryReserveError),

    #[error("square of index {index} does not fit in an i32")]
    Overflow { index: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

// Reserves room for exactly `count` integers and stores the square of each index.
fn squares(count: usize) -> Result<Vec<i32>, HeapError> {
    let mut arr = Vec::new();
    arr.try_reserve_exact(count)?;
    for index in 0..count {
        let square = i32::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(i))
            .ok_or(HeapError::Overflow { index })?;
        arr.push(square);
    }
    Ok(arr)
}

fn run(out: &mut impl Write) -> Result<(), HeapError> {
    let arr = squares(COUNT)?;
    for value in &arr {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;

    // `arr` is freed when it goes out of scope here
    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
