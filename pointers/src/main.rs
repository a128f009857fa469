use std::cell::Cell;
use std::io::{self, Write};
use std::process;

const INITIAL: i32 = 10;
const UPDATED: i32 = 20;

// Writes through a mutable reference, then through a reference to that reference.
fn nested_write(out: &mut impl Write) -> io::Result<()> {
    let mut x = 5;

    let ptr_x = &mut x;
    *ptr_x = 10;
    writeln!(out, "The value of x is: {}", x)?;

    let mut ptr_x = &mut x;
    let ptr_ptr_x = &mut ptr_x;
    **ptr_ptr_x = 20;
    writeln!(out, "The value of x is: {}", x)?;

    Ok(())
}

fn run(out: &mut impl Write) -> io::Result<()> {
    // One owned storage cell, printed with its address
    let number = Cell::new(INITIAL);
    writeln!(out, "Number: {}, Address: {:p}", number.get(), &number)?;

    // A borrowed alias to the same cell, not a copy of it
    let ptr: &Cell<i32> = &number;
    writeln!(out, "Pointer: {:p}, Value: {}", ptr, ptr.get())?;

    // Writes through the alias land in the original cell
    ptr.set(UPDATED);
    writeln!(out, "Number after change: {}", number.get())?;

    writeln!(out, "Dereferenced pointer: {}", ptr.get())?;

    nested_write(out)
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
