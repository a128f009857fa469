use std::io::{self, Write};
use std::process;

const MESSAGE: &str = "Rust is awesome!";

// Borrows the text, so the caller keeps ownership
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

struct Book {
    pages: u32,
    rating: u8,
}

impl Book {
    fn new(pages: u32, rating: u8) -> Self {
        Self { pages, rating }
    }

    // Each call borrows the book for its duration only
    fn display_page_count(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Book has {} pages", self.pages)
    }

    fn display_rating(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Book has a rating of {}/5", self.rating)
    }
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let message = String::from(MESSAGE);
    let words = count_words(&message);
    writeln!(out, "Words: {}", words)?;

    // Still owned here after the borrow ended
    writeln!(out, "Message: {}", message)?;

    let book = Book::new(300, 4);
    book.display_page_count(out)?;
    book.display_rating(out)?;

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error writing output: {}", err);
        process::exit(1);
    }
}
