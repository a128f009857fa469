use std::io::{self, Write};
use std::ops::Range;
use std::process;

use thiserror::Error;

#[derive(Debug, Error)]
enum SliceError {
    #[error("index {index} out of bounds, valid range is 0..{len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} out of bounds, valid range is 0..{len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn element(numbers: &[i32], index: usize) -> Result<i32, SliceError> {
    numbers.get(index).copied().ok_or(SliceError::OutOfBounds {
        index,
        len: numbers.len(),
    })
}

fn element_mut(numbers: &mut [i32], index: usize) -> Result<&mut i32, SliceError> {
    let len = numbers.len();
    numbers
        .get_mut(index)
        .ok_or(SliceError::OutOfBounds { index, len })
}

// Drops `range` and shifts everything after it left to close the gap.
fn remove_range(numbers: &mut Vec<i32>, range: Range<usize>) -> Result<(), SliceError> {
    let len = numbers.len();
    if range.start > range.end || range.end > len {
        return Err(SliceError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    numbers.drain(range);
    Ok(())
}

// A fresh zeroed buffer of the same length, filled value by value.
fn copy_of(numbers: &[i32]) -> Vec<i32> {
    let mut copy = vec![0; numbers.len()];
    copy.copy_from_slice(numbers);
    copy
}

fn run(out: &mut impl Write) -> Result<(), SliceError> {
    // Start empty and append the initial elements
    let mut numbers: Vec<i32> = Vec::new();
    numbers.extend([10, 20, 30]);
    writeln!(out, "{:?}", numbers)?;

    // Accessing elements
    writeln!(out, "{}", element(&numbers, 0)?)?;
    writeln!(out, "{}", element(&numbers, 2)?)?;

    // Modifying elements
    *element_mut(&mut numbers, 1)? = 25;
    writeln!(out, "{}", element(&numbers, 1)?)?;

    writeln!(out, "{}", numbers.len())?;

    // Append more
    numbers.extend([40, 50]);
    writeln!(out, "{:?}", numbers)?;

    // Remove the element at index 2
    remove_range(&mut numbers, 2..3)?;
    writeln!(out, "{:?}", numbers)?;

    // Independent copy
    let new_numbers = copy_of(&numbers);
    writeln!(out, "{:?}", new_numbers)?;

    Ok(())
}

fn main() {
    if let Err(err) = run(&mut io::stdout().lock()) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output() {
        let expected = "[10, 20, 30]\n\
                        10\n\
                        30\n\
                        25\n\
                        3\n\
                        [10, 25, 30, 40, 50]\n\
                        [10, 25, 40, 50]\n\
                        [10, 25, 40, 50]\n";
        assert_eq!(output(), expected);
    }

    #[test]
    fn test_state_after_each_step() {
        let mut numbers = Vec::new();
        numbers.extend([10, 20, 30]);
        assert_eq!(numbers.len(), 3);
        assert_eq!(element(&numbers, 0).unwrap(), 10);
        assert_eq!(element(&numbers, 2).unwrap(), 30);

        *element_mut(&mut numbers, 1).unwrap() = 25;
        assert_eq!(numbers, vec![10, 25, 30]);

        numbers.extend([40, 50]);
        assert_eq!(numbers, vec![10, 25, 30, 40, 50]);

        remove_range(&mut numbers, 2..3).unwrap();
        assert_eq!(numbers, vec![10, 25, 40, 50]);
        assert_eq!(numbers.len(), 4);
    }

    #[test]
    fn test_index_past_end() {
        let numbers = vec![10, 20, 30];
        let err = element(&numbers, 3).unwrap_err();
        assert!(matches!(err, SliceError::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(err.to_string(), "index 3 out of bounds, valid range is 0..3");
    }

    #[test]
    fn test_write_past_end_leaves_sequence_alone() {
        let mut numbers = vec![10, 20, 30];
        assert!(element_mut(&mut numbers, 7).is_err());
        assert_eq!(numbers, vec![10, 20, 30]);
    }

    #[test]
    fn test_remove_range_bounds() {
        let mut numbers = vec![10, 25, 30, 40, 50];
        let err = remove_range(&mut numbers, 4..6).unwrap_err();
        assert!(matches!(
            err,
            SliceError::RangeOutOfBounds { start: 4, end: 6, len: 5 }
        ));
        assert_eq!(numbers.len(), 5);

        remove_range(&mut numbers, 1..1).unwrap();
        assert_eq!(numbers, vec![10, 25, 30, 40, 50]);

        remove_range(&mut numbers, 1..4).unwrap();
        assert_eq!(numbers, vec![10, 50]);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut numbers = vec![10, 25, 40, 50];
        let mut copy = copy_of(&numbers);
        assert_eq!(copy, numbers);

        copy[0] = 99;
        assert_eq!(numbers[0], 10);

        numbers[1] = 77;
        assert_eq!(copy[1], 25);
    }

    #[test]
    fn test_append_grows_without_limit() {
        let mut numbers = Vec::new();
        numbers.extend(0..10_000);
        assert_eq!(numbers.len(), 10_000);
        assert_eq!(element(&numbers, 9_999).unwrap(), 9_999);
    }
}
