use crate::block::Block;

use std::io::{self, Write};

/// Write one list view as numbered `START/END/PID` lines. The
/// engine only hands out block iterators; all formatting lives
/// on the driver side of the boundary.
pub fn write_list<'a, W, I>(out: &mut W, label: &str, blocks: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Block>,
{
    writeln!(out, "{label}:")?;

    for (index, block) in blocks.enumerate() {
        write!(
            out,
            "Block {index}:\t START: {}\t END: {}",
            block.start, block.end
        )?;

        // Free blocks carry no pid column.
        if block.is_free() {
            writeln!(out)?;
        } else {
            writeln!(out, "\t PID: {}", block.pid)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_free_and_owned_blocks() {
        let blocks = vec![Block::free(0, 9), Block::new(10, 19, 4)];

        let mut out = Vec::new();
        write_list(&mut out, "Free Memory", blocks.iter()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Free Memory:\n\
             Block 0:\t START: 0\t END: 9\n\
             Block 1:\t START: 10\t END: 19\t PID: 4\n"
        );
    }

    #[test]
    fn empty_list_prints_only_the_label() {
        let blocks: Vec<Block> = Vec::new();

        let mut out = Vec::new();
        write_list(&mut out, "Allocated Memory", blocks.iter()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Allocated Memory:\n");
    }
}
