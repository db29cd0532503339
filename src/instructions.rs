use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Sentinel pid marking a coalesce request in the input file.
const COALESCE_SENTINEL: i64 = -99999;

/// One step of the simulation, decoded from a `pid size` line
/// of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Allocate { pid: u32, size: usize },
    Deallocate { pid: u32 },
    Coalesce,
}

/// Parse an input file into the partition size and the flat
/// instruction sequence. The first line holds the partition
/// size; every following non-empty line holds a `pid size`
/// pair. A positive pid allocates, a negative pid deallocates
/// its absolute value (the size column is carried on every line
/// but ignored for deallocation), and the `-99999` sentinel
/// requests a coalesce pass.
pub fn parse_input(path: &Path) -> Result<(usize, Vec<Instruction>)> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Invalid filepath {}", path.display()))?;

    parse_instructions(&contents)
        .with_context(|| format!("Malformed input file {}", path.display()))
}

fn parse_instructions(contents: &str) -> Result<(usize, Vec<Instruction>)> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let partition_size: usize = lines
        .next()
        .ok_or_else(|| anyhow!("Empty input file"))?
        .trim()
        .parse()
        .context("Invalid partition size")?;

    if partition_size == 0 {
        return Err(anyhow!("Partition size must be positive"));
    }

    let mut instructions = Vec::new();
    for (number, line) in lines.enumerate() {
        let mut fields = line.split_whitespace();

        let pid: i64 = fields
            .next()
            .ok_or_else(|| anyhow!("Missing pid on line {}", number + 2))?
            .parse()
            .with_context(|| format!("Invalid pid on line {}", number + 2))?;
        let size: usize = fields
            .next()
            .ok_or_else(|| anyhow!("Missing size on line {}", number + 2))?
            .parse()
            .with_context(|| format!("Invalid size on line {}", number + 2))?;

        let instruction = if pid == COALESCE_SENTINEL {
            Instruction::Coalesce
        } else if pid > 0 {
            if size == 0 {
                return Err(anyhow!("Zero-size request on line {}", number + 2));
            }
            Instruction::Allocate { pid: pid as u32, size }
        } else if pid < 0 {
            // The size column of a deallocation line is present
            // but unused.
            Instruction::Deallocate { pid: pid.unsigned_abs() as u32 }
        } else {
            return Err(anyhow!("Pid 0 is reserved on line {}", number + 2));
        };

        instructions.push(instruction);
    }

    Ok((partition_size, instructions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_instruction_kinds() {
        let input = "1024\n1 100\n2 50\n-1 0\n-99999 0\n";
        let (size, instructions) = parse_instructions(input).unwrap();

        assert_eq!(size, 1024);
        assert_eq!(
            instructions,
            vec![
                Instruction::Allocate { pid: 1, size: 100 },
                Instruction::Allocate { pid: 2, size: 50 },
                Instruction::Deallocate { pid: 1 },
                Instruction::Coalesce,
            ]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let input = "64\n\n3 8\n\n";
        let (size, instructions) = parse_instructions(input).unwrap();

        assert_eq!(size, 64);
        assert_eq!(instructions, vec![Instruction::Allocate { pid: 3, size: 8 }]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instructions("").is_err());
        assert!(parse_instructions("abc\n").is_err());
        assert!(parse_instructions("64\n1\n").is_err());
        assert!(parse_instructions("64\nx 10\n").is_err());
        assert!(parse_instructions("64\n0 10\n").is_err());
        assert!(parse_instructions("64\n1 0\n").is_err());
    }
}
