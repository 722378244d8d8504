use crate::common::{DomainError, DomainResult};

use super::aggregate::Instruction;

/// Turn a raw instruction line into instructions.
///
/// Surrounding whitespace is trimmed and an absent or blank line yields no
/// instructions. Every remaining character must be one of `L`, `R`, `M` in
/// either case; whitespace inside the line is rejected like any other symbol.
pub fn parse_instructions<'a>(
    raw: impl Into<Option<&'a str>>,
) -> DomainResult<Vec<Instruction>> {
    let Some(raw) = raw.into() else {
        return Ok(Vec::new());
    };
    raw.trim()
        .chars()
        .map(|symbol| {
            Instruction::from_char(symbol).ok_or(DomainError::UnknownInstruction { symbol })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::robots::aggregate::Instruction::{MoveForward, TurnLeft, TurnRight};

    #[test]
    fn absent_and_blank_input_is_empty() {
        assert!(parse_instructions(None::<&str>).unwrap().is_empty());
        assert!(parse_instructions("").unwrap().is_empty());
        assert!(parse_instructions("   \t  \n ").unwrap().is_empty());
    }

    #[test]
    fn case_does_not_matter() {
        let upper = parse_instructions("LMR").unwrap();
        assert_eq!(upper, vec![TurnLeft, MoveForward, TurnRight]);
        assert_eq!(parse_instructions("lmr").unwrap(), upper);
        assert_eq!(parse_instructions("LmR").unwrap(), upper);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(parse_instructions("  LMLMLMLMM   ").unwrap().len(), 9);
    }

    #[test]
    fn unknown_symbol_is_reported() {
        assert_eq!(
            parse_instructions("MX"),
            Err(DomainError::UnknownInstruction { symbol: 'X' })
        );
        let err = parse_instructions("MXM").unwrap_err();
        assert!(err.to_string().contains("Unknown instruction"));
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        assert_eq!(
            parse_instructions("L M"),
            Err(DomainError::UnknownInstruction { symbol: ' ' })
        );
        assert_eq!(
            parse_instructions("L\tM"),
            Err(DomainError::UnknownInstruction { symbol: '\t' })
        );
    }

    #[test]
    fn long_sequences_keep_order() {
        let parsed = parse_instructions("LMLMLMLMM").unwrap();
        assert_eq!(parsed.len(), 9);
        assert_eq!(parsed.first(), Some(&TurnLeft));
        assert_eq!(parsed[1], MoveForward);
        assert_eq!(parsed.last(), Some(&MoveForward));
    }
}
