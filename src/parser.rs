//! Parser of decimal numbers.

use crate::defs::Digit;
use crate::defs::Error;
use crate::defs::Sign;
use core::str::Chars;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[derive(Debug)]
pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<Digit>,
    scale: usize,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            scale: 0,
        }
    }

    // Returns next character of the string, or None if the string end is reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    /// Returns the digits, the scale, and the sign of the parsed number.
    /// Leading zeroes of the integer part are not included in the digits.
    pub fn raw_parts(&self) -> (&[Digit], usize, Sign) {
        (&self.digits, self.scale, self.sign)
    }
}

/// Parse a decimal number from string `s`.
///
/// ## Errors
///
///  - InvalidCharacter: the input is malformed; the error holds the offending character.
pub fn parse(s: &str) -> Result<ParserState, Error> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign; a bare sign character is not a number
    if let Some(c @ ('+' | '-')) = ch {
        if c == '-' {
            parser_state.sign = Sign::Neg;
        }

        ch = parser_state.next_char();
        if ch.is_none() {
            return Err(Error::InvalidCharacter(c));
        }
    }

    // integer part, leading zeroes are skipped
    let mut int_started = false;
    while let Some(c) = ch {
        match c {
            '0'..='9' => {
                let d = c.to_digit(10).unwrap() as Digit; // call to unwrap() is unreachable, because c is surely a digit.
                if d != 0 || int_started {
                    parser_state.digits.push(d);
                    int_started = true;
                }
            }
            '.' => break,
            _ => return Err(Error::InvalidCharacter(c)),
        }

        ch = parser_state.next_char();
    }

    // fraction part, requires at least one digit after the point
    if let Some('.') = ch {
        ch = parser_state.next_char();
        if ch.is_none() {
            return Err(Error::InvalidCharacter('.'));
        }

        while let Some(c) = ch {
            match c {
                '0'..='9' => {
                    let d = c.to_digit(10).unwrap() as Digit; // call to unwrap() is unreachable, because c is surely a digit.
                    parser_state.digits.push(d);
                    parser_state.scale += 1;
                }
                _ => return Err(Error::InvalidCharacter(c)),
            }

            ch = parser_state.next_char();
        }
    }

    Ok(parser_state)
}
