//! Argument handling and output rendering for the `lcs` binary.
//!
//! Grammar: `lcs <len1> <len2> <tokens1...> <tokens2...>`, where exactly
//! `len1 + len2` tokens follow the two lengths. Tokens are taken verbatim, so
//! a token may itself look like a flag. On unix a token is the raw argument
//! bytes, so tokens that are not valid UTF-8 still compare and print exactly.

use std::ffi::OsString;

use crate::error::CliError;

/// Environment variable that caps the DP table size for the binary.
pub const MAX_CELLS_ENV: &str = "LCS_MAX_CELLS";

/// A command-line token: the argument's bytes.
pub type Token = Vec<u8>;

/// Two token sequences parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub seq1: Vec<Token>,
    pub seq2: Vec<Token>,
}

impl Invocation {
    /// Parse the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let (len1, len2) = match (args.next(), args.next()) {
            (Some(a), Some(b)) => (parse_len(&a)?, parse_len(&b)?),
            _ => return Err(CliError::Usage),
        };

        let tokens: Vec<Token> = args.map(token_bytes).collect();
        let declared = len1.saturating_add(len2);
        if tokens.len() != declared {
            return Err(CliError::LengthMismatch {
                declared,
                supplied: tokens.len(),
            });
        }

        let mut seq1 = tokens;
        let seq2 = seq1.split_off(len1);
        Ok(Self { seq1, seq2 })
    }
}

fn parse_len(raw: &OsString) -> Result<usize, CliError> {
    raw.to_str()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .ok_or_else(|| CliError::InvalidLength(raw.to_string_lossy().into_owned()))
}

#[cfg(unix)]
fn token_bytes(arg: OsString) -> Token {
    use std::os::unix::ffi::OsStringExt;
    arg.into_vec()
}

// No lossless byte view of OsString off unix; fall back to lossy UTF-8.
#[cfg(not(unix))]
fn token_bytes(arg: OsString) -> Token {
    arg.to_string_lossy().into_owned().into_bytes()
}

/// Read the optional cell limit from a raw environment value.
pub fn parse_max_cells(raw: Option<&str>) -> Result<Option<usize>, CliError> {
    match raw {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => v
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| CliError::InvalidCellLimit(v.to_string())),
    }
}

/// Render a result as the count on one line followed by the tokens,
/// space-separated, on the next. Token bytes are written unchanged.
pub fn render<S: AsRef<[u8]>>(common: &[S]) -> Vec<u8> {
    let mut out = format!("{}\n", common.len()).into_bytes();
    for (k, token) in common.iter().enumerate() {
        if k > 0 {
            out.push(b' ');
        }
        out.extend_from_slice(token.as_ref());
    }
    out.push(b'\n');
    out
}
