/// Returned by `Scanner::next_token` once every word of the source has been
/// consumed. The parser maps this to a syntax diagnostic; it never escapes to
/// the user directly.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no tokens remaining in the input")]
pub struct EndOfInput;
