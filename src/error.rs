use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail)]
pub enum Error {
    /// The string specified does not contain a valid rank
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// The string specified does not contain a valid file
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The string specified does not contain a valid algebraic-notation square
    #[fail(display = "The string specified does not contain a valid square")]
    InvalidSquare,
}
