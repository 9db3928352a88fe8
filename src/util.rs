#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No input file given.")]
    MissingCliArgument,

    #[error("File not found: {0}")]
    FileNotFound(String),
}
