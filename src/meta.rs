use crate::error::MetaCommandError;

// Non-SQL statements like .exit are called "meta-commands".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
}

impl MetaCommand {
    pub fn is_meta(input: &[u8]) -> bool {
        input.starts_with(b".")
    }

    pub fn parse(input: &[u8]) -> Result<MetaCommand, MetaCommandError> {
        match input {
            b".exit" => Ok(MetaCommand::Exit),
            _ => Err(MetaCommandError::Unrecognized(
                String::from_utf8_lossy(input).into_owned(),
            )),
        }
    }
}
