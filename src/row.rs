//! Fixed-width binary row encoding.
//!
//! Layout of one encoded row (`ROW_SIZE` bytes, no padding):
//!
//! ```text
//! [0, 4)     id        u32, little-endian
//! [4, 36)    username  raw bytes, NUL-terminated unless full
//! [36, 291)  email     raw bytes, NUL-terminated unless full
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::{
    EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ID_SIZE, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE,
};

/// One record of the single hardcoded table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: [u8; USERNAME_SIZE],
    pub email: [u8; EMAIL_SIZE],
}

impl Row {
    /// Build a row, truncating each string field to leave room for the terminator.
    pub fn new(id: u32, username: &[u8], email: &[u8]) -> Self {
        Self {
            id,
            username: fixed_field(username),
            email: fixed_field(email),
        }
    }

    /// Write this row into `destination`, which must be exactly `ROW_SIZE` bytes.
    pub fn encode(&self, destination: &mut [u8]) {
        debug_assert_eq!(destination.len(), ROW_SIZE);
        destination[ID_OFFSET..USERNAME_OFFSET].copy_from_slice(&self.id.to_le_bytes());
        destination[USERNAME_OFFSET..EMAIL_OFFSET].copy_from_slice(&self.username);
        destination[EMAIL_OFFSET..ROW_SIZE].copy_from_slice(&self.email);
    }

    /// Read a row back out of a `ROW_SIZE` byte window.
    pub fn decode(source: &[u8]) -> Self {
        debug_assert_eq!(source.len(), ROW_SIZE);
        let mut id = [0u8; ID_SIZE];
        id.copy_from_slice(&source[ID_OFFSET..USERNAME_OFFSET]);

        let mut row = Self {
            id: u32::from_le_bytes(id),
            username: [0u8; USERNAME_SIZE],
            email: [0u8; EMAIL_SIZE],
        };
        row.username.copy_from_slice(&source[USERNAME_OFFSET..EMAIL_OFFSET]);
        row.email.copy_from_slice(&source[EMAIL_OFFSET..ROW_SIZE]);
        row
    }

    /// Username bytes up to the first NUL.
    pub fn username(&self) -> &[u8] {
        until_nul(&self.username)
    }

    /// Email bytes up to the first NUL.
    pub fn email(&self) -> &[u8] {
        until_nul(&self.email)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.id,
            lossy(self.username()),
            lossy(self.email())
        )
    }
}

fn fixed_field<const N: usize>(value: &[u8]) -> [u8; N] {
    let mut buffer = [0u8; N];
    let len = value.len().min(N - 1);
    buffer[..len].copy_from_slice(&value[..len]);
    buffer
}

fn until_nul(field: &[u8]) -> &[u8] {
    match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
