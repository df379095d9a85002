//! Blocking byte decoder over any `Read` source.

use crate::{Key, Mode, NormalCommand, colon_command, log_decoded, normal_command};
use std::io::{ErrorKind, Read};

/// Pulls exactly as many bytes as one command needs from `reader`.
pub struct KeyDecoder<R> {
    reader: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Block until one key is resolved for `mode`.
    ///
    /// End of input before the first byte yields [`Key::Closed`]; end of input
    /// after a `:` prefix yields `Unknown`.
    pub fn next_key(&mut self, mode: Mode) -> Key {
        let key = match self.read_byte() {
            None => Key::Closed,
            Some(byte) => match mode {
                Mode::Insert => Key::Insert(byte),
                Mode::Normal if byte == b':' => {
                    let cmd = self
                        .read_byte()
                        .map_or(NormalCommand::Unknown, colon_command);
                    Key::Normal(cmd)
                }
                Mode::Normal => Key::Normal(normal_command(byte)),
            },
        };
        log_decoded(mode, &key);
        key
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(target: "input.decode", error = %e, "read_failed");
                    return None;
                }
            }
        }
    }
}
