//! Test doubles for the display transport

use crate::traits::DisplayTransport;

/// One byte as seen on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(u8),
}

/// Transport that records every byte, optionally failing after a budget
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub ops: Vec<Op>,
    /// Fail once this many bytes have been sent
    pub fail_after: Option<usize>,
}

/// Error raised by [`RecordingTransport`] when its budget runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(count: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(count),
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(b) => Some(*b),
                Op::Data(_) => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Data(b) => Some(*b),
                Op::Command(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn push(&mut self, op: Op) -> Result<(), BusFault> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(BusFault);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DisplayTransport for RecordingTransport {
    type Error = BusFault;

    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(Op::Command(byte))
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(Op::Data(byte))
    }
}
