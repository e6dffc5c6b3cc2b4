// libpn532/src/transport/mock.rs

//! Scripted in-memory PN532 for tests and demos.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_READY, SPI_STATUS_READ};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Recorded bus activity and scripted replies shared by all clones of a
/// `MockTransport`.
#[derive(Debug, Default)]
pub struct MockState {
    /// Payloads of every data-write transfer, in order
    pub written: Vec<Vec<u8>>,
    /// Queued replies for data-read transfers
    pub reads: VecDeque<Vec<u8>>,
    /// Queued status register values; when empty the chip reports ready
    /// unless `never_ready` is set
    pub statuses: VecDeque<u8>,
    /// Report busy forever once `statuses` runs out
    pub never_ready: bool,
    /// Every delay_ms call, in order
    pub delays: Vec<u32>,
    /// Completed (begun and ended) transactions
    pub transactions: usize,
    /// Status register reads, across all transactions
    pub status_polls: usize,
    /// Testing hook: number of begin_transaction calls that should fail
    pub transaction_failures: usize,
    /// Testing hook: the begin_transaction call (1-based, counted over the
    /// mock's lifetime) that should fail
    pub fail_begin_at: Option<usize>,
    begins: usize,
    open: bool,
    op: Option<u8>,
}

/// Mock transport for unit tests. It plays the PN532 side of the SPI
/// protocol: records written frames and returns queued reads and status
/// bytes. Clones share state so a test can keep a handle after moving the
/// transport into a `Device`.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Mock that reports ready and has nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes the next data-read transfer returns. Shorter
    /// replies are zero padded, longer ones truncated to the read size.
    pub fn push_read(&mut self, data: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(data);
    }

    /// Queue a status register value for the next status poll.
    pub fn push_status(&mut self, status: u8) {
        self.state.borrow_mut().statuses.push_back(status);
    }

    /// Report "busy" forever once queued statuses run out.
    pub fn set_never_ready(&mut self, never_ready: bool) {
        self.state.borrow_mut().never_ready = never_ready;
    }

    /// Make the next `n` begin_transaction calls fail with a bus error.
    pub fn set_transaction_failures(&mut self, n: usize) {
        self.state.borrow_mut().transaction_failures = n;
    }

    /// Let `n - 1` more transactions through, then fail the `n`-th
    /// begin_transaction with a bus error. Later ones succeed again.
    pub fn fail_nth_transaction(&mut self, n: usize) {
        let mut s = self.state.borrow_mut();
        s.fail_begin_at = Some(s.begins + n);
    }

    /// Payloads of data-write transfers so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// Arguments of every `delay_ms` call so far.
    pub fn delays(&self) -> Vec<u32> {
        self.state.borrow().delays.clone()
    }

    /// Number of completed transactions.
    pub fn transactions(&self) -> usize {
        self.state.borrow().transactions
    }

    /// Number of status register reads.
    pub fn status_polls(&self) -> usize {
        self.state.borrow().status_polls
    }

    /// Queued replies not yet consumed.
    pub fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }

    /// True while a transaction is begun and not yet ended.
    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    /// Forget recorded activity but keep queued replies.
    pub fn clear_log(&mut self) {
        let mut s = self.state.borrow_mut();
        s.written.clear();
        s.delays.clear();
        s.transactions = 0;
        s.status_polls = 0;
    }
}

impl MockState {
    fn next_status(&mut self) -> u8 {
        self.status_polls += 1;
        match self.statuses.pop_front() {
            Some(status) => status,
            None if self.never_ready => 0x00,
            None => SPI_READY,
        }
    }
}

impl Transport for MockTransport {
    fn begin_transaction(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if s.open {
            return Err(Error::Bus("nested transaction".into()));
        }
        s.begins += 1;
        if s.fail_begin_at == Some(s.begins) {
            s.fail_begin_at = None;
            return Err(Error::Bus("simulated bus failure".into()));
        }
        if s.transaction_failures > 0 {
            s.transaction_failures -= 1;
            return Err(Error::Bus("simulated bus failure".into()));
        }
        s.open = true;
        s.op = None;
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if !s.open {
            return Err(Error::Bus("no open transaction".into()));
        }
        s.open = false;
        s.op = None;
        s.transactions += 1;
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        let mut s = self.state.borrow_mut();
        if !s.open {
            return Err(Error::Bus("transfer outside transaction".into()));
        }
        match s.op {
            None => {
                s.op = Some(byte);
                if byte == SPI_STATUS_READ {
                    return Ok(s.next_status());
                }
                Ok(0x00)
            }
            // Repeated status polls within one transaction
            Some(SPI_STATUS_READ) if byte == SPI_STATUS_READ => Ok(s.next_status()),
            Some(_) => Ok(0x00),
        }
    }

    fn transfer(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if !s.open {
            return Err(Error::Bus("transfer outside transaction".into()));
        }
        match s.op {
            Some(SPI_DATA_WRITE) => {
                s.written.push(buf.to_vec());
                buf.fill(0);
                Ok(())
            }
            Some(SPI_DATA_READ) => {
                let reply = s.reads.pop_front().unwrap_or_default();
                for (i, b) in buf.iter_mut().enumerate() {
                    *b = reply.get(i).copied().unwrap_or(0x00);
                }
                Ok(())
            }
            other => Err(Error::Bus(format!(
                "buffer transfer after unexpected operation {:?}",
                other
            ))),
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().delays.push(ms);
    }
}
