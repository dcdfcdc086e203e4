//! Channel-based data source.
//!
//! Receives frames pushed by an embedding application instead of polling a
//! file.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use statusboard_types::Frame;

use super::DataSource;

/// A data source that receives frames via a channel.
///
/// Only the most recent batch matters: when several batches are queued
/// between polls, the older ones are dropped.
///
/// # Example
///
/// ```
/// use statusboard::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("grafana://dashboard/uptime");
/// tx.send(Vec::new()).unwrap();
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: Receiver<Vec<Frame>>,
    description: String,
    disconnected: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// `source_description` names where frames come from and is shown in the
    /// status bar.
    pub fn new(receiver: Receiver<Vec<Frame>>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            disconnected: false,
        }
    }

    /// Create a channel pair for sending frames to a ChannelSource.
    pub fn create(source_description: &str) -> (Sender<Vec<Frame>>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<Vec<Frame>> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(frames) => latest = Some(frames),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.disconnected = true;
                    break;
                }
            }
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.disconnected.then_some("sender disconnected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");
        assert_eq!(source.description(), "channel: test");

        // Nothing sent yet
        assert!(source.poll().is_none());

        tx.send(vec![Frame::new()]).unwrap();
        assert_eq!(source.poll().map(|f| f.len()), Some(1));
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_keeps_latest() {
        let (tx, mut source) = ChannelSource::create("test");
        tx.send(vec![Frame::new()]).unwrap();
        tx.send(vec![Frame::new(), Frame::new(), Frame::new()]).unwrap();

        assert_eq!(source.poll().map(|f| f.len()), Some(3));
    }

    #[test]
    fn test_channel_source_reports_disconnect() {
        let (tx, mut source) = ChannelSource::create("test");
        tx.send(vec![Frame::new()]).unwrap();
        drop(tx);

        assert!(source.poll().is_some());
        assert_eq!(source.error(), Some("sender disconnected"));
    }
}
