//! Aggregator station.
//!
//! Wraps an [`AggregationSession`] behind tokio channels so a host pipeline
//! can feed classification samples from its capture loop and receive
//! completed words on the other side:
//! - `Sample` frames run one tick of aggregation
//! - `Flush` force-completes the in-progress word
//! - `Stop` flushes, then ends the run

use crate::aggregation::sample::{ClassificationSample, CompletedWord};
use crate::aggregation::session::AggregationSession;
use crate::error::Result;
use tokio::sync::mpsc;

/// Frames accepted by the aggregator station.
#[derive(Debug, Clone)]
pub enum StreamFrame {
    /// One classification result from the capture loop.
    Sample(ClassificationSample),
    /// Complete the in-progress word now (manual flush, end of utterance).
    Flush,
    /// Flush and end the run.
    Stop,
}

impl StreamFrame {
    /// Returns true if this is a sample frame.
    pub fn is_sample(&self) -> bool {
        matches!(self, StreamFrame::Sample(_))
    }

    /// Extracts the sample if this is a Sample variant.
    pub fn into_sample(self) -> Option<ClassificationSample> {
        match self {
            StreamFrame::Sample(s) => Some(s),
            _ => None,
        }
    }
}

/// Station that turns a frame stream into a completed-word stream.
pub struct AggregatorStation {
    session: AggregationSession,
}

impl AggregatorStation {
    /// Creates a station around an existing session.
    pub fn new(session: AggregationSession) -> Self {
        Self { session }
    }

    /// Processes a single frame and returns any word completed by it.
    ///
    /// `Stop` behaves like `Flush` here; run-loop termination is the
    /// caller's concern in this mode.
    pub fn process(&mut self, frame: StreamFrame) -> Result<Option<CompletedWord>> {
        match frame {
            StreamFrame::Sample(sample) => self.session.on_sample(sample),
            StreamFrame::Flush | StreamFrame::Stop => {
                Ok(self.session.force_complete_current_word())
            }
        }
    }

    /// The wrapped session, for live `current_word`/`current_sentence` queries.
    pub fn session(&self) -> &AggregationSession {
        &self.session
    }

    /// Runs the station until the input closes or a `Stop` frame arrives.
    ///
    /// Completed words are sent to `output`. A contract violation from the
    /// host ends the run, as does a closed output channel.
    pub async fn run(
        mut self,
        mut input: mpsc::Receiver<StreamFrame>,
        output: mpsc::Sender<CompletedWord>,
    ) {
        while let Some(frame) = input.recv().await {
            let stop = matches!(frame, StreamFrame::Stop);

            match self.process(frame) {
                Ok(Some(word)) => {
                    if output.send(word).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    eprintln!("Aggregation error: {}", e);
                    break;
                }
            }

            if stop {
                break;
            }
        }
    }
}
