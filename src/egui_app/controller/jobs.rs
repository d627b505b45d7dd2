//! Background job plumbing for the controller.
//!
//! The blocking prediction call runs on its own thread and reports back
//! over an mpsc channel drained once per frame.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::prediction::{PredictError, PredictionInput, PredictionResult, api};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) base_url: String,
    pub(crate) input: PredictionInput,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) result: Result<PredictionResult, PredictError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            prediction_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        if self.prediction_in_progress {
            return;
        }
        self.prediction_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::predict(&job.base_url, &job.input);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                result,
            }));
        });
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }
}
