use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tintbox_application::{
    ApplicationError, LoadMetrics, LoadOutcome, LoadPipeline, LoadedPhoto, PickedPhoto,
};

use crate::codec;

const PREVIEW_MAX_EDGE: u32 = 1024;
const THUMB_MAX_EDGE: u32 = 96;

#[derive(Default)]
struct CounterState {
    submitted_jobs: u64,
    completed_jobs: u64,
    superseded_jobs: u64,
    failed_jobs: u64,
}

impl CounterState {
    fn snapshot(&self) -> LoadMetrics {
        LoadMetrics {
            submitted_jobs: self.submitted_jobs,
            completed_jobs: self.completed_jobs,
            superseded_jobs: self.superseded_jobs,
            failed_jobs: self.failed_jobs,
        }
    }
}

struct ScheduledLoad {
    sequence: u64,
    photo: PickedPhoto,
}

/// Decode worker behind the LoadPipeline port. A newer submission bumps the
/// shared latest-sequence marker; the worker drops any job or finished result
/// that is no longer the latest, so stale picks never reach the UI.
pub struct BackgroundLoadPipeline {
    next_sequence: AtomicU64,
    latest_sequence: Arc<AtomicU64>,
    submit_tx: mpsc::Sender<ScheduledLoad>,
    result_rx: Mutex<mpsc::Receiver<LoadOutcome>>,
    counters: Arc<Mutex<CounterState>>,
}

impl BackgroundLoadPipeline {
    pub fn new() -> Self {
        let (submit_tx, submit_rx) = mpsc::channel::<ScheduledLoad>();
        let (result_tx, result_rx) = mpsc::channel::<LoadOutcome>();
        let latest_sequence = Arc::new(AtomicU64::new(0));
        let counters = Arc::new(Mutex::new(CounterState::default()));

        spawn_worker(
            submit_rx,
            result_tx,
            Arc::clone(&latest_sequence),
            Arc::clone(&counters),
        );

        Self {
            next_sequence: AtomicU64::new(0),
            latest_sequence,
            submit_tx,
            result_rx: Mutex::new(result_rx),
            counters,
        }
    }
}

impl Default for BackgroundLoadPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadPipeline for BackgroundLoadPipeline {
    fn submit_load(&self, photo: PickedPhoto) -> Result<(), ApplicationError> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest_sequence.store(sequence, Ordering::SeqCst);
        {
            let mut counters = self
                .counters
                .lock()
                .map_err(|_| ApplicationError::Io("load counter lock poisoned".to_string()))?;
            counters.submitted_jobs += 1;
        }
        self.submit_tx
            .send(ScheduledLoad { sequence, photo })
            .map_err(|error| ApplicationError::Io(format!("failed to enqueue load job: {error}")))
    }

    fn try_receive_load(&self) -> Result<Option<LoadOutcome>, ApplicationError> {
        let receiver = self
            .result_rx
            .lock()
            .map_err(|_| ApplicationError::Io("load result lock poisoned".to_string()))?;

        let first = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => {
                return Err(ApplicationError::Io(
                    "load result channel disconnected".to_string(),
                ))
            }
        };

        let mut newest = first;
        let mut drained = 0_u64;
        while let Ok(next) = receiver.try_recv() {
            drained += 1;
            newest = next;
        }

        if drained > 0 {
            let mut counters = self
                .counters
                .lock()
                .map_err(|_| ApplicationError::Io("load counter lock poisoned".to_string()))?;
            counters.superseded_jobs += drained;
        }

        Ok(Some(newest))
    }

    fn metrics(&self) -> Result<LoadMetrics, ApplicationError> {
        let counters = self
            .counters
            .lock()
            .map_err(|_| ApplicationError::Io("load counter lock poisoned".to_string()))?;
        Ok(counters.snapshot())
    }
}

fn spawn_worker(
    submit_rx: mpsc::Receiver<ScheduledLoad>,
    result_tx: mpsc::Sender<LoadOutcome>,
    latest_sequence: Arc<AtomicU64>,
    counters: Arc<Mutex<CounterState>>,
) {
    thread::spawn(move || {
        while let Ok(mut job) = submit_rx.recv() {
            while let Ok(next) = submit_rx.try_recv() {
                mark_superseded(&counters, 1);
                job = next;
            }

            if job.sequence < latest_sequence.load(Ordering::SeqCst) {
                mark_superseded(&counters, 1);
                continue;
            }

            let result = decode_photo(&job.photo);

            if job.sequence < latest_sequence.load(Ordering::SeqCst) {
                mark_superseded(&counters, 1);
                continue;
            }

            if let Ok(mut state) = counters.lock() {
                match &result {
                    Ok(_) => state.completed_jobs += 1,
                    Err(_) => state.failed_jobs += 1,
                }
            }

            let outcome = LoadOutcome {
                sequence: job.sequence,
                result,
            };
            if result_tx.send(outcome).is_err() {
                return;
            }
        }
    });
}

fn mark_superseded(counters: &Arc<Mutex<CounterState>>, count: u64) {
    if let Ok(mut state) = counters.lock() {
        state.superseded_jobs += count;
    }
}

fn decode_photo(photo: &PickedPhoto) -> Result<LoadedPhoto, ApplicationError> {
    let full = codec::decode_source(&photo.bytes)?;
    let preview_base = codec::downscale_to_fit(&full, PREVIEW_MAX_EDGE)?;
    let thumb_base = codec::downscale_to_fit(&full, THUMB_MAX_EDGE)?;
    log::debug!(
        "decoded {} into {}x{}",
        photo.file_name,
        full.width(),
        full.height()
    );
    Ok(LoadedPhoto {
        full: Arc::new(full),
        preview_base,
        thumb_base,
    })
}
