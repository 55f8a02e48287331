use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tintbox_application::{
    ApplicationError, ExportJob, ExportMetrics, ExportOutcome, ExportPipeline, PhotoLibrary,
    SavedPhoto, WriteAccess,
};

use crate::render::BakeRenderer;

#[derive(Default)]
struct CounterState {
    submitted_jobs: u64,
    completed_jobs: u64,
    failed_jobs: u64,
}

impl CounterState {
    fn snapshot(&self) -> ExportMetrics {
        ExportMetrics {
            submitted_jobs: self.submitted_jobs,
            completed_jobs: self.completed_jobs,
            failed_jobs: self.failed_jobs,
        }
    }
}

struct ScheduledExport {
    sequence: u64,
    job: ExportJob,
}

/// Bake-and-save worker behind the ExportPipeline port. Jobs are never
/// canceled or retried; each one runs permission check, bake, write, then
/// reports exactly one outcome.
pub struct BackgroundExportPipeline {
    next_sequence: AtomicU64,
    submit_tx: mpsc::Sender<ScheduledExport>,
    result_rx: Mutex<mpsc::Receiver<ExportOutcome>>,
    counters: Arc<Mutex<CounterState>>,
}

impl BackgroundExportPipeline {
    pub fn new(renderer: Arc<dyn BakeRenderer>, library: Arc<dyn PhotoLibrary>) -> Self {
        let (submit_tx, submit_rx) = mpsc::channel::<ScheduledExport>();
        let (result_tx, result_rx) = mpsc::channel::<ExportOutcome>();
        let counters = Arc::new(Mutex::new(CounterState::default()));

        spawn_worker(submit_rx, result_tx, Arc::clone(&counters), renderer, library);

        Self {
            next_sequence: AtomicU64::new(0),
            submit_tx,
            result_rx: Mutex::new(result_rx),
            counters,
        }
    }
}

impl ExportPipeline for BackgroundExportPipeline {
    fn submit_export(&self, job: ExportJob) -> Result<(), ApplicationError> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut counters = self
                .counters
                .lock()
                .map_err(|_| ApplicationError::Io("export counter lock poisoned".to_string()))?;
            counters.submitted_jobs += 1;
        }
        self.submit_tx
            .send(ScheduledExport { sequence, job })
            .map_err(|error| {
                ApplicationError::Io(format!("failed to enqueue export job: {error}"))
            })
    }

    fn try_receive_export(&self) -> Result<Option<ExportOutcome>, ApplicationError> {
        let receiver = self
            .result_rx
            .lock()
            .map_err(|_| ApplicationError::Io("export result lock poisoned".to_string()))?;
        match receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(ApplicationError::Io(
                "export result channel disconnected".to_string(),
            )),
        }
    }

    fn metrics(&self) -> Result<ExportMetrics, ApplicationError> {
        let counters = self
            .counters
            .lock()
            .map_err(|_| ApplicationError::Io("export counter lock poisoned".to_string()))?;
        Ok(counters.snapshot())
    }
}

fn spawn_worker(
    submit_rx: mpsc::Receiver<ScheduledExport>,
    result_tx: mpsc::Sender<ExportOutcome>,
    counters: Arc<Mutex<CounterState>>,
    renderer: Arc<dyn BakeRenderer>,
    library: Arc<dyn PhotoLibrary>,
) {
    thread::spawn(move || {
        while let Ok(scheduled) = submit_rx.recv() {
            let result = run_export(renderer.as_ref(), library.as_ref(), &scheduled.job);

            if let Ok(mut state) = counters.lock() {
                match &result {
                    Ok(_) => state.completed_jobs += 1,
                    Err(_) => state.failed_jobs += 1,
                }
            }

            let outcome = ExportOutcome {
                sequence: scheduled.sequence,
                result,
            };
            if result_tx.send(outcome).is_err() {
                return;
            }
        }
    });
}

fn run_export(
    renderer: &dyn BakeRenderer,
    library: &dyn PhotoLibrary,
    job: &ExportJob,
) -> Result<SavedPhoto, ApplicationError> {
    match library.request_write_access()? {
        WriteAccess::Granted => {}
        WriteAccess::Denied => {
            return Err(ApplicationError::PermissionDenied(
                "photo library rejected write access".to_string(),
            ));
        }
    }

    let jpeg = renderer.bake(&job.source, &job.preset)?;
    library.save_photo(&jpeg)
}
