//! Single worker thread for work that must leave libVLC's callback threads
//!
//! Event listeners are called while libVLC holds internal locks, so calling
//! back into the player from a listener can deadlock. Such calls are queued
//! here instead and run in submission order on a dedicated thread.

use crate::{Error, Result};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle, ThreadId};

type Task = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    Run(Task),
    Shutdown,
}

/// Cloneable submission side of a [`TaskExecutor`].
#[derive(Clone)]
pub(crate) struct TaskSender(Sender<Message>);

impl TaskSender {
    pub(crate) fn submit<F>(&self, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.0
            .send(Message::Run(Box::new(task)))
            .map_err(|_| Error::ExecutorShutdown)
    }
}

/// Runs submitted closures one at a time, in order, on a worker thread.
pub struct TaskExecutor {
    sender: Mutex<Option<Sender<Message>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    worker_id: ThreadId,
}

impl TaskExecutor {
    pub fn new(name: &str) -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || run(receiver))?;
        let worker_id = worker.thread().id();
        Ok(Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
            worker_id,
        })
    }

    /// Queues a closure. Fails once the executor has shut down.
    pub fn submit<F>(&self, task: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender()?.submit(task)
    }

    pub(crate) fn sender(&self) -> Result<TaskSender> {
        self.sender
            .lock()
            .as_ref()
            .map(|s| TaskSender(s.clone()))
            .ok_or(Error::ExecutorShutdown)
    }

    /// Returns true when called from the worker thread.
    pub fn is_worker_thread(&self) -> bool {
        thread::current().id() == self.worker_id
    }

    /// Stops accepting tasks and waits for queued tasks to finish. When
    /// called from a task the worker is left to exit on its own.
    pub fn shutdown(&self) {
        if let Some(sender) = self.sender.lock().take() {
            let _ = sender.send(Message::Shutdown);
        }
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            if self.is_worker_thread() {
                return;
            }
            if worker.join().is_err() {
                tracing::error!("Task executor thread panicked");
            }
        }
    }
}

impl Drop for TaskExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run(receiver: Receiver<Message>) {
    tracing::debug!("Task executor started");
    while let Ok(Message::Run(task)) = receiver.recv() {
        if catch_unwind(AssertUnwindSafe(task)).is_err() {
            tracing::error!("Submitted task panicked");
        }
    }
    tracing::debug!("Task executor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    #[test]
    fn test_tasks_run_in_order() {
        let executor = TaskExecutor::new("test-executor").unwrap();
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..10 {
            let order = Arc::clone(&order);
            executor.submit(move || order.lock().push(i)).unwrap();
        }
        executor.shutdown();
        assert_eq!(*order.lock(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_tasks_run_off_caller_thread() {
        let executor = TaskExecutor::new("test-executor").unwrap();
        let caller = thread::current().id();
        let (tx, rx) = mpsc::channel();
        executor
            .submit(move || tx.send(thread::current().id()).unwrap())
            .unwrap();
        let ran_on = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_ne!(ran_on, caller);
    }

    #[test]
    fn test_panic_does_not_kill_worker() {
        let executor = TaskExecutor::new("test-executor").unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        executor.submit(|| panic!("task failure")).unwrap();
        let counter = Arc::clone(&count);
        executor
            .submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        executor.shutdown();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_after_shutdown_fails() {
        let executor = TaskExecutor::new("test-executor").unwrap();
        executor.shutdown();
        assert!(matches!(
            executor.submit(|| {}),
            Err(Error::ExecutorShutdown)
        ));
    }

    #[test]
    fn test_shutdown_ignores_outstanding_senders() {
        let executor = TaskExecutor::new("test-executor").unwrap();
        let sender = executor.sender().unwrap();
        executor.shutdown();
        // the worker has exited, so the queued task is never run
        assert!(sender.submit(|| {}).is_err());
    }

    #[test]
    fn test_shutdown_from_worker_thread() {
        let executor = Arc::new(TaskExecutor::new("test-executor").unwrap());
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&executor);
        executor
            .submit(move || {
                inner.shutdown();
                tx.send(inner.is_worker_thread()).unwrap();
            })
            .unwrap();
        assert!(rx.recv_timeout(Duration::from_secs(5)).unwrap());
    }
}
