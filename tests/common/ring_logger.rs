use log::{Level, LevelFilter, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Mutex, Once};

// Keeps the most recent lines only. Tests in one binary share the buffer,
// so assertions look for lines they produced rather than exact contents.
const RING_BUFFER_SIZE: usize = 256;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

static INIT: Once = Once::new();

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the ring logger once per test binary.
pub fn init_logger() {
    INIT.call_once(|| {
        log::set_logger(&RingLogger)
            .map(|()| log::set_max_level(LevelFilter::Trace))
            .unwrap();
    });
}

/// True if any buffered line contains `needle`.
pub fn logged(needle: &str) -> bool {
    LOG_BUFFER
        .lock()
        .unwrap()
        .iter()
        .any(|line| line.contains(needle))
}

pub fn dump_log() {
    let buffer = LOG_BUFFER.lock().unwrap();
    if buffer.is_empty() {
        println!("Log buffer is empty.");
        return;
    }

    println!("--- LAST {} LOG LINES ---", buffer.len());
    for (i, line) in buffer.iter().enumerate() {
        let rel = (i as i32) - (buffer.len() as i32) + 1;
        println!("{:>4}. {}", rel, line);
    }
}
