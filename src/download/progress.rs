use std::io::{self, Read};
use std::time::Duration;

use indicatif::{HumanBytes, ProgressBar, ProgressDrawTarget, ProgressStyle};

// Trait to homogenize the progress tracking, so the copy loop is not dependent on indicatif.
pub trait ProgressTracker {
    fn start(&self, total_bytes: u64);
    fn update_progress(&self, bytes: usize);
    fn finish(&self, msg: &str);
    fn abandon(&self, msg: &str);
}

const BAR_TEMPLATE: &str =
    "{msg} [{bar:40.cyan/blue}] {bytes:>10}/{total_bytes:<10} {bytes_per_sec:>12} ETA {eta}";

/// Bars are expected to be created hidden; they only draw once a transfer
/// actually starts.
impl ProgressTracker for ProgressBar {
    fn start(&self, total_bytes: u64) {
        if self.is_hidden() {
            self.set_draw_target(ProgressDrawTarget::stderr());
        }
        self.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.set_length(total_bytes);
        self.set_position(0);
        self.enable_steady_tick(Duration::from_millis(100));
    }

    fn update_progress(&self, bytes: usize) {
        self.inc(bytes as u64);
    }

    fn finish(&self, msg: &str) {
        self.finish_with_message(msg.to_string());
    }

    fn abandon(&self, msg: &str) {
        self.abandon_with_message(msg.to_string());
    }
}

/// Reader decorator that reports every forwarded byte to a tracker.
///
/// The tracker is finalized when the reader is dropped: `finish` if
/// [`ProgressReader::complete`] was called, `abandon` otherwise. Early returns
/// out of a copy loop therefore always leave the bar in a final state.
pub struct ProgressReader<'a, R, P: ProgressTracker> {
    inner: R,
    tracker: &'a P,
    transferred: u64,
    total: u64,
    completed: bool,
}

impl<'a, R: Read, P: ProgressTracker> ProgressReader<'a, R, P> {
    pub fn new(inner: R, tracker: &'a P, total: u64) -> Self {
        tracker.start(total);
        Self {
            inner,
            tracker,
            transferred: 0,
            total,
            completed: false,
        }
    }

    pub fn complete(mut self) -> u64 {
        self.completed = true;
        self.transferred
    }
}

impl<R: Read, P: ProgressTracker> Read for ProgressReader<'_, R, P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.transferred += n as u64;
            self.tracker.update_progress(n);
        }
        Ok(n)
    }
}

impl<R, P: ProgressTracker> Drop for ProgressReader<'_, R, P> {
    fn drop(&mut self) {
        if self.completed {
            self.tracker
                .finish(&format!("Downloaded {}", HumanBytes(self.transferred)));
        } else {
            self.tracker.abandon(&format!(
                "Download failed at {}/{}",
                HumanBytes(self.transferred),
                HumanBytes(self.total)
            ));
        }
    }
}
