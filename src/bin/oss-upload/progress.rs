// Progress bar display for oss-upload

use indicatif::{ProgressBar, ProgressStyle};
use oss_upload::UploadProgress;
use std::sync::atomic::{AtomicU64, Ordering};

/// Progress bar over uploaded files
pub struct UploadProgressBar {
    bar: ProgressBar,
    total_bytes: AtomicU64,
    transferred_bytes: AtomicU64,
}

impl UploadProgressBar {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
        bar.set_style(style);

        Self {
            bar,
            total_bytes: AtomicU64::new(0),
            transferred_bytes: AtomicU64::new(0),
        }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl UploadProgress for UploadProgressBar {
    fn on_start(&self, total_files: usize, total_bytes: u64) {
        self.total_bytes.store(total_bytes, Ordering::SeqCst);
        self.bar.set_length(total_files as u64);
    }

    fn on_file_complete(&self, key: &str, bytes: u64) {
        let transferred = self.transferred_bytes.fetch_add(bytes, Ordering::SeqCst) + bytes;
        self.bar.inc(1);
        self.bar.set_message(format!(
            "{} ({}/{})",
            key,
            format_bytes(transferred),
            format_bytes(self.total_bytes.load(Ordering::SeqCst))
        ));
    }
}

/// Format bytes into human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }

    #[test]
    fn test_progress_counts() {
        let progress = UploadProgressBar::new();
        progress.on_start(2, 30);
        progress.on_file_complete("a.txt", 10);
        progress.on_file_complete("b.txt", 20);
        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.bar.length(), Some(2));
        assert_eq!(progress.transferred_bytes.load(Ordering::SeqCst), 30);
    }
}
