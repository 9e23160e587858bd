use crate::domain::model::{Notice, NoticeLevel};
use crate::domain::ports::Notifier;
use std::sync::Mutex;

/// Prints notices to the terminal and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => {
                tracing::info!("{}", notice.message);
                println!("✅ {}", notice.message);
            }
            NoticeLevel::Error => {
                tracing::warn!("{}", notice.message);
                eprintln!("❌ {}", notice.message);
            }
        }
    }
}

/// Keeps every notice in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn errors(&self) -> usize {
        self.notices()
            .iter()
            .filter(|n| n.level == NoticeLevel::Error)
            .count()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}
