use std::io::{BufRead, Write};

mod application;
mod components;
mod message;
mod pages;

use axer::calendar::memory::MemoryCalendarStore;
use axer::config::AxerConfig;

use application::{Axer, Flow, LaunchMode};
use message::Message;

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Journal sink that lets axer records through at info, or debug while
/// debug logging is on, and everything else from warn up.
struct AxerJournal {
    journal: systemd_journal_logger::JournalLog,
}

impl AxerJournal {
    fn threshold(target: &str) -> log::LevelFilter {
        match target.starts_with("axer") {
            true if axer::debug_logging() => log::LevelFilter::Debug,
            true => log::LevelFilter::Info,
            false => log::LevelFilter::Warn,
        }
    }
}

impl log::Log for AxerJournal {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= Self::threshold(metadata.target())
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.journal.log(record);
        }
    }

    fn flush(&self) {
        self.journal.flush();
    }
}

/// Read with `journalctl --user -t axer`.
fn init_logging() -> Result<(), log::SetLoggerError> {
    let journal = match systemd_journal_logger::JournalLog::new() {
        Ok(journal) => journal.with_syslog_identifier("axer".to_string()),
        Err(e) => {
            eprintln!("Journal logging unavailable: {}", e);
            return Ok(());
        }
    };
    log::set_boxed_logger(Box::new(AxerJournal { journal }))?;
    // The `debug` command raises axer's threshold at runtime.
    log::set_max_level(log::LevelFilter::Debug);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;
    let config = AxerConfig::load();
    axer::set_debug_logging(config.debug_logging);

    let launch_mode = if std::env::args().any(|a| a == "--today") {
        LaunchMode::Today
    } else {
        LaunchMode::Normal
    };

    let mut app = Axer::new(config, MemoryCalendarStore::new());
    app.init(now()).await;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", app.view(now()))?;
    if launch_mode == LaunchMode::Today {
        return Ok(());
    }

    let stdin = std::io::stdin();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(message) = Message::parse(&line) else {
            continue;
        };
        if app.update(message, now()).await == Flow::Exit {
            break;
        }
        writeln!(stdout, "{}", app.view(now()))?;
    }

    log::info!("Exiting");
    Ok(())
}
