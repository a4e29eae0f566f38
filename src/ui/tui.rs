use std::io::{self, Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::{FutureExt, Stream, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and a background task that forwards key and resize
/// events. When that task stops for any reason (stream error, panic) the
/// event channel closes and `next_event` yields `None`.
pub struct TuiRunner {
    terminal: Tui,
    events: UnboundedReceiver<Event>,
    input: Option<InputTask>,
}

struct InputTask {
    handle: JoinHandle<()>,
    stop: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        // Replaced by the real channel in `enter`; closed until then.
        let (_, events) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            events,
            input: None,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        let (tx, rx) = mpsc::unbounded_channel();
        let stop = CancellationToken::new();
        let handle = tokio::spawn(forward_input(EventStream::new(), tx, stop.clone()));
        self.events = rx;
        self.input = Some(InputTask { handle, stop });
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(input) = self.input.take() {
            input.stop.cancel();
            input.handle.abort();
        }
        if crossterm::terminal::is_raw_mode_enabled()? {
            execute!(stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

async fn forward_input<S>(mut stream: S, tx: UnboundedSender<Event>, stop: CancellationToken)
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    if tx.send(Event::Init).is_err() {
        return;
    }

    loop {
        let next = tokio::select! {
            () = stop.cancelled() => return,
            next = stream.next().fuse() => next,
        };

        let event = match next {
            Some(Ok(CrosstermEvent::Key(key)))
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
            {
                Event::Key(key)
            }
            Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
            Some(Ok(_)) => continue,
            Some(Err(err)) => {
                tracing::error!(error = %err, "terminal input stream failed");
                return;
            }
            None => {
                tracing::warn!("terminal input stream ended");
                return;
            }
        };

        if tx.send(event).is_err() {
            return;
        }
    }
}
