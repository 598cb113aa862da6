use activity_board_core::application::{ActivityCard, Listing, NO_PARTICIPANTS_TEXT};
use activity_board_core::{BoardView, RenderTarget};
use std::fmt;
use std::io::{self, Write};

/// Keeps the latest frame; a one-shot command prints it once at the end.
#[derive(Debug, Default)]
pub struct TerminalTarget {
    latest: Option<BoardView>,
    frames: usize,
}

impl TerminalTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&BoardView> {
        self.latest.as_ref()
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Write the latest frame
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(view) = &self.latest {
            write!(out, "{}", BoardText(view))?;
        }
        out.flush()
    }
}

impl RenderTarget for TerminalTarget {
    fn render(&mut self, view: &BoardView) {
        self.frames += 1;
        tracing::trace!(frame = self.frames, busy = view.busy, "Frame rendered");
        self.latest = Some(view.clone());
    }
}

fn write_card(out: &mut impl fmt::Write, card: &ActivityCard) -> fmt::Result {
    writeln!(out, "{}", card.name)?;
    writeln!(out, "  {}", card.description)?;
    writeln!(out, "  Category: {}", card.category)?;
    writeln!(out, "  Schedule: {}", card.schedule)?;
    writeln!(out, "  Availability: {}", card.availability_text())?;
    if card.participants.is_empty() {
        return writeln!(out, "  {}", NO_PARTICIPANTS_TEXT);
    }
    writeln!(out, "  Participants:")?;
    for participant in &card.participants {
        writeln!(out, "    - {}", participant.email)?;
    }
    Ok(())
}

/// Plain-text rendering of a frame
pub struct BoardText<'a>(pub &'a BoardView);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        if let Some(notice) = &view.notice {
            writeln!(f, "[{}] {}", notice.kind.css_class(), notice.text)?;
            writeln!(f)?;
        }

        match &view.listing {
            Listing::Cards(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write_card(f, card)?;
                }
                Ok(())
            }
            other => writeln!(f, "{}", other.placeholder().unwrap_or_default()),
        }
    }
}

pub fn format_board(view: &BoardView) -> String {
    BoardText(view).to_string()
}
