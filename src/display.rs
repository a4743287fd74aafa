use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::board::{Board, Cell};
use connect4_engine::WIDTH;

/// Draws the board to stdout, top row first
pub fn draw(board: &Board, color: bool) -> Result<()> {
    let mut stdout = stdout();

    if !color {
        write!(stdout, "{}", board)?;
        stdout.flush()?;
        return Ok(());
    }

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in board.rows().iter() {
        for cell in row.iter() {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
