use std::fmt;
use std::io::Write;

use itertools::*;

use crate::board::Board;

const NO_NEXT_TRAIN: &str = "直近の発車予定はありません";
const NO_TRAINS_LEFT: &str = "本日分の列車は終了しました";
const FOOTER: &str = "ラピッド急行トラッカー";

// Clear screen, cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        writeln!(f, "現在時刻  {}", self.clock)?;
        match &self.next {
            Some(next) => {
                writeln!(f, "次の電車  {}", next.departure)?;
                writeln!(f, "行き先：{}", next.destination)?;
                writeln!(f, "あと {} 分", next.minutes_until)?;
            }
            None => {
                writeln!(f, "次の電車  {}", NO_NEXT_TRAIN)?;
                writeln!(f)?;
                writeln!(f, "-")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.heading)?;

        if self.remaining.is_empty() {
            writeln!(f, "  {}", NO_TRAINS_LEFT)?;
        } else {
            let rows = self
                .remaining
                .iter()
                .enumerate()
                .map(|(i, train)| {
                    let marker = if i == 0 { '▶' } else { ' ' };
                    format!("{} {:>5}  {}", marker, train.departure, train.destination)
                })
                .join("\n");
            writeln!(f, "{}", rows)?;
        }

        writeln!(f)?;
        write!(f, "{}", FOOTER)
    }
}

/// Redraws the whole terminal with `board`.
pub fn draw(out: &mut impl Write, board: &Board) -> std::io::Result<()> {
    write!(out, "{}{}\n[Enter] 方向切替  [q] 終了\n", CLEAR, board)?;
    out.flush()
}
