//! JSON-lines trace of landings, enabled by `TETRIS_TRACE_PATH`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{LandingReport, Snapshot};

#[derive(Debug, Serialize)]
struct TraceLine<'a> {
    seq: u64,
    landing: &'a LandingReport,
    snapshot: &'a Snapshot,
}

/// Appends one JSON object per landing.
pub struct LandingTrace<W: Write> {
    out: W,
    seq: u64,
}

impl LandingTrace<BufWriter<File>> {
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening trace file {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LandingTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, seq: 0 }
    }

    pub fn record(&mut self, landing: &LandingReport, snapshot: &Snapshot) -> Result<()> {
        self.seq += 1;
        let line = TraceLine {
            seq: self.seq,
            landing,
            snapshot,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameConfig, PieceFactory};
    use crate::types::{Command, PieceKind};

    #[test]
    fn records_one_line_per_landing() {
        let mut game = Game::with_factory(GameConfig::default(), PieceFactory::scripted(&[PieceKind::O]));
        let mut trace = LandingTrace::new(Vec::new());

        for _ in 0..2 {
            game.command(Command::Drop);
            let landing = game.take_last_landing().unwrap();
            trace.record(&landing, &game.snapshot()).unwrap();
        }

        let text = String::from_utf8(trace.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["seq"], 2);
        assert_eq!(lines[1]["landing"]["kind"], "o");
        assert_eq!(lines[1]["snapshot"]["score"], 10);
        assert_eq!(lines[1]["snapshot"]["settled"].as_array().unwrap().len(), 8);
    }
}
