use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use farmdice::{GameId, Recorder, TurnRecord};
use serde::Serialize;

/// Column names of the turn log, in the order of [`TurnRecord`]'s fields.
pub const TURN_LOG_COLUMNS: [&str; 14] = [
    "game_id",
    "round",
    "player_id",
    "roll_1_dice",
    "roll_1_reset",
    "roll_1_chickens",
    "roll_1_foxes",
    "roll_1_bust",
    "roll_2_dice",
    "roll_2_pass",
    "roll_2_chickens",
    "roll_2_foxes",
    "roll_2_bust",
    "turn_score",
];

/// Appends every turn of every game to a single CSV file.
pub struct CsvRecorder {
    writer: csv::Writer<BufWriter<File>>,
}

impl CsvRecorder {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        writer.write_record(TURN_LOG_COLUMNS)?;
        Ok(Self { writer })
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Recorder for CsvRecorder {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }
}

/// Collects the turns of one game and writes them to a numbered JSON file.
pub struct GameRecorder {
    num: usize,
    directory: PathBuf,
    turns: Vec<TurnRecord>,
}

#[derive(Serialize)]
struct GameRecording<'a> {
    game_id: GameId,
    turns: &'a [TurnRecord],
}

impl GameRecorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            turns: Vec::new(),
        })
    }

    pub fn write_game_recording(&mut self, game_id: GameId) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        let turns = std::mem::take(&mut self.turns);
        serde_json::to_writer_pretty(
            &mut writer,
            &GameRecording {
                game_id,
                turns: &turns,
            },
        )?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

impl Recorder for GameRecorder {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.turns.push(record.clone());
        Ok(())
    }
}

/// Hands each record to several recorders, stopping at the first failure.
#[derive(Default)]
pub struct Fanout<'a> {
    recorders: Vec<&'a mut dyn Recorder>,
}

impl<'a> Fanout<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, recorder: &'a mut dyn Recorder) -> Self {
        self.recorders.push(recorder);
        self
    }
}

impl Recorder for Fanout<'_> {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        for recorder in self.recorders.iter_mut() {
            recorder.record(record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use farmdice::PlayerId;

    use super::*;

    fn sample_record(round: u32) -> TurnRecord {
        TurnRecord {
            game_id: GameId::new(),
            round,
            player_id: PlayerId::new(),
            roll_1_dice: 4,
            roll_1_chickens: 2,
            roll_2_pass: true,
            turn_score: 2,
            ..TurnRecord::default()
        }
    }

    #[test]
    fn csv_has_header_and_flags_as_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turns.csv");
        let mut recorder = CsvRecorder::create(&path).unwrap();
        let record = sample_record(3);
        recorder.record(&record).unwrap();
        recorder.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), TURN_LOG_COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            format!(
                "{},3,{},4,0,2,0,0,0,1,0,0,0,2",
                record.game_id, record.player_id
            )
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn game_recordings_are_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = GameRecorder::new(dir.path().to_path_buf()).unwrap();
        recorder.record(&sample_record(0)).unwrap();
        recorder.record(&sample_record(0)).unwrap();
        let first = recorder.write_game_recording(GameId::new()).unwrap();
        let second = recorder.write_game_recording(GameId::new()).unwrap();
        assert!(first.ends_with("game_000001.json"));
        assert!(second.ends_with("game_000002.json"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(first).unwrap()).unwrap();
        assert_eq!(json["turns"].as_array().unwrap().len(), 2);
        assert_eq!(json["turns"][0]["roll_2_pass"], 1);
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(second).unwrap()).unwrap();
        assert!(json["turns"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameRecorder::new(dir.path().join("nope")).is_err());
    }

    #[test]
    fn fanout_reaches_every_recorder() {
        let mut a: Vec<TurnRecord> = Vec::new();
        let mut b: Vec<TurnRecord> = Vec::new();
        let mut fanout = Fanout::new().with(&mut a).with(&mut b);
        fanout.record(&sample_record(1)).unwrap();
        drop(fanout);
        assert_eq!(a.len(), 1);
        assert_eq!(a, b);
    }
}
