use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownPreset)
    }
}

/// Grid size with a mine count per difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreset {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: BTreeMap<Difficulty, CellCount>,
}

impl SizePreset {
    fn new(rows: Coord, cols: Coord, [easy, medium, hard]: [CellCount; 3]) -> Self {
        Self {
            rows,
            cols,
            mines: BTreeMap::from([
                (Difficulty::Easy, easy),
                (Difficulty::Medium, medium),
                (Difficulty::Hard, hard),
            ]),
        }
    }
}

/// Named board presets, keyed by size label such as `"16x30"`.
///
/// This is plain configuration: it only turns labels into a [`BoardConfig`], the engine never
/// looks at it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presets {
    sizes: BTreeMap<String, SizePreset>,
}

impl Presets {
    pub fn new(sizes: BTreeMap<String, SizePreset>) -> Self {
        Self { sizes }
    }

    pub fn get(&self, size: &str) -> Option<&SizePreset> {
        self.sizes.get(size)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(String::as_str)
    }

    pub fn resolve(&self, size: &str, difficulty: Difficulty) -> Result<BoardConfig> {
        let preset = self.get(size).ok_or(GameError::UnknownPreset)?;
        let mines = *preset
            .mines
            .get(&difficulty)
            .ok_or(GameError::UnknownPreset)?;
        BoardConfig::new((preset.rows, preset.cols), mines)
    }
}

impl Default for Presets {
    fn default() -> Self {
        let sizes = [
            SizePreset::new(8, 8, [10, 13, 16]),
            SizePreset::new(10, 10, [15, 20, 25]),
            SizePreset::new(12, 12, [20, 30, 36]),
            SizePreset::new(16, 16, [40, 50, 64]),
            SizePreset::new(16, 30, [60, 99, 120]),
        ]
        .into_iter()
        .map(|preset| {
            let mut label = preset.rows.to_string();
            label.push('x');
            label.push_str(&preset.cols.to_string());
            (label, preset)
        })
        .collect();
        Self { sizes }
    }
}
