//! The three DigiDB tables, loaded once and passed to every command.

use std::path::{Path, PathBuf};

use csvshape::{Parsed, RecordMapper};
use serde::Serialize;
use tracing::debug;

pub const DIGIMON_FILE: &str = "DigiDB_digimonlist.csv";
pub const MOVE_FILE: &str = "DigiDB_movelist.csv";
pub const SUPPORT_FILE: &str = "DigiDB_supportlist.csv";

csvshape::record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Digimon {
        pub number: i32,
        pub digimon: String,
        pub stage: String,
        #[serde(rename = "type")]
        pub kind as "type": String,
        pub attribute: String,
        pub memory: i32,
        pub equip_slots: i32,
        pub lv_50_hp: i32,
        pub lv_50_sp: i32,
        pub lv_50_atk: i32,
        pub lv_50_def: i32,
        pub lv_50_int: i32,
        pub lv_50_spd: i32,
    }
}

csvshape::record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Move {
        #[serde(rename = "move")]
        pub name as "move": String,
        pub sp_cost: i32,
        #[serde(rename = "type")]
        pub kind as "type": String,
        pub power: i32,
        pub attribute: String,
        pub inheritable: bool,
        pub description: String,
    }
}

csvshape::record! {
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Support {
        pub name: String,
        pub description: String,
    }
}

/// A record that can be printed as one line of a plain-text table.
pub trait Row {
    fn cells(&self) -> Vec<String>;
}

impl Row for Digimon {
    fn cells(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.digimon.clone(),
            self.stage.clone(),
            self.kind.clone(),
            self.attribute.clone(),
            self.memory.to_string(),
            self.equip_slots.to_string(),
            self.lv_50_hp.to_string(),
            self.lv_50_sp.to_string(),
            self.lv_50_atk.to_string(),
            self.lv_50_def.to_string(),
            self.lv_50_int.to_string(),
            self.lv_50_spd.to_string(),
        ]
    }
}

impl Row for Move {
    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sp_cost.to_string(),
            self.kind.clone(),
            self.power.to_string(),
            self.attribute.clone(),
            self.inheritable.to_string(),
            self.description.clone(),
        ]
    }
}

impl Row for Support {
    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

/// Loaded DigiDB tables.
#[derive(Debug)]
pub struct Database {
    pub digimon: Parsed<Digimon>,
    pub moves: Parsed<Move>,
    pub support: Parsed<Support>,
}

impl Database {
    /// Load all three tables from `data_dir`.
    pub fn load(data_dir: &Path) -> csvshape::Result<Self> {
        let digimon = load_table(data_dir.join(DIGIMON_FILE))?;
        let moves = load_table(data_dir.join(MOVE_FILE))?;
        let support = load_table(data_dir.join(SUPPORT_FILE))?;

        debug!(
            digimon = digimon.len(),
            moves = moves.len(),
            support = support.len(),
            "loaded database"
        );
        Ok(Self {
            digimon,
            moves,
            support,
        })
    }

    /// Find the single Digimon with exactly this name.
    pub fn find_digimon(&self, name: &str) -> Result<&Digimon, String> {
        let mut matches = self.digimon.iter().filter(|d| d.digimon == name);

        match (matches.next(), matches.next()) {
            (Some(digimon), None) => Ok(digimon),
            (None, _) => Err(format!("No Digimon named '{}'", name)),
            (Some(_), Some(_)) => Err(format!("More than one Digimon named '{}'", name)),
        }
    }

    /// Moves whose attribute matches the Digimon's attribute.
    pub fn moves_for<'a>(&'a self, digimon: &'a Digimon) -> impl Iterator<Item = &'a Move> + 'a {
        self.moves
            .iter()
            .filter(move |m| m.attribute == digimon.attribute)
    }
}

fn load_table<T: csvshape::Record>(path: PathBuf) -> csvshape::Result<Parsed<T>> {
    let mapper = RecordMapper::<T>::new()?;
    mapper.parse_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_database(dir: &Path) {
        fs::write(
            dir.join(DIGIMON_FILE),
            "Number,Digimon,Stage,Type,Attribute,Memory,Equip Slots,Lv 50 HP,Lv50 SP,Lv50 Atk,Lv50 Def,Lv50 Int,Lv50 Spd\n\
             7,Agumon,Rookie,Vaccine,Fire,5,1,1030,101,121,98,87,98\n\
             8,Gabumon,Rookie,Data,Water,5,1,1070,94,104,109,89,89\n",
        )
        .unwrap();
        fs::write(
            dir.join(MOVE_FILE),
            "Move,SP Cost,Type,Power,Attribute,Inheritable,Description\n\
             Pepper Breath,5,Physical,65,Fire,Yes,\"Fires a ball of flame, hitting one foe\"\n\
             Bubble,3,Magic,40,Water,Yes,Sprays bubbles\n\
             Fire Wall,12,Magic,90,Fire,No,Engulfs all foes\n",
        )
        .unwrap();
        fs::write(
            dir.join(SUPPORT_FILE),
            "Name,Description\nCourage,Raises ATK\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_and_filter_moves() {
        let dir = tempfile::tempdir().unwrap();
        write_database(dir.path());

        let db = Database::load(dir.path()).unwrap();
        assert_eq!(db.digimon.len(), 2);
        assert_eq!(db.support.records[0].name, "Courage");

        let agumon = db.find_digimon("Agumon").unwrap();
        let moves: Vec<_> = db.moves_for(agumon).map(|m| m.name.as_str()).collect();
        assert_eq!(moves, vec!["Pepper Breath", "Fire Wall"]);
    }

    #[test]
    fn test_find_digimon_missing_and_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        write_database(dir.path());
        let mut db = Database::load(dir.path()).unwrap();

        assert!(db.find_digimon("Patamon").is_err());

        let twin = db.digimon.records[0].clone();
        db.digimon.records.push(twin);
        let err = db.find_digimon("Agumon").unwrap_err();
        assert!(err.contains("More than one"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Database::load(dir.path()).unwrap_err();
        assert!(matches!(err, csvshape::CsvShapeError::Io { .. }));
    }

    #[test]
    fn test_cells_match_header_width() {
        let digimon = Digimon::default();
        assert_eq!(digimon.cells().len(), 13);
        assert_eq!(Move::default().cells().len(), 7);
    }
}
