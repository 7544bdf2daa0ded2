#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the nos-tlplot binary.
#[macro_export]
macro_rules! nos_tlplot {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nos-tlplot"))
    };
}

pub const HEADER: &str = "\"Author, Year\",Representativeness,Non-exposed Selection,\
Exposure Ascertainment,Outcome Absent at Start,Comparability (Age/Gender),\
Comparability (Other),Outcome Assessment,Follow-up Length,Follow-up Adequacy,\
Total Score,Overall RoB";

/// Four consistent studies spanning every tier.
pub const SAMPLE_ROWS: &str = "\
\"Smith, 2020\",1,1,1,1,1,1,1,1,1,9,Low
\"Jones, 2019\",1,1,0,0,1,0,1,1,0,5,Moderate
\"Lee, 2021\",1,0,0,0,0,0,0,1,0,2,High
\"Garcia, 2018\",1,1,1,0,1,1,1,0,0,6,Moderate
";

/// Temporary directory holding input tables, configs, and chart output.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a table with the canonical header and the given data rows.
    pub fn create_table(&self, name: &str, rows: &str) -> PathBuf {
        self.create_file(name, &format!("{HEADER}\n{rows}"))
    }

    pub fn create_sample(&self) -> PathBuf {
        self.create_table("data.csv", SAMPLE_ROWS)
    }

    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".nos-tlplot.toml", content)
    }

    pub fn files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("Failed to list directory")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
