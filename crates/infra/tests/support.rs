//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directory that keeps written fixture files alive for the
/// duration of a test.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("temp dir should be created") }
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("fixture should be written");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub const RECORDS_CSV: &str = "\
worker,process,start,end,actual_minutes,standard_time,rate,result_cnt,rework
W1,Cut,2026-03-10 08:00,2026-03-10 09:30,60,50,100,X,
W1,CUT,2026-03-10T08:00:00,2026-03-10T09:30:00,60,50,100,x,no
W2,Paint,2026-03-10 02:00:00,,30,30,120,X,false
W2,Paint,,,15,10,100,X,yes
";

pub const CALENDAR_CSV: &str = "\
date,day_shift,night_shift
2026-03-09,C,D
2026-03-10,A,B
2026-03-10,a,c
";

pub const MAPPING_CSV: &str = "\
raw_description,category,process_name,sequence
Cut,BT Process,Cut,1
Fit-Up (50%),BT Process,Fit Up,2
Paint,BT Complete,Paint,5
";
