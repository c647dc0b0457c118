//! Shared fixtures for command tests

#![allow(dead_code)]

use std::path::PathBuf;

use shiftpulse_domain::Config;
use shiftpulse_lib::{AppContext, CatalogPaths};
use tempfile::TempDir;

pub const CALENDAR_CSV: &str = "\
date,day_shift,night_shift
2026-03-09,C,D
2026-03-10,A,B
";

pub const MAPPING_CSV: &str = "\
raw_description,category,process_name,sequence
Paint,BT Complete,Paint,5
Cut,BT Process,Cut,1
";

pub const RECORDS_CSV: &str = "\
worker,process,start,end,actual_minutes,standard_time,rate,result_cnt,rework
W1,Cut,2026-03-10 08:00,2026-03-10 09:30,60,30,100,X,
W1,Paint,2026-03-10 08:00,2026-03-10 09:30,60,45,100,X,
W2,Cut,2026-03-10 20:00,2026-03-10 21:00,60,66,100,X,
";

/// Workspace with calendar, mapping and records files
pub struct Workspace {
    pub dir: TempDir,
    pub calendar: PathBuf,
    pub mapping: PathBuf,
    pub records: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let write = |name: &str, contents: &str| {
            let path = dir.path().join(name);
            std::fs::write(&path, contents).expect("fixture should be written");
            path
        };
        let calendar = write("calendar.csv", CALENDAR_CSV);
        let mapping = write("mapping.csv", MAPPING_CSV);
        let records = write("records.csv", RECORDS_CSV);
        Self { dir, calendar, mapping, records }
    }

    pub fn paths(&self) -> CatalogPaths {
        CatalogPaths { calendar: Some(self.calendar.clone()), mapping: Some(self.mapping.clone()) }
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(Config::default(), self.paths()).expect("context should build")
    }
}
