//! Simulated university data for the Provost reference runtime.
//!
//! All data in this module is hardcoded and fictional. The roster stands in
//! for a real staff directory; the submissions stand in for a results
//! upload feed.

use std::sync::Arc;

use provost_audit::InMemoryLedger;
use provost_contracts::{error::ProvostResult, submission::ResultSubmission};
use provost_directory::TomlDirectory;
use provost_engine::{ApprovalEngine, InMemoryResultStore, TracingEventSink};

/// The embedded roster for the reference university.
///
/// One holder per hierarchy role, plus an admin. Loaded through the same
/// `TomlDirectory` a real deployment would point at its own roster file.
pub const UNIVERSITY_ROSTER: &str = include_str!("../rosters/university.toml");

/// A fully wired engine stack over in-memory collaborators.
///
/// The store and ledger handles are kept so scenarios can drive the read
/// path (visibility, audit queries) against the same state the engine
/// mutates.
pub struct UniversityFixture {
    pub store: Arc<InMemoryResultStore>,
    pub ledger: Arc<InMemoryLedger>,
    pub engine: ApprovalEngine,
    /// A second directory handle for actor lookups; the engine owns its own.
    pub directory: TomlDirectory,
}

/// Wire up the reference university: roster directory, in-memory store,
/// hash-chained ledger, tracing event sink.
pub fn university() -> ProvostResult<UniversityFixture> {
    let store = Arc::new(InMemoryResultStore::new());
    let ledger = Arc::new(InMemoryLedger::new("university-main"));
    let directory = TomlDirectory::from_toml_str(UNIVERSITY_ROSTER)?;

    let engine = ApprovalEngine::new(
        store.clone(),
        ledger.clone(),
        Box::new(TomlDirectory::from_toml_str(UNIVERSITY_ROSTER)?),
        Box::new(TracingEventSink),
    );

    Ok(UniversityFixture {
        store,
        ledger,
        engine,
        directory,
    })
}

/// The CS301 sample submission (derives grade A).
pub fn cs301_submission() -> ResultSubmission {
    ResultSubmission {
        student_id: "CS2021001".to_string(),
        student_name: "John Smith".to_string(),
        course_code: "CS301".to_string(),
        course_name: "Data Structures and Algorithms".to_string(),
        score: 85,
        grade: None,
        semester: "Fall 2024".to_string(),
        academic_year: "2024-2025".to_string(),
        comments: None,
    }
}

/// The CS302 sample submission (derives grade A+).
pub fn cs302_submission() -> ResultSubmission {
    ResultSubmission {
        student_id: "CS2021002".to_string(),
        student_name: "Emily Davis".to_string(),
        course_code: "CS302".to_string(),
        course_name: "Database Management Systems".to_string(),
        score: 92,
        grade: None,
        semester: "Fall 2024".to_string(),
        academic_year: "2024-2025".to_string(),
        comments: None,
    }
}

/// The CS303 sample submission (derives grade B).
pub fn cs303_submission() -> ResultSubmission {
    ResultSubmission {
        student_id: "CS2021003".to_string(),
        student_name: "Aisha Bello".to_string(),
        course_code: "CS303".to_string(),
        course_name: "Operating Systems".to_string(),
        score: 71,
        grade: None,
        semester: "Fall 2024".to_string(),
        academic_year: "2024-2025".to_string(),
        comments: None,
    }
}
