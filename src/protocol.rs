//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ChapterNode, Difficulty, FilterCriteria, Problem, ProblemSource, SortPreset, SortRule,
    Worksheet,
};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Chapters,
    FilterProblems {
        criteria: FilterCriteria,
        #[serde(default)]
        rules: Vec<SortRule>,
    },
    DifficultyRange {
        levels: Vec<Difficulty>,
    },
    DifficultyLevels {
        min: u8,
        max: u8,
    },
    BuildWorksheet {
        title: String,
        author: String,
        criteria: FilterCriteria,
        #[serde(default)]
        rules: Vec<SortRule>,
        #[serde(default, rename = "thumbnailPng")]
        thumbnail_png: Option<String>,
    },
    GetWorksheet {
        #[serde(rename = "worksheetId")]
        worksheet_id: String,
    },
    ListWorksheets,
    PublishWorksheet {
        #[serde(rename = "worksheetId")]
        worksheet_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Chapters {
        chapters: Vec<ChapterNode>,
    },
    Problems {
        preset: SortPreset,
        total: usize,
        problems: Vec<ProblemOut>,
    },
    DifficultyRange {
        // None/None when no levels are selected.
        min: Option<u8>,
        max: Option<u8>,
    },
    DifficultyLevels {
        levels: Vec<Difficulty>,
    },
    Worksheet {
        worksheet: WorksheetOut,
    },
    Worksheets {
        worksheets: Vec<WorksheetOut>,
    },
    Published {
        ok: bool,
    },
    Error {
        message: String,
    },
}

/// DTO used by both WS and HTTP for problem delivery.
#[derive(Debug, Serialize)]
pub struct ProblemOut {
    pub id: String,
    pub source: ProblemSource,

    pub chapter_id: Option<String>,
    pub difficulty: Difficulty,
    pub problem_type: String,
    pub subjects: Vec<String>,
    pub tags: Vec<String>,

    pub correct_rate: Option<u8>,
    pub exam_year: Option<u16>,

    pub question_image: String,
    pub answer_image: Option<String>,
}

/// Convert full `Problem` (internal) to the public DTO.
pub fn to_out(p: &Problem) -> ProblemOut {
    ProblemOut {
        id: p.id.clone(),
        source: p.source,

        chapter_id: p.chapter_id.clone(),
        difficulty: p.difficulty,
        problem_type: p.problem_type.clone(),
        subjects: p.subjects.clone(),
        tags: p.tags.clone(),

        correct_rate: p.correct_rate,
        exam_year: p.exam_year,

        question_image: p.question_image.clone(),
        answer_image: p.answer_image.clone(),
    }
}

/// DTO used by both WS and HTTP for worksheet delivery.
#[derive(Debug, Serialize)]
pub struct WorksheetOut {
    pub id: String,
    pub title: String,
    pub author: String,
    pub problem_ids: Vec<String>,
    pub preset: SortPreset,
    pub thumbnail_png: Option<String>,
    pub published: bool,
}

pub fn worksheet_to_out(w: &Worksheet) -> WorksheetOut {
    WorksheetOut {
        id: w.id.clone(),
        title: w.title.clone(),
        author: w.author.clone(),
        problem_ids: w.problem_ids.clone(),
        preset: w.preset,
        thumbnail_png: w.thumbnail_png.clone(),
        published: w.published,
    }
}

//
// HTTP request/response DTOs
//

#[derive(Serialize)]
pub struct ChaptersOut {
    pub chapters: Vec<ChapterNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProblemQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterIn {
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub rules: Vec<SortRule>,
}
#[derive(Serialize)]
pub struct FilterOut {
    pub preset: SortPreset,
    pub total: usize,
    pub problems: Vec<ProblemOut>,
}

#[derive(Debug, Deserialize)]
pub struct RangeIn {
    pub levels: Vec<Difficulty>,
}
#[derive(Serialize)]
pub struct RangeOut {
    pub min: Option<u8>,
    pub max: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct LevelsIn {
    pub min: u8,
    pub max: u8,
}
#[derive(Serialize)]
pub struct LevelsOut {
    pub levels: Vec<Difficulty>,
}

#[derive(Deserialize)]
pub struct WorksheetIn {
    pub title: String,
    pub author: String,
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub rules: Vec<SortRule>,
    #[serde(default, rename = "thumbnailPng")]
    pub thumbnail_png: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WorksheetQuery {
    pub id: String,
}

#[derive(Serialize)]
pub struct WorksheetsOut {
    pub worksheets: Vec<WorksheetOut>,
}

#[derive(Debug, Deserialize)]
pub struct PublishIn {
    #[serde(rename = "worksheetId")]
    pub worksheet_id: String,
}
#[derive(Serialize)]
pub struct PublishOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
