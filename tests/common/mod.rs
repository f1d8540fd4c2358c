#![allow(dead_code)]

use async_trait::async_trait;
use rusty_golf_relay::controller::destination::DestinationApi;
use rusty_golf_relay::controller::source::SourceFeed;
use rusty_golf_relay::error::AppError;
use rusty_golf_relay::model::{Course, Facility, HoleScores, SubmissionPayload, SubmitOutcome, Tee};
use std::collections::HashMap;
use std::sync::Mutex;

pub const FEED_PAGE: &str = include_str!("../fixtures/feed_page.html");

/// A feed page with `count` well-formed round posts, ids starting at `first_id`.
pub fn feed_page_with_rounds(first_id: u64, count: usize) -> String {
    let posts: String = (0..count as u64)
        .map(|i| {
            let id = first_id + i;
            format!(
                r#"<div data-round-post="newsfeed_{i}"><a class="round-permalink" href="/score/review_score/{id}">Score of round {id} at Course {id} | Club {id} [Tee]</a><span class="round-date">Nov 2, 2025</span></div>"#
            )
        })
        .collect();
    format!("<html><body>{posts}</body></html>")
}

pub fn eighteen_holes() -> HoleScores {
    (1..=18u8).map(|hole| (hole, 4 + hole % 2)).collect()
}

#[derive(Default)]
pub struct FakeSource {
    pub pages: HashMap<u32, String>,
    pub hole_scores: HoleScores,
    pub fail_feed: bool,
    pub fail_scores: bool,
    pub feed_calls: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub fn with_page(html: &str) -> Self {
        Self {
            pages: HashMap::from([(0, html.to_string())]),
            hole_scores: eighteen_holes(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl SourceFeed for FakeSource {
    async fn round_feed(&self, source_user_id: &str, wave: u32) -> Result<String, AppError> {
        self.feed_calls
            .lock()
            .unwrap()
            .push((source_user_id.to_string(), wave));
        if self.fail_feed {
            return Err(AppError::Network("connection refused".into()));
        }
        Ok(self.pages.get(&wave).cloned().unwrap_or_default())
    }

    async fn round_score(&self, _round_id: u64) -> Result<HoleScores, AppError> {
        if self.fail_scores {
            return Err(AppError::Remote {
                status: 503,
                message: "scores unavailable".into(),
            });
        }
        Ok(self.hole_scores.clone())
    }
}

pub struct FakeDestination {
    pub facilities: Vec<Facility>,
    pub courses: Vec<Course>,
    pub fail_search: bool,
    pub fail_courses: bool,
    pub outcome: Result<SubmitOutcome, AppError>,
    pub searches: Mutex<Vec<(String, usize)>>,
    pub course_calls: Mutex<Vec<(i64, i64)>>,
    pub posted: Mutex<Vec<SubmissionPayload>>,
}

impl Default for FakeDestination {
    fn default() -> Self {
        Self {
            facilities: Vec::new(),
            courses: Vec::new(),
            fail_search: false,
            fail_courses: false,
            outcome: Ok(SubmitOutcome::success()),
            searches: Mutex::new(Vec::new()),
            course_calls: Mutex::new(Vec::new()),
            posted: Mutex::new(Vec::new()),
        }
    }
}

pub fn facility(id: i64, name: &str) -> Facility {
    Facility {
        id,
        name: name.to_string(),
    }
}

pub fn course(id: i64, name: &str, tees: &[(i64, &str)]) -> Course {
    Course {
        id,
        name: name.to_string(),
        tees: tees
            .iter()
            .map(|(id, name)| Tee {
                id: *id,
                name: (*name).to_string(),
            })
            .collect(),
    }
}

/// Catalogue for the Pine Valley round in the fixture feed.
pub fn pine_valley_catalogue() -> FakeDestination {
    FakeDestination {
        facilities: vec![
            facility(4410, "Pine Valley Golf Links"),
            facility(4412, "PINE VALLEY CLUB"),
        ],
        courses: vec![
            course(700, "Short Course", &[(9001, "Red")]),
            course(701, "Pine Valley", &[(9010, "White"), (9011, "Blue")]),
        ],
        ..FakeDestination::default()
    }
}

#[async_trait]
impl DestinationApi for FakeDestination {
    async fn search_facilities(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Vec<Facility>, AppError> {
        self.searches.lock().unwrap().push((name.to_string(), limit));
        if self.fail_search {
            return Err(AppError::Remote {
                status: 500,
                message: "search down".into(),
            });
        }
        Ok(self.facilities.iter().take(limit).cloned().collect())
    }

    async fn courses(&self, facility_id: i64, owner_id: i64) -> Result<Vec<Course>, AppError> {
        self.course_calls.lock().unwrap().push((facility_id, owner_id));
        if self.fail_courses {
            return Err(AppError::Network("timed out".into()));
        }
        Ok(self.courses.clone())
    }

    async fn post_score(&self, payload: &SubmissionPayload) -> Result<SubmitOutcome, AppError> {
        self.posted.lock().unwrap().push(payload.clone());
        self.outcome.clone()
    }
}
