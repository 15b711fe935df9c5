//! Fixture types shared by the integration tests.

#![allow(dead_code)]

use structural_eq::{record, sum_type, Comparable, ComparableEnum};
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("structural_eq=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

record! {
    #[derive(Debug)]
    pub struct Profile {
        pub name: String,
        pub age: i64,
    }
}
impl Comparable for Profile {}

impl Profile {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

record! {
    #[derive(Debug)]
    pub struct Account {
        pub profile: Profile,
    }
}
impl Comparable for Account {}

record! {
    #[derive(Debug)]
    pub struct Span {
        pub bounds: (String, String),
    }
}
impl Comparable for Span {}

impl Span {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            bounds: (start.to_string(), end.to_string()),
        }
    }
}

record! {
    pub struct Handler {
        pub callback: Box<dyn Fn() -> bool>,
    }
}
impl Comparable for Handler {}

record! {
    #[derive(Debug)]
    pub struct Contact {
        pub nickname: Option<String>,
    }
}
impl Comparable for Contact {}

impl Contact {
    pub fn new(nickname: Option<&str>) -> Self {
        Self {
            nickname: nickname.map(str::to_string),
        }
    }
}

sum_type! {
    #[derive(Debug, Clone, Copy)]
    pub enum Level {
        Low,
        High,
    }
}
impl ComparableEnum for Level {}

record! {
    #[derive(Debug)]
    pub struct Setting {
        pub level: Level,
    }
}
impl Comparable for Setting {}

sum_type! {
    #[derive(Debug, Clone)]
    pub enum Token {
        Uno(String),
        Dos(String, i64),
    }
}
impl ComparableEnum for Token {}

record! {
    #[derive(Debug)]
    pub struct Labeled {
        pub value: Token,
    }
}
impl Comparable for Labeled {}

record! {
    #[derive(Debug)]
    pub struct Entity {
        pub id: String,
        pub note: String,
    }
}

impl Comparable for Entity {
    fn equals(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Entity {
    pub fn new(id: &str, note: &str) -> Self {
        Self {
            id: id.to_string(),
            note: note.to_string(),
        }
    }
}
