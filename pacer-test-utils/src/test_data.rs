// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Small fixtures standing in for the UI events the limiters usually wrap.

/// A scroll-like event with a payload the tests can tell apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollEvent {
    pub offset: u32,
}

pub fn scroll_to(offset: u32) -> ScrollEvent {
    ScrollEvent { offset }
}

/// A search-box keystroke: the query as typed so far.
pub fn query(text: &str) -> String {
    text.to_owned()
}
