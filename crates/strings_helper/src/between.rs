// crates/strings_helper/src/between.rs

use std::iter::FusedIterator;

/// Errors raised before any search is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetweenError {
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        param: &'static str,
        message: &'static str,
    },
}

/// Controls whether the markers themselves are part of the found segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BetweenOptions {
    pub include_start: bool,
    pub include_end: bool,
}

impl BetweenOptions {
    /// Keeps both markers in the segment.
    pub fn inclusive() -> Self {
        Self {
            include_start: true,
            include_end: true,
        }
    }
}

/// Outcome of a single extraction.
///
/// * `found == None, remainder == Some(source)`: the start marker is missing.
/// * `found == None, remainder == None`: the end marker is missing after the start.
/// * `found == Some(_)`: `remainder` is whatever follows the end marker, or
///   `None` when the end marker closes the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Between<'a> {
    pub found: Option<&'a str>,
    pub remainder: Option<&'a str>,
}

fn check_markers(start: &str, end: &str) -> Result<(), BetweenError> {
    if start.is_empty() {
        return Err(BetweenError::InvalidArgument {
            param: "start",
            message: "a start string expected",
        });
    }
    if end.is_empty() {
        return Err(BetweenError::InvalidArgument {
            param: "end",
            message: "an end string expected",
        });
    }
    Ok(())
}

/// Finds the first `start` marker in `source`, then the first `end` marker after it,
/// and returns the text in between together with the unconsumed tail.
///
/// Matching is byte-exact. The end marker is searched only after the whole start
/// marker, so the two never overlap. Feed `remainder` back in as the next `source`
/// to find the following occurrence (see [`segments_between`]).
///
/// # Errors
///
/// Returns [`BetweenError::InvalidArgument`] when either marker is empty.
pub fn get_string_between<'a>(
    source: &'a str,
    start: &str,
    end: &str,
    options: BetweenOptions,
) -> Result<Between<'a>, BetweenError> {
    check_markers(start, end)?;
    Ok(find_between(source, start, end, options))
}

fn find_between<'a>(source: &'a str, start: &str, end: &str, options: BetweenOptions) -> Between<'a> {
    let Some(start_idx) = source.find(start) else {
        return Between {
            found: None,
            remainder: Some(source),
        };
    };
    let after_start = start_idx + start.len();

    let Some(end_offset) = source[after_start..].find(end) else {
        return Between {
            found: None,
            remainder: None,
        };
    };
    let end_idx = after_start + end_offset;
    let after_end = end_idx + end.len();

    let seg_begin = if options.include_start { start_idx } else { after_start };
    let seg_end = if options.include_end { after_end } else { end_idx };

    Between {
        found: Some(&source[seg_begin..seg_end]),
        remainder: (after_end < source.len()).then(|| &source[after_end..]),
    }
}

/// Iterator over every successive segment, driven by the remainder of each match.
#[derive(Debug, Clone)]
pub struct SegmentsBetween<'a, 'm> {
    rest: Option<&'a str>,
    start: &'m str,
    end: &'m str,
    options: BetweenOptions,
    done: bool,
}

impl<'a> SegmentsBetween<'a, '_> {
    /// Text not yet consumed. `None` once an end marker was missing or the last
    /// match closed the source.
    pub fn remainder(&self) -> Option<&'a str> {
        self.rest
    }
}

impl<'a> Iterator for SegmentsBetween<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(source) = self.rest else {
            self.done = true;
            return None;
        };
        let between = find_between(source, self.start, self.end, self.options);
        self.rest = between.remainder;
        if between.found.is_none() {
            self.done = true;
        }
        between.found
    }
}

impl FusedIterator for SegmentsBetween<'_, '_> {}

/// Returns an iterator over all segments of `source` delimited by `start` and `end`.
///
/// Markers are validated once, up front.
pub fn segments_between<'a, 'm>(
    source: &'a str,
    start: &'m str,
    end: &'m str,
    options: BetweenOptions,
) -> Result<SegmentsBetween<'a, 'm>, BetweenError> {
    check_markers(start, end)?;
    Ok(SegmentsBetween {
        rest: Some(source),
        start,
        end,
        options,
        done: false,
    })
}
