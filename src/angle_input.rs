///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{widget::Controller, Env, Event, EventCtx, Widget};
use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::config::AngleRange;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// AngleInputError
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AngleInputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("{0} is outside the accepted angle range")]
    OutOfRange(f64),
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Validation
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Drops everything that is not a decimal digit.
///
/// Digits from any script survive here; anything outside ASCII then fails to parse, which
/// rejects the whole keystroke.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| is_decimal_digit(*c)).collect()
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Parses already sanitized text. Empty text is a valid "no value yet".
pub fn parse_angle(text: &str) -> Result<Option<f64>, AngleInputError> {
    parse_angle_in(text, &AngleRange::default())
}

pub fn parse_angle_in(text: &str, range: &AngleRange) -> Result<Option<f64>, AngleInputError> {
    if text.is_empty() {
        return Ok(None);
    }

    // `f64::from_str` only knows ASCII digits.
    let value: f64 = text
        .parse()
        .map_err(|_| AngleInputError::NotANumber(text.to_string()))?;

    if range.contains(value) {
        Ok(Some(value))
    } else {
        Err(AngleInputError::OutOfRange(value))
    }
}

/// Returns the text the field should hold after a keystroke produced `proposed`.
///
/// The proposal is stripped down to its digits first. It is accepted when that leaves nothing or
/// a value inside the range; otherwise the keystroke is dropped and `current` is kept.
pub fn validate(current: &str, proposed: &str) -> String {
    validate_in(current, proposed, &AngleRange::default())
}

pub fn validate_in(current: &str, proposed: &str, range: &AngleRange) -> String {
    let sanitized = sanitize(proposed);
    match parse_angle_in(&sanitized, range) {
        Ok(_) => sanitized,
        Err(err) => {
            log::trace!("Rejected keystroke: {}", err);
            current.to_string()
        }
    }
}

/// Decides what the field holds after its text box turned `previous` into `edited`.
///
/// Returns `None` when the edit stands, or the text to write back otherwise.
pub fn correct_edit(previous: &str, edited: &str, range: &AngleRange) -> Option<String> {
    if edited == previous {
        return None;
    }
    let accepted = validate_in(previous, edited, range);
    if accepted == edited {
        None
    } else {
        Some(accepted)
    }
}

/// What the "Update" button commits. `None` means there is nothing to commit.
pub fn commit_input(text: &str) -> Option<f64> {
    match parse_angle(&sanitize(text)) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("Ignoring commit: {}", err);
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// AngleInputController
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Default)]
pub struct AngleInputController {
    range: AngleRange,
}

impl AngleInputController {
    pub fn new(range: AngleRange) -> Self {
        Self { range }
    }
}

impl<W: Widget<String>> Controller<String, W> for AngleInputController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut String,
        env: &Env,
    ) {
        let previous = data.clone();

        child.event(ctx, event, data, env);

        if let Some(corrected) = correct_edit(&previous, data, &self.range) {
            *data = corrected;
        }
    }
}
